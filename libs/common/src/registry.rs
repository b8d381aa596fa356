//! In-memory user registry
//!
//! The registry is the only owner of user records. It assigns ids and
//! registration timestamps, enforces email uniqueness, and applies partial
//! updates. Every mutation holds the write lock for its whole
//! check-then-write sequence, so concurrent requests cannot hand out the
//! same id or claim the same email twice.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, UpdateUser, User, provided};

/// User registry
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    /// Stored users keyed by id
    users: Arc<RwLock<HashMap<u64, User>>>,
}

impl UserRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all users, in no particular order
    pub async fn find_all(&self) -> Vec<User> {
        let users = self.users.read().await;
        users.values().cloned().collect()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: u64) -> Option<User> {
        debug!("Finding user by ID: {}", id);
        let users = self.users.read().await;
        users.get(&id).cloned()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the registry holds no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Create a new user
    ///
    /// The candidate's email must be present and not blank, and must not
    /// belong to any stored user. The id and registration date are always
    /// assigned here.
    pub async fn create(&self, candidate: NewUser) -> UserResult<User> {
        let Some(email) = provided(candidate.email.as_deref()).map(str::to_string) else {
            warn!("Rejected user creation without email");
            return Err(UserError::Validation("Email must be provided".to_string()));
        };

        let mut users = self.users.write().await;

        if email_is_busy(&users, &email, None) {
            warn!("Rejected user creation, email already in use: {}", email);
            return Err(UserError::DuplicateEmail(email));
        }

        let user = User {
            id: next_id(&users),
            email,
            username: candidate.username,
            password: candidate.password,
            registration_date: Utc::now(),
        };
        users.insert(user.id, user.clone());

        info!("Created user with ID: {}", user.id);
        Ok(user)
    }

    /// Update an existing user
    ///
    /// Checks run in a fixed order: a missing id is a validation failure,
    /// then an email owned by another user is a conflict, and only then is
    /// an unknown id reported. A conflict can therefore be returned for an
    /// id that does not exist.
    pub async fn update(&self, patch: UpdateUser) -> UserResult<User> {
        let Some(id) = patch.id else {
            warn!("Rejected user update without id");
            return Err(UserError::Validation("Id must be provided".to_string()));
        };

        let mut users = self.users.write().await;

        let email = provided(patch.email.as_deref());
        if let Some(email) = email {
            if email_is_busy(&users, email, Some(id)) {
                warn!("Rejected update of user {}, email already in use: {}", id, email);
                return Err(UserError::DuplicateEmail(email.to_string()));
            }
        }

        let Some(user) = users.get_mut(&id) else {
            warn!("Rejected update of unknown user: {}", id);
            return Err(UserError::NotFound(id));
        };

        if let Some(username) = provided(patch.username.as_deref()) {
            user.username = Some(username.to_string());
        }
        if let Some(password) = provided(patch.password.as_deref()) {
            user.password = Some(password.to_string());
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }

        info!("Updated user with ID: {}", id);
        Ok(user.clone())
    }
}

/// Next id to assign: one past the largest stored id, or 1 when empty
fn next_id(users: &HashMap<u64, User>) -> u64 {
    users.keys().copied().max().unwrap_or(0) + 1
}

/// Whether any user other than `exclude` already has exactly this email
fn email_is_busy(users: &HashMap<u64, User>, email: &str, exclude: Option<u64>) -> bool {
    users
        .values()
        .filter(|user| Some(user.id) != exclude)
        .any(|user| user.email == email)
}
