//! Common library for the users service
//!
//! This crate holds the user registry: the in-memory store of user records
//! together with the identity and email-uniqueness rules that guard every
//! mutation. Transport layers call into [`registry::UserRegistry`] rather
//! than touching user state themselves.

pub mod error;
pub mod models;
pub mod registry;

pub use error::{UserError, UserResult};
pub use models::{NewUser, UpdateUser, User};
pub use registry::UserRegistry;

/// Example usage of the registry
///
/// ```rust
/// use common::{NewUser, UserRegistry};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let registry = UserRegistry::new();
///     let user = registry
///         .create(NewUser {
///             email: Some("a@x.com".to_string()),
///             ..Default::default()
///         })
///         .await?;
///     assert_eq!(user.id, 1);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
