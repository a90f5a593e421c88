//! Authentication for the Nitrous API.
//!
//! # Overview
//!
//! - [`BearerToken`]: The opaque credential for authenticated endpoints
//! - [`User`] and [`AuthResult`]: Records returned by the auth endpoints
//! - [`register`], [`login`], [`current_user`]: The auth resource functions
//!
//! The client is stateless with respect to tokens. Keep the token from
//! [`AuthResult`] and pass it to every call that needs it.
//!
//! # Example
//!
//! ```rust,ignore
//! use nitrous_api::auth::{current_user, login};
//!
//! let auth = login(&client, "rider@example.com", "hunter2222").await?;
//! let me = current_user(&client, &auth.token).await?;
//! assert_eq!(me.id, auth.user.id);
//! ```

mod credentials;
mod token;
mod user;

pub use credentials::{current_user, login, register};
pub use token::BearerToken;
pub use user::{AuthResult, User};
