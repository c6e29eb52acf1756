//! Authentication adapters.
//!
//! Implementations of the `AccessTokenValidator` port:
//!
//! - `jwt` - HS256 shared-secret bearer tokens
//! - `mock` - Fixed token table for tests

mod jwt;
mod mock;

pub use jwt::JwtAccessTokenValidator;
pub use mock::MockAccessTokenValidator;
