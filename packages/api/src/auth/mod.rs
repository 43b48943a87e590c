//! Authentication primitives: password hashing and access tokens.

mod password;
mod token;

pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, Claims};
