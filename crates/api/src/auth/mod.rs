//! Authentication building blocks: JWT access tokens, opaque refresh
//! tokens, and argon2 password hashing.

pub mod jwt;
pub mod password;
