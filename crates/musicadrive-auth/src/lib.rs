//! # musicadrive-auth
//!
//! First-party authentication for the backoffice: JWT access/refresh
//! tokens and Argon2id password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::PasswordHasher;
