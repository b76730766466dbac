//! Bitcoin-style `rpcauth=` credential line generator.
//!
//! Generates a random salt and password, derives HMAC-SHA256 of the password
//! keyed by the salt, and prints the configuration line the operator appends
//! to bitcoin.conf, followed by the plaintext password.
//!
//! ## Modules
//! - `cli` — Command-line surface
//! - `core` — Salt, digest, and line generation

pub mod cli;
pub mod constants;
pub mod core;
