//! Centralized constants for credential sizes.

/// Salt length in bytes, before base64 encoding.
pub const SALT_LEN: usize = 16;

/// Generated password length in bytes, before base64 encoding.
pub const PASSWORD_LEN: usize = 16;
