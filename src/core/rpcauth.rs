//! Salt generation, HMAC digest, and `rpcauth=` line formatting.

use crate::constants;
use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// Generate `length` bytes from the OS CSPRNG, URL-safe base64 encoded.
///
/// Entropy source failure is fatal and propagated as-is; there is no
/// fallback to a non-cryptographic generator.
pub fn generate_salt(length: usize) -> Result<String> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("read from OS random source")?;
    Ok(URL_SAFE.encode(&bytes))
}

/// Generate a random password: 16 CSPRNG bytes as URL-safe base64 text.
pub fn generate_password() -> Result<Zeroizing<String>> {
    let mut bytes = Zeroizing::new([0u8; constants::PASSWORD_LEN]);
    OsRng
        .try_fill_bytes(&mut *bytes)
        .context("read from OS random source")?;
    Ok(Zeroizing::new(URL_SAFE.encode(&*bytes)))
}

/// HMAC-SHA256 with the salt's text bytes as key and the password's text
/// bytes as message, returned as 64 lowercase hex characters.
///
/// Deterministic for fixed inputs.
pub fn compute_digest(salt: &str, password: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(salt.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(password.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Build the `rpcauth=<user>:<salt>$<digest>` line with a fresh salt.
///
/// Returns the line together with the unchanged password so the caller can
/// display it. The username is passed through unescaped; characters with
/// special meaning in bitcoin.conf are the caller's problem.
pub fn generate_rpcauth(user: &str, password: &str) -> Result<(String, Zeroizing<String>)> {
    let salt = generate_salt(constants::SALT_LEN)?;
    let digest = compute_digest(&salt, password);
    let line = format!("rpcauth={}:{}${}", user, salt, digest);
    Ok((line, Zeroizing::new(password.to_string())))
}
