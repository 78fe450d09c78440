use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length used for every authorization attempt. RFC 7636 allows 43..=128;
/// we always use the maximum.
pub const VERIFIER_LENGTH: usize = 128;

/// Draws `length` characters from the 62-char alphanumeric alphabet using
/// the OS CSPRNG. One random byte per character, reduced modulo the
/// alphabet size; the residual bias is negligible at this length.
pub fn generate_verifier(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
        .collect()
}

/// S256 challenge: unpadded base64url of the SHA-256 digest of the
/// verifier's UTF-8 bytes.
pub fn derive_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
