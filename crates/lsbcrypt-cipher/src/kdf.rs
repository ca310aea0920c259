//! Password based key derivation.

use std::fmt::{self, Debug, Formatter};

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

pub const DEFAULT_SALT: &[u8] = b"fixed_salt_lab3";
pub const DEFAULT_ITERATIONS: u32 = 100_000;
pub const DEFAULT_KEY_LEN: usize = 16;

/// Parameters of the PBKDF2-HMAC-SHA256 key derivation.
///
/// The salt is application wide, so the same password always yields the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    pub salt: Vec<u8>,
    pub iterations: u32,
    pub key_len: usize,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            key_len: DEFAULT_KEY_LEN,
        }
    }
}

impl KdfParams {
    pub fn with_key_len(mut self, key_len: usize) -> Self {
        self.key_len = key_len;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Symmetric key material, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKey(Vec<u8>);

impl DerivedKey {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for DerivedKey {
    fn from(key: Vec<u8>) -> Self {
        Self(key)
    }
}

impl Debug for DerivedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey({} bytes)", self.0.len())
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// derives a key from the password with the given parameters
pub fn derive_key(password: &str, params: &KdfParams) -> DerivedKey {
    let mut key = vec![0u8; params.key_len];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &params.salt, params.iterations, &mut key);

    DerivedKey(key)
}

/// derives a key with the application defaults, see [`KdfParams::default`]
pub fn derive_default_key(password: &str) -> DerivedKey {
    derive_key(password, &KdfParams::default())
}
