pub use cbc::cipher::block_padding::UnpadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The derived key does not match any supported AES key size
    #[error("Unsupported key length of {0} bytes, expected 16, 24 or 32")]
    InvalidKeyLength(usize),

    /// Decryption produced structurally invalid padding, almost always a wrong password
    #[error("Invalid padding after decryption")]
    Padding(#[source] UnpadError),
}
