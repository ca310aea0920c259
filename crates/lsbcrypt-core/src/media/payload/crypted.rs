use std::fmt::{self, Debug, Formatter};

use lsbcrypt_cipher::{decrypt, derive_key, encrypt, DerivedKey, KdfParams};
use log::debug;

use super::Payload;
use crate::result::Result;
use crate::SteganoError;

/// Encrypts and frames messages, and verifies and decrypts them again.
///
/// The key is derived once when the codec is created and lives as long as the codec.
pub struct CryptedPayloadCodec {
    key: DerivedKey,
}

impl CryptedPayloadCodec {
    /// derives the key with the application wide [`KdfParams::default`]
    pub fn new(password: &str) -> Self {
        Self::with_params(password, &KdfParams::default())
    }

    pub fn with_params(password: &str, params: &KdfParams) -> Self {
        Self {
            key: derive_key(password, params),
        }
    }

    /// plaintext to `header ‖ iv ‖ ciphertext`
    pub fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let (iv, ciphertext) =
            encrypt(plaintext, &self.key).map_err(SteganoError::EncryptionError)?;
        let payload = Payload::frame(iv, ciphertext)?;
        debug!(
            "framed {} plaintext bytes into a payload of {} bytes",
            plaintext.len(),
            payload.header.payload_length
        );

        payload.to_bytes()
    }

    /// verifies the checksum first, then decrypts
    pub fn decode(&self, framed: &[u8]) -> Result<Vec<u8>> {
        let payload = Payload::parse_and_verify(framed)?;

        decrypt(&payload.iv, &payload.ciphertext, &self.key).map_err(SteganoError::DecryptionError)
    }
}

impl Debug for CryptedPayloadCodec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptedPayloadCodec")
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use lsbcrypt_cipher::{ciphertext_len, IV_LEN};

    use super::*;
    use crate::media::payload::HEADER_LEN;

    fn fast_codec(password: &str) -> CryptedPayloadCodec {
        CryptedPayloadCodec::with_params(password, &KdfParams::default().with_iterations(1_000))
    }

    #[test]
    fn test_encryption_codec() {
        let codec = fast_codec("password42");
        let framed = codec.encode(b"Hello World").unwrap();

        assert_eq!(framed.len(), HEADER_LEN + IV_LEN + ciphertext_len(11));
        assert_eq!(codec.decode(&framed).unwrap(), b"Hello World");
    }

    #[test]
    fn test_two_byte_message_frames_into_40_bytes() {
        let framed = fast_codec("lab3").encode(b"hi").unwrap();

        assert_eq!(framed.len(), 40);
        assert_eq!(framed[..4], 32u32.to_le_bytes());
    }

    #[test]
    fn test_wrong_password_is_not_silently_accepted() {
        let framed = fast_codec("lab3").encode(b"hi").unwrap();

        match fast_codec("wrong").decode(&framed) {
            Err(SteganoError::DecryptionError(_)) => (),
            Ok(garbage) => assert_ne!(garbage, b"hi"),
            Err(e) => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn test_integrity_is_checked_before_decryption() {
        let codec = fast_codec("lab3");
        let mut framed = codec.encode(b"hi").unwrap();
        let last = framed.len() - 1;
        framed[last] ^= 0x01;

        assert!(matches!(
            codec.decode(&framed),
            Err(SteganoError::IntegrityError { .. })
        ));
    }

    #[test]
    fn test_decryption_error_keeps_the_cause_chain() {
        let codec = fast_codec("lab3");
        let framed = codec.encode(b"hi").unwrap();
        let mut payload = Payload::parse_and_verify(&framed).unwrap();
        // reframed with a valid checksum, but the last padding byte becomes 0x00
        payload.iv[IV_LEN - 1] ^= 0x0e;
        let reframed = Payload::frame(payload.iv, payload.ciphertext)
            .unwrap()
            .to_bytes()
            .unwrap();

        let err = codec.decode(&reframed).unwrap_err();
        assert!(matches!(err, SteganoError::DecryptionError(_)));

        let cause = std::error::Error::source(&err).expect("cipher error as source");
        assert!(cause.is::<lsbcrypt_cipher::CipherError>());
        assert!(std::error::Error::source(cause).is_some());
    }

    #[test]
    fn test_debug_hides_key() {
        let codec = fast_codec("lab3");

        assert_eq!(
            format!("{codec:?}"),
            "CryptedPayloadCodec { key: DerivedKey(16 bytes) }"
        );
    }
}
