//! # Password Encryption
//! Key derivation (PBKDF2-HMAC-SHA256) and AES in CBC mode with PKCS#7 padding,
//! used by lsbcrypt-core to turn a message into the ciphertext it hides.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

pub mod error;
pub mod kdf;

pub use crate::error::CipherError;
pub use crate::kdf::{derive_default_key, derive_key, DerivedKey, KdfParams};

pub const IV_LEN: usize = 16;
pub const BLOCK_LEN: usize = 16;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Iv = [u8; IV_LEN];

/// encrypt data with a fresh random IV, returns the IV and the padded ciphertext
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> Result<(Iv, Vec<u8>)> {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    let ciphertext = encrypt_with_iv(plaintext, key, &iv)?;

    Ok((iv, ciphertext))
}

/// encrypt data with a caller provided IV
pub fn encrypt_with_iv(plaintext: &[u8], key: &DerivedKey, iv: &Iv) -> Result<Vec<u8>> {
    let key = key.as_ref();
    match key.len() {
        16 => encrypt_cbc::<aes::Aes128>(key, iv, plaintext),
        24 => encrypt_cbc::<aes::Aes192>(key, iv, plaintext),
        32 => encrypt_cbc::<aes::Aes256>(key, iv, plaintext),
        n => Err(CipherError::InvalidKeyLength(n)),
    }
}

/// decrypt data and strip the padding
///
/// A wrong key almost always shows up here as [`CipherError::Padding`].
pub fn decrypt(iv: &Iv, ciphertext: &[u8], key: &DerivedKey) -> Result<Vec<u8>> {
    let key = key.as_ref();
    match key.len() {
        16 => decrypt_cbc::<aes::Aes128>(key, iv, ciphertext),
        24 => decrypt_cbc::<aes::Aes192>(key, iv, ciphertext),
        32 => decrypt_cbc::<aes::Aes256>(key, iv, ciphertext),
        n => Err(CipherError::InvalidKeyLength(n)),
    }
}

/// padded length of a plaintext of `len` bytes, PKCS#7 always adds at least one byte
pub fn ciphertext_len(len: usize) -> usize {
    (len / BLOCK_LEN + 1) * BLOCK_LEN
}

fn encrypt_cbc<C>(key: &[u8], iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CipherError::InvalidKeyLength(key.len()))?;

    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_cbc<C>(key: &[u8], iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CipherError::InvalidKeyLength(key.len()))?;

    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(CipherError::Padding)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    fn fast_key(password: &str) -> DerivedKey {
        derive_key(password, &KdfParams::default().with_iterations(1_000))
    }

    #[test]
    fn test_nist_sp800_38a_first_block() {
        let key = DerivedKey::from(hex!("2b7e151628aed2a6abf7158809cf4f3c").to_vec());
        let iv = hex!("000102030405060708090a0b0c0d0e0f");
        let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");

        let ciphertext = encrypt_with_iv(&plaintext, &key, &iv).unwrap();

        // one full block of data plus one block of padding
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(ciphertext[..16], hex!("7649abac8119b246cee98e9b12e9197d"));
        assert_eq!(decrypt(&iv, &ciphertext, &key).unwrap(), plaintext);
    }

    #[test]
    fn test_encryption_round_trip() {
        let key = fast_key("resistance is futile");
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

        let (iv, cipher_data) = encrypt(data, &key).unwrap();
        let decipher_data = decrypt(&iv, &cipher_data, &key).unwrap();

        assert_ne!(data, cipher_data.as_slice());
        assert_eq!(cipher_data.len(), ciphertext_len(data.len()));
        assert_eq!(data, decipher_data.as_slice());
    }

    #[test]
    fn test_fresh_iv_per_call() {
        let key = fast_key("lab3");

        let (iv1, c1) = encrypt(b"hi", &key).unwrap();
        let (iv2, c2) = encrypt(b"hi", &key).unwrap();

        assert_ne!(iv1, iv2);
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_all_key_sizes() {
        for key_len in [16, 24, 32] {
            let key = derive_key(
                "lab3",
                &KdfParams::default().with_iterations(10).with_key_len(key_len),
            );
            let (iv, c) = encrypt(b"hi", &key).unwrap();

            assert_eq!(decrypt(&iv, &c, &key).unwrap(), b"hi");
        }
    }

    #[test]
    fn test_unsupported_key_size() {
        let key = DerivedKey::from(vec![1u8; 20]);

        assert!(matches!(
            encrypt(b"hi", &key),
            Err(CipherError::InvalidKeyLength(20))
        ));
        assert!(matches!(
            decrypt(&[0; IV_LEN], &[0; 16], &key),
            Err(CipherError::InvalidKeyLength(20))
        ));
    }

    #[test]
    fn test_empty_plaintext_is_one_padding_block() {
        let key = fast_key("lab3");
        let (iv, c) = encrypt(b"", &key).unwrap();

        assert_eq!(c.len(), BLOCK_LEN);
        assert!(decrypt(&iv, &c, &key).unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_padding_is_rejected() {
        let key = fast_key("lab3");
        let (mut iv, ciphertext) = encrypt(b"hi", &key).unwrap();

        // "hi" is padded with 14 bytes of 0x0e, flipping the IV turns the last one into 0x00
        iv[IV_LEN - 1] ^= 0x0e;

        assert!(matches!(
            decrypt(&iv, &ciphertext, &key),
            Err(CipherError::Padding(_))
        ));
    }

    #[test]
    fn test_padding_error_keeps_its_source() {
        let key = fast_key("lab3");
        let err = decrypt(&[0; IV_LEN], &[0; 15], &key).unwrap_err();

        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_wrong_key_never_yields_plaintext() {
        let (iv, ciphertext) = encrypt(b"hi", &fast_key("lab3")).unwrap();

        match decrypt(&iv, &ciphertext, &fast_key("wrong")) {
            Err(CipherError::Padding(_)) => (),
            Ok(garbage) => assert_ne!(garbage, b"hi"),
            Err(e) => panic!("unexpected error {e}"),
        }
    }

    #[test]
    fn test_partial_block_is_rejected() {
        let key = fast_key("lab3");

        assert!(matches!(
            decrypt(&[0; IV_LEN], &[0; 15], &key),
            Err(CipherError::Padding(_))
        ));
    }
}
