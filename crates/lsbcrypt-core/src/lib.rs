//! # LsbCrypt Core API
//!
//! Hides a text message in the least significant bits of a lossless RGB image.
//! The message is encrypted with AES-CBC under a password derived key, framed with
//! its length and a CRC32 checksum, and spread over password keyed pixel channels.
//!
//! The high level entry points live in [`api`] as builders, and in [`commands`]
//! as plain functions.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{ImageBuffer, Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier: RgbImage = ImageBuffer::from_fn(64, 64, |x, y| Rgb([x as u8, y as u8, 128]));
//! carrier
//!     .save(temp_dir.path().join("carrier.png"))
//!     .expect("Failed to write carrier image");
//!
//! lsbcrypt_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_password("SuperSecret42") // will encrypt the message and key the positions
//!     .with_image(temp_dir.path().join("carrier.png"))
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = lsbcrypt_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-secret.png"))
//!     .using_password("SuperSecret42")
//!     .unveil_message()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_packer;
pub mod commands;
pub mod error;
pub mod media;
pub mod permutation;
pub mod result;

pub use crate::error::SteganoError;
pub use crate::media::image::{EmbeddingStrategy, LsbCodec};
pub use crate::media::payload::{CryptedPayloadCodec, Payload, PayloadHeader};
pub use crate::media::{CodecOptions, Concealer, Media, Persist};
pub use crate::permutation::{ImageShape, Position};
pub use crate::result::Result;
pub use lsbcrypt_cipher::KdfParams;
