//! Entry points for front ends, one function per user facing operation.

mod hide;
mod unveil;
mod unveil_raw;

use std::path::Path;

use log::info;

pub use hide::hide;
pub use unveil::unveil;
pub use unveil_raw::unveil_raw;

use crate::media::image::{EmbeddingStrategy, LsbCodec};
use crate::media::payload::CryptedPayloadCodec;
use crate::media::{Media, Persist};
use crate::result::Result;

/// encrypts a text message and frames it with length and checksum
pub fn prepare_for_embedding(message: &str, password: &str) -> Result<Vec<u8>> {
    CryptedPayloadCodec::new(password).encode(message.as_bytes())
}

/// hides prepared bytes at password keyed positions and saves the result as PNG
///
/// Nothing is written to `output_path` when the image is too small.
pub fn embed_hybrid(
    image_path: &Path,
    data: &[u8],
    password: &str,
    output_path: &Path,
) -> Result<()> {
    embed_with(
        image_path,
        data,
        &EmbeddingStrategy::permuted(password),
        output_path,
    )
}

/// hides prepared bytes in the natural channel order, without any key
pub fn embed_simple(image_path: &Path, data: &[u8], output_path: &Path) -> Result<()> {
    embed_with(image_path, data, &EmbeddingStrategy::sequential(), output_path)
}

/// reads the framed bytes hidden with [`embed_hybrid`]
pub fn extract_framed(image_path: &Path, password: &str) -> Result<Vec<u8>> {
    let carrier = Media::from_file(image_path)?;

    LsbCodec::extract(&carrier, &EmbeddingStrategy::permuted(password))
}

/// verifies and decrypts framed bytes back into the text message
pub fn decrypt_framed(data: &[u8], password: &str) -> Result<String> {
    let plaintext = CryptedPayloadCodec::new(password).decode(data)?;

    Ok(String::from_utf8(plaintext)?)
}

fn embed_with(
    image_path: &Path,
    data: &[u8],
    strategy: &EmbeddingStrategy,
    output_path: &Path,
) -> Result<()> {
    let carrier = Media::from_file(image_path)?;
    let secret = LsbCodec::embed(&carrier, data, strategy)?;
    secret.save_as(output_path)?;
    info!("data embedded into {output_path:?}");

    Ok(())
}
