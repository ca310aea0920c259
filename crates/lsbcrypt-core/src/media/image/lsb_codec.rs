use image::RgbImage;
use log::debug;

use super::strategy::{EmbeddingStrategy, PositionStrategy};
use crate::bit_packer::{from_bits, to_bits};
use crate::media::payload::{PayloadHeader, HEADER_BITS};
use crate::permutation::{ImageShape, Position};
use crate::result::Result;
use crate::SteganoError;

/// Embeds into and extracts from the least significant bit of color channels.
pub struct LsbCodec;

impl LsbCodec {
    pub fn shape(carrier: &RgbImage) -> ImageShape {
        let (width, height) = carrier.dimensions();
        ImageShape::new(height as usize, width as usize)
    }

    /// number of bits the carrier can hold, one per color channel
    pub fn capacity(carrier: &RgbImage) -> usize {
        Self::shape(carrier).capacity()
    }

    /// bits needed to hide `data_len` bytes
    pub fn required_bits(data_len: usize) -> usize {
        data_len * 8
    }

    /// writes `data` into a copy of the carrier, the carrier itself stays untouched
    ///
    /// Capacity is checked before any position is generated or channel is touched.
    pub fn embed(
        carrier: &RgbImage,
        data: &[u8],
        strategy: &EmbeddingStrategy,
    ) -> Result<RgbImage> {
        let shape = Self::shape(carrier);
        let required = Self::required_bits(data.len());
        if required > shape.capacity() {
            return Err(SteganoError::ImageCapacityError {
                required,
                available: shape.capacity(),
            });
        }

        let bits = to_bits(data);
        let positions = strategy.positions(shape, bits.len())?;

        let mut secret = carrier.clone();
        let channels: &mut [u8] = &mut secret;
        for (position, bit) in positions.iter().zip(bits) {
            let channel = &mut channels[position.flat_index(shape.width)];
            *channel = (*channel & (u8::MAX - 1)) | u8::from(bit);
        }
        debug!(
            "embedded {} bits into {}x{} carrier ({} bits capacity)",
            required,
            shape.width,
            shape.height,
            shape.capacity()
        );

        Ok(secret)
    }

    /// reads the framed payload back, header first to learn the payload length
    ///
    /// The returned bytes are `header ‖ iv ‖ ciphertext`, not yet verified.
    pub fn extract(carrier: &RgbImage, strategy: &EmbeddingStrategy) -> Result<Vec<u8>> {
        let shape = Self::shape(carrier);

        let header_positions = strategy.positions(shape, HEADER_BITS)?;
        let header_bytes = Self::read_bytes(carrier, &header_positions)?;
        let header = PayloadHeader::parse(&header_bytes)?.validate(lsbcrypt_cipher::BLOCK_LEN)?;
        debug!("header announces {} payload bytes", header.payload_length);

        let total_bits = header
            .frame_len()
            .checked_mul(8)
            .ok_or_else(|| SteganoError::ImageCapacityError {
                required: usize::MAX,
                available: shape.capacity(),
            })?;
        let positions = strategy.positions(shape, total_bits)?;
        let frame = Self::read_bytes(carrier, &positions)?;
        debug!("extracted {} framed bytes", frame.len());

        Ok(frame)
    }

    fn read_bytes(carrier: &RgbImage, positions: &[Position]) -> Result<Vec<u8>> {
        let width = carrier.width() as usize;
        let channels: &[u8] = carrier;
        let bits: Vec<bool> = positions
            .iter()
            .map(|p| channels[p.flat_index(width)] & 1 == 1)
            .collect();

        from_bits(&bits)
    }
}
