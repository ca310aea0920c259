//! Conversion between bytes and the bit stream that is written into color channels.
//!
//! Bits are ordered most significant bit first within each byte.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::result::Result;
use crate::SteganoError;

pub type BitStream = Vec<bool>;

/// unpacks bytes into `8 * bytes.len()` bits
pub fn to_bits(bytes: &[u8]) -> BitStream {
    let bit_count = bytes.len() * 8;
    let mut reader = BitReader::endian(bytes, BigEndian);

    // reading from an in-memory slice of known length cannot run dry
    (0..bit_count)
        .map_while(|_| reader.read_bit().ok())
        .collect()
}

/// packs bits back into bytes, the bit count must be a multiple of 8
pub fn from_bits(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(SteganoError::UnalignedBitStream(bits.len()));
    }

    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() / 8), BigEndian);
    for bit in bits {
        writer.write_bit(*bit)?;
    }

    Ok(writer.into_writer())
}
