//! Self describing frame around the encrypted payload.
//!
//! ```text
//! offset 0  : u32 LE   payload length  (= 16 + ciphertext length)
//! offset 4  : u32 LE   CRC-32 of iv ‖ ciphertext
//! offset 8  : [u8; 16] iv
//! offset 24 : [u8; N]  ciphertext
//! ```

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use lsbcrypt_cipher::{Iv, IV_LEN};

use crate::result::Result;
use crate::SteganoError;

pub const HEADER_LEN: usize = 8;
pub const HEADER_BITS: usize = HEADER_LEN * 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadHeader {
    pub payload_length: u32,
    pub checksum: u32,
}

impl PayloadHeader {
    /// reads the header from the first 8 bytes, further bytes are not looked at
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(SteganoError::HeaderParseError(format!(
                "{} bytes are too short for a header of {HEADER_LEN} bytes",
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(&bytes[..HEADER_LEN]);
        let payload_length = cursor.read_u32::<LittleEndian>()?;
        let checksum = cursor.read_u32::<LittleEndian>()?;

        Ok(Self {
            payload_length,
            checksum,
        })
    }

    /// checks that the announced length can hold an IV and whole cipher blocks
    pub fn validate(self, block_len: usize) -> Result<Self> {
        let len = self.payload_length as usize;
        if len < IV_LEN + block_len {
            return Err(SteganoError::HeaderParseError(format!(
                "payload length {len} cannot hold an IV and a cipher block"
            )));
        }
        if (len - IV_LEN) % block_len != 0 {
            return Err(SteganoError::HeaderParseError(format!(
                "payload length {len} does not end on a cipher block boundary"
            )));
        }

        Ok(self)
    }

    /// size of header plus payload in bytes
    pub fn frame_len(&self) -> usize {
        HEADER_LEN.saturating_add(self.payload_length as usize)
    }

    pub fn to_bytes(self) -> Result<[u8; HEADER_LEN]> {
        let mut buf = [0u8; HEADER_LEN];
        let mut cursor = Cursor::new(&mut buf[..]);
        cursor.write_u32::<LittleEndian>(self.payload_length)?;
        cursor.write_u32::<LittleEndian>(self.checksum)?;

        Ok(buf)
    }
}

/// An encrypted message with its integrity header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub header: PayloadHeader,
    pub iv: Iv,
    pub ciphertext: Vec<u8>,
}

impl Payload {
    /// frames IV and ciphertext, computing length and checksum over `iv ‖ ciphertext`
    pub fn frame(iv: Iv, ciphertext: Vec<u8>) -> Result<Self> {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&iv);
        hasher.update(&ciphertext);

        let payload_length = u32::try_from(IV_LEN + ciphertext.len()).map_err(|_| {
            SteganoError::HeaderParseError(format!(
                "{} bytes do not fit the 32 bit length field",
                IV_LEN + ciphertext.len()
            ))
        })?;

        Ok(Self {
            header: PayloadHeader {
                payload_length,
                checksum: hasher.finalize(),
            },
            iv,
            ciphertext,
        })
    }

    /// unpacks a frame and verifies its checksum, trailing bytes are ignored
    pub fn parse_and_verify(data: &[u8]) -> Result<Self> {
        let header = PayloadHeader::parse(data)?;
        if (header.payload_length as usize) < IV_LEN {
            return Err(SteganoError::HeaderParseError(format!(
                "payload length {} cannot hold an IV",
                header.payload_length
            )));
        }
        let frame_len = header.frame_len();
        if data.len() < frame_len {
            return Err(SteganoError::TruncatedData {
                expected: frame_len,
                actual: data.len(),
            });
        }

        let body = &data[HEADER_LEN..frame_len];
        let actual = crc32fast::hash(body);
        if actual != header.checksum {
            return Err(SteganoError::IntegrityError {
                expected: header.checksum,
                actual,
            });
        }

        let (iv, ciphertext) = body.split_at(IV_LEN);
        let mut iv_buf: Iv = [0u8; IV_LEN];
        iv_buf.copy_from_slice(iv);

        Ok(Self {
            header,
            iv: iv_buf,
            ciphertext: ciphertext.to_vec(),
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.header.frame_len());
        buf.extend_from_slice(&self.header.to_bytes()?);
        buf.extend_from_slice(&self.iv);
        buf.extend_from_slice(&self.ciphertext);

        Ok(buf)
    }
}
