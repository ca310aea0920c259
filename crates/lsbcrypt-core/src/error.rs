use std::string::FromUtf8Error;
use thiserror::Error;

pub use lsbcrypt_cipher::CipherError;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a lossy JPEG or a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents the error of invalid UTF-8 text data found inside of a decrypted message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// More bits were requested than the image has color channels.
    #[error(
        "Capacity Error: {required} bits are needed but the image only provides {available} bits"
    )]
    ImageCapacityError { required: usize, available: usize },

    /// The frame header announces more bytes than were supplied
    #[error("Truncated data: the header announces {expected} bytes but only {actual} are present")]
    TruncatedData { expected: usize, actual: usize },

    /// The checksum of the frame body does not match the header, either the
    /// image was altered or the password is wrong
    #[error("Integrity error: CRC32 mismatch (expected {expected:08x}, calculated {actual:08x})")]
    IntegrityError { expected: u32, actual: u32 },

    /// The frame header does not decode into a plausible length and checksum
    #[error("Header parse error: {0}")]
    HeaderParseError(String),

    /// A bit stream that does not end on a byte boundary cannot be packed into bytes
    #[error("Bit stream of {0} bits is not byte aligned")]
    UnalignedBitStream(usize),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(#[source] CipherError),

    /// Represents an error when decrypting the data, usually a wrong password
    #[error("Decryption error, the password is most likely wrong")]
    DecryptionError(#[source] CipherError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password, the permuted concealer is keyed by it")]
    MissingPassword,
}
