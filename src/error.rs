//! Error types for NBT reading, writing and typed access.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when decoding, encoding or querying an NBT tree.
//!
//! # Example
//!
//! ```
//! use nbt_tree::{BigEndian, Error, Result, from_slice};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match from_slice::<BigEndian>(data) {
//!         Ok(_) => Ok(()),
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(Error::InvalidTagType(tag)) => {
//!             println!("Unknown tag type: {:#04x}", tag);
//!             Err(Error::InvalidTagType(tag))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(try_parse(&[0x0A, 0x00, 0x00, 0x00]).is_ok());
//! assert!(try_parse(&[0x0A, 0x00]).is_err());
//! ```

use std::fmt::{self, Display};
use std::io;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when reading,
/// writing or querying NBT data.
#[derive(Debug)]
pub enum Error {
    /// A custom message raised through serde.
    Message(String),

    /// An I/O error occurred.
    ///
    /// Raised when the underlying [`std::io::Read`] or [`std::io::Write`]
    /// fails for any reason other than running out of input. Never retried.
    IO(io::Error),

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the NBT data is truncated or incomplete, for
    /// example when a compound is missing its terminating END byte.
    EndOfFile,

    /// Extra bytes remain after the root tag.
    ///
    /// Only raised by the slice based entry points, which expect a document
    /// to be consumed completely.
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-12. A byte outside this range where a tag type
    /// is expected, or an END (0) in a position where a real tag is required,
    /// is reported with the offending byte.
    InvalidTagType(u8),

    /// A length prefix on the wire was negative.
    NegativeLength(i32),

    /// A list or array has more elements than the format can express.
    ListTooLong(usize),

    /// A string encodes to more bytes than a `u16` length prefix allows.
    StringTooLong(usize),

    /// A name or string payload is not valid modified UTF-8.
    InvalidString,

    /// A value of one kind was found where another was expected.
    ///
    /// Holds `(expected, actual)` tag ids.
    TagMismatch(u8, u8),

    /// A typed lookup asked for a key the compound does not contain.
    KeyNotFound(String),

    /// Nesting of lists and compounds went past the configured limit.
    DepthLimitExceeded(usize),
}

impl From<io::Error> for Error {
    #[inline]
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            Error::EndOfFile
        } else {
            Error::IO(error)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            )),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::NegativeLength(len) => {
                formatter.write_str(&format!("negative length prefix: {len}"))
            }
            Error::ListTooLong(len) => formatter.write_str(&format!("list length too long: {len}")),
            Error::StringTooLong(len) => {
                formatter.write_str(&format!("string length too long: {len} bytes"))
            }
            Error::InvalidString => formatter.write_str("invalid modified UTF-8 string"),
            Error::TagMismatch(expected, actual) => formatter.write_str(&format!(
                "tag mismatch: expected {expected:#04x}, got {actual:#04x}"
            )),
            Error::KeyNotFound(key) => formatter.write_str(&format!("no tag named {key:?}")),
            Error::DepthLimitExceeded(limit) => {
                formatter.write_str(&format!("nesting depth exceeds limit of {limit}"))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}
