//! Errors for container parsing and archive queries.
//!
//! Framing problems are strict: any malformed container byte surfaces an
//! error carrying the offset it was noticed at, and no archive is
//! produced. Per-member problems inside a well-framed container degrade
//! gracefully instead (the affected field becomes `None`).

use core::fmt;
use core::result;

#[derive(Debug)]
pub enum Error {
    /// The input matches neither the XMIT nor the AWS/HET signature.
    NotAContainer,
    /// A declared length runs past the end of the buffer.
    Truncated(usize),
    /// Segment or control-record framing violation in an XMIT stream.
    MalformedXmit { expected: String, at_offset: usize },
    /// Unrecognized block flags or a bad label record on a tape.
    MalformedTape { reason: String, at_offset: usize },
    /// A COPYR1 control record with an over-long structure.
    BadCopyR1 { reason: String },
    /// A COPYR2 control record that does not fit the DEB + extents layout.
    BadCopyR2 { reason: String },
    /// A tape block flags a compression scheme this build cannot undo.
    UnsupportedCompression(u16),
    /// The requested EBCDIC codepage is not in the registry.
    CodepageUnknown(String),
    UnknownDataset(String),
    UnknownMember(String),
    /// An alias directory entry whose TTR no non-alias member owns.
    DanglingAlias(String),
    /// Text was requested for a binary-classified entry.
    NotText(String),
}

pub type Result<T> = result::Result<T, Error>;

impl std::error::Error for Error {}

impl From<scroll::Error> for Error {
    fn from(err: scroll::Error) -> Error {
        match err {
            scroll::Error::BadOffset(offset) => Error::Truncated(offset),
            scroll::Error::TooBig { size, .. } => Error::Truncated(size),
            _ => Error::Truncated(0),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NotAContainer => write!(fmt, "Not an XMIT or AWS/HET virtual tape"),
            Error::Truncated(offset) => {
                write!(fmt, "Input ends before declared length at offset {offset:#x}")
            }
            Error::MalformedXmit {
                ref expected,
                at_offset,
            } => write!(fmt, "Malformed XMIT: expected {expected} at offset {at_offset:#x}"),
            Error::MalformedTape {
                ref reason,
                at_offset,
            } => write!(fmt, "Malformed tape: {reason} at offset {at_offset:#x}"),
            Error::BadCopyR1 { ref reason } => write!(fmt, "Bad COPYR1 record: {reason}"),
            Error::BadCopyR2 { ref reason } => write!(fmt, "Bad COPYR2 record: {reason}"),
            Error::UnsupportedCompression(flags) => {
                write!(fmt, "Unsupported tape block compression (flags {flags:#06x})")
            }
            Error::CodepageUnknown(ref name) => write!(fmt, "Unknown EBCDIC codepage: {name}"),
            Error::UnknownDataset(ref name) => write!(fmt, "No dataset named {name}"),
            Error::UnknownMember(ref name) => write!(fmt, "No member named {name}"),
            Error::DanglingAlias(ref name) => {
                write!(fmt, "Alias {name} has no resolvable target member")
            }
            Error::NotText(ref name) => {
                write!(fmt, "{name} is binary and force conversion is off")
            }
        }
    }
}
