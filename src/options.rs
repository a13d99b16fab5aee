//! Parsing options threaded through a single `parse` call.
//!
//! The options are captured by the produced [`Archive`](crate::Archive)
//! so that later queries (size reporting, forced text decoding) behave
//! consistently with the parse that built the model. There is no
//! process-wide state.

use crate::codec::Codepage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// EBCDIC codepage used for every character field and text payload.
    pub codepage: Codepage,
    /// Strip the 8-digit sequence-number column off fixed-record text.
    pub strip_seqnum: bool,
    /// Convert every payload to text, whatever the classifier thinks.
    pub force_convert: bool,
    /// Report raw byte sizes even for text-classified entries.
    pub binary: bool,
    /// Record length used when no LRECL is recoverable from the
    /// container itself.
    pub lrecl: u16,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            codepage: Codepage::default(),
            strip_seqnum: true,
            force_convert: false,
            binary: false,
            lrecl: 80,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_codepage(mut self, codepage: Codepage) -> Self {
        self.codepage = codepage;
        self
    }

    pub fn with_strip_seqnum(mut self, strip: bool) -> Self {
        self.strip_seqnum = strip;
        self
    }

    pub fn with_force_convert(mut self, force: bool) -> Self {
        self.force_convert = force;
        self
    }

    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    pub fn with_lrecl(mut self, lrecl: u16) -> Self {
        self.lrecl = lrecl;
        self
    }
}
