//! The dataset model shared by both container kinds, plus the info
//! records the query surface hands out.

use crate::iebcopy::Pds;
use crate::tape::label::{Hdr1, Hdr2};

/// One logical dataset recovered from a container: its reassembled
/// payload, what the classifier thought of it, and — when the payload
/// is an IEBCOPY unload — the decoded PDS.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    /// Reassembled logical records, exactly as they came off the
    /// container and before any PDS interpretation.
    pub blocks: Vec<Vec<u8>>,
    pub mimetype: String,
    /// Classifier encoding sub-value: `binary`, `us-ascii`, `ebcdic`.
    pub encoding: &'static str,
    pub extension: Option<String>,
    /// Decoded text when the payload classified as text-like.
    pub text: Option<String>,
    pub kind: DatasetKind,
    /// ANSI/IBM standard labels, tape containers only.
    pub hdr1: Option<Hdr1>,
    pub hdr2: Option<Hdr2>,
    pub utl: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetKind {
    Sequential,
    Pds(Pds),
}

impl Dataset {
    pub fn is_pds(&self) -> bool {
        matches!(self.kind, DatasetKind::Pds(_))
    }

    pub fn is_sequential(&self) -> bool {
        !self.is_pds()
    }

    pub fn pds(&self) -> Option<&Pds> {
        match &self.kind {
            DatasetKind::Pds(pds) => Some(pds),
            DatasetKind::Sequential => None,
        }
    }

    /// The dataset payload as one byte run.
    pub fn raw(&self) -> Vec<u8> {
        self.blocks.concat()
    }

    /// Raw payload size: the sum of member payloads for a PDS, the
    /// reassembled byte length otherwise.
    pub fn size(&self) -> usize {
        match &self.kind {
            DatasetKind::Pds(pds) => pds.members().iter().map(|m| m.data.len()).sum(),
            DatasetKind::Sequential => self.blocks.iter().map(Vec::len).sum(),
        }
    }
}

/// Per-member record returned by `member_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    /// Decoded text length when the member is text-classified and
    /// conversion is not suppressed, raw byte length otherwise.
    pub size: usize,
    pub mimetype: String,
    pub extension: Option<String>,
    pub recfm: String,
    pub lrecl: u16,
    pub modified: Option<String>,
    pub created: Option<String>,
    pub owner: Option<String>,
    pub version: Option<String>,
    /// The resolved target when the queried member is an alias.
    pub alias: Option<String>,
}

/// Per-dataset record returned by `dataset_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    pub size: usize,
    pub mimetype: String,
    pub owner: String,
    pub modified: Option<String>,
}
