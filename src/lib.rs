//! # xmi
//!
//! A parsing crate for the two mainframe archive containers hobbyist
//! MVS software still travels in: **XMIT** (TSO TRANSMIT / INMCOPY)
//! files and **AWS/HET** virtual tape images.
//!
//! `Archive::parse` sniffs the container kind from the first few
//! bytes, reassembles the logical datasets inside, decodes IEBCOPY
//! unloads into their PDS members (directory, ISPF statistics,
//! aliases), classifies every payload, and converts EBCDIC text to
//! UTF-8. The result is an immutable model you query by name:
//!
//! ```rust
//! use xmi::Archive;
//!
//! fn inspect(buffer: &[u8]) -> xmi::Result<()> {
//!     let archive = Archive::parse(buffer)?;
//!     for dataset in archive.list_datasets() {
//!         for member in archive.list_members(dataset)? {
//!             let info = archive.member_info(dataset, member)?;
//!             println!("{dataset}({member}): {} {} bytes", info.mimetype, info.size);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Parsing is strict about container framing and permissive inside it:
//! a bad segment or block header fails the parse with an offset, while
//! per-member oddities (unparseable ISPF dates, orphaned data records)
//! degrade to `None` fields or placeholder members.

pub mod codec;
pub mod dataset;
pub mod dcb;
pub mod error;
pub mod iebcopy;
pub mod options;
pub mod sniff;
pub mod tape;
pub mod xmit;

mod reader;

pub use crate::dataset::{Dataset, DatasetInfo, DatasetKind, MemberInfo};
pub use crate::error::{Error, Result};
pub use crate::options::ParseOptions;

use crate::codec::Codepage;

/// Container kind, peeked from the first bytes of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Xmit,
    Tape,
}

/// Sniff the container kind: an XMIT stream carries EBCDIC `INMR01` at
/// bytes 2..8, an AWS/HET tape has a zero halfword at bytes 2..4 (the
/// high bits of the first block's previous-size field).
pub fn peek(bytes: &[u8], codepage: Codepage) -> Result<Hint> {
    if bytes.len() >= 8 && codepage.decode(&bytes[2..8]) == "INMR01" {
        return Ok(Hint::Xmit);
    }
    if bytes.len() >= 4 && bytes[2] == 0 && bytes[3] == 0 {
        return Ok(Hint::Tape);
    }
    Err(Error::NotAContainer)
}

/// A parsed container: the datasets, their members, and the metadata
/// the container format carries about them. Produced once from a byte
/// buffer and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Archive {
    Xmit(xmit::Xmit),
    Tape(tape::Tape),
}

impl Archive {
    /// Parse with default options (cp1140, sequence-number stripping).
    pub fn parse(bytes: &[u8]) -> Result<Archive> {
        Archive::parse_with(bytes, &ParseOptions::default())
    }

    pub fn parse_with(bytes: &[u8], options: &ParseOptions) -> Result<Archive> {
        match peek(bytes, options.codepage)? {
            Hint::Xmit => Ok(Archive::Xmit(xmit::Xmit::parse(bytes, options)?)),
            Hint::Tape => Ok(Archive::Tape(tape::Tape::parse(bytes, options)?)),
        }
    }

    fn options(&self) -> &ParseOptions {
        match self {
            Archive::Xmit(xmit) => &xmit.options,
            Archive::Tape(tape) => &tape.options,
        }
    }

    /// Datasets in container arrival order.
    pub fn datasets(&self) -> &[Dataset] {
        match self {
            Archive::Xmit(xmit) => &xmit.datasets,
            Archive::Tape(tape) => &tape.datasets,
        }
    }

    fn dataset(&self, name: &str) -> Result<&Dataset> {
        self.datasets()
            .iter()
            .find(|dataset| dataset.name == name)
            .ok_or_else(|| Error::UnknownDataset(name.into()))
    }

    pub fn list_datasets(&self) -> Vec<&str> {
        self.datasets().iter().map(|d| d.name.as_str()).collect()
    }

    pub fn dataset_count(&self) -> usize {
        self.datasets().len()
    }

    pub fn is_pds(&self, name: &str) -> Result<bool> {
        Ok(self.dataset(name)?.is_pds())
    }

    pub fn is_sequential(&self, name: &str) -> Result<bool> {
        Ok(self.dataset(name)?.is_sequential())
    }

    pub fn is_member(&self, name: &str, member: &str) -> bool {
        self.dataset(name)
            .ok()
            .and_then(Dataset::pds)
            .and_then(|pds| pds.get(member))
            .is_some()
    }

    /// Member names in directory order; empty for a sequential dataset.
    pub fn list_members(&self, name: &str) -> Result<Vec<&str>> {
        let dataset = self.dataset(name)?;
        Ok(dataset
            .pds()
            .map(|pds| pds.members().iter().map(|m| m.name.as_str()).collect())
            .unwrap_or_default())
    }

    /// Everything the container knows about one member. Aliases are
    /// resolved first, and the resolved name is reported back.
    pub fn member_info(&self, name: &str, member: &str) -> Result<MemberInfo> {
        let pds = self
            .dataset(name)?
            .pds()
            .ok_or_else(|| Error::UnknownMember(member.into()))?;
        let queried = pds
            .get(member)
            .ok_or_else(|| Error::UnknownMember(member.into()))?;
        let alias = if queried.alias {
            Some(pds.resolve(member)?.name.clone())
        } else {
            None
        };
        let resolved = pds.resolve(member)?;
        let size = match &resolved.text {
            Some(text) if !self.options().binary => text.len(),
            _ => resolved.data.len(),
        };
        let ispf = resolved.ispf.as_ref();
        Ok(MemberInfo {
            size,
            mimetype: resolved.mimetype.clone(),
            extension: resolved.extension.clone(),
            recfm: pds.copyr1.recfm.clone(),
            lrecl: pds.copyr1.lrecl,
            modified: ispf.and_then(|i| i.modified.clone()),
            created: ispf.and_then(|i| i.created.clone()),
            owner: ispf.map(|i| i.owner.clone()),
            version: ispf.map(|i| i.version.clone()),
            alias,
        })
    }

    /// Raw member bytes, after alias resolution and VB reassembly.
    pub fn member_bytes(&self, name: &str, member: &str) -> Result<&[u8]> {
        let pds = self
            .dataset(name)?
            .pds()
            .ok_or_else(|| Error::UnknownMember(member.into()))?;
        Ok(&pds.resolve(member)?.data)
    }

    /// The member as UTF-8 text. Binary-classified members only decode
    /// when the archive was parsed with `force_convert`.
    pub fn member_text(&self, name: &str, member: &str) -> Result<String> {
        let pds = self
            .dataset(name)?
            .pds()
            .ok_or_else(|| Error::UnknownMember(member.into()))?;
        let resolved = pds.resolve(member)?;
        if let Some(text) = &resolved.text {
            Ok(text.clone())
        } else if self.options().force_convert {
            Ok(self.options().codepage.decode(&resolved.data))
        } else {
            Err(Error::NotText(format!("{name}({member})")))
        }
    }

    /// The reassembled dataset payload.
    pub fn dataset_bytes(&self, name: &str) -> Result<Vec<u8>> {
        Ok(self.dataset(name)?.raw())
    }

    /// A sequential dataset as UTF-8 text, gated like `member_text`.
    pub fn dataset_text(&self, name: &str) -> Result<String> {
        let dataset = self.dataset(name)?;
        if let Some(text) = &dataset.text {
            Ok(text.clone())
        } else if self.options().force_convert {
            Ok(self.options().codepage.decode(&dataset.raw()))
        } else {
            Err(Error::NotText(name.into()))
        }
    }

    pub fn dataset_info(&self, name: &str) -> Result<DatasetInfo> {
        let dataset = self.dataset(name)?;
        let modified = match self {
            Archive::Xmit(_) => self.origin_timestamp().map(String::from),
            Archive::Tape(_) => dataset.hdr1.as_ref().and_then(|h| h.created.clone()),
        };
        Ok(DatasetInfo {
            size: dataset.size(),
            mimetype: dataset.mimetype.clone(),
            owner: self.owner().unwrap_or_default().to_string(),
            modified,
        })
    }

    /// Sum of the raw sizes of everything in the archive.
    pub fn total_size(&self) -> usize {
        self.datasets().iter().map(Dataset::size).sum()
    }

    /// The transmission message, when the XMIT carried one.
    pub fn message_text(&self) -> Option<&str> {
        match self {
            Archive::Xmit(xmit) => xmit.message.as_ref().map(|m| m.text.as_str()),
            Archive::Tape(_) => None,
        }
    }

    /// INMFTIME origin timestamp, ISO-8601 with microseconds.
    pub fn origin_timestamp(&self) -> Option<&str> {
        match self {
            Archive::Xmit(xmit) => xmit.header.timestamp.as_deref(),
            Archive::Tape(_) => None,
        }
    }

    fn header_unit(&self, key: u16) -> Option<&str> {
        match self {
            Archive::Xmit(xmit) => xmit.header.units.text(key),
            Archive::Tape(_) => None,
        }
    }

    pub fn origin_user(&self) -> Option<&str> {
        self.header_unit(xmit::text_unit::INMFUID)
    }

    pub fn origin_node(&self) -> Option<&str> {
        self.header_unit(xmit::text_unit::INMFNODE)
    }

    pub fn target_user(&self) -> Option<&str> {
        self.header_unit(xmit::text_unit::INMTUID)
    }

    pub fn target_node(&self) -> Option<&str> {
        self.header_unit(xmit::text_unit::INMTNODE)
    }

    /// Archive owner: origin user for XMIT, volume owner for tape.
    pub fn owner(&self) -> Option<&str> {
        match self {
            Archive::Xmit(_) => self.origin_user(),
            Archive::Tape(tape) => tape.volume.as_ref().map(|v| v.owner.as_str()),
        }
    }

    /// VOL1 volume serial, tape archives only.
    pub fn volser(&self) -> Option<&str> {
        match self {
            Archive::Xmit(_) => None,
            Archive::Tape(tape) => tape.volume.as_ref().map(|v| v.volser.as_str()),
        }
    }

    /// UTL user labels in tape order; empty for XMIT.
    pub fn user_labels(&self) -> &[String] {
        match self {
            Archive::Xmit(_) => &[],
            Archive::Tape(tape) => &tape.user_labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp() -> Codepage {
        Codepage::default()
    }

    #[test]
    fn peek_xmit() {
        let mut bytes = vec![0x00, 0x00];
        bytes.extend(cp().encode("INMR01"));
        bytes.extend([0xde, 0xad]);
        assert_eq!(bytes.len(), 10);
        assert_eq!(peek(&bytes, cp()).unwrap(), Hint::Xmit);
    }

    #[test]
    fn peek_tape() {
        // a plausible first block header: size 80, prev 0
        let bytes = [0x50, 0x00, 0x00, 0x00, 0xa0, 0x00];
        assert_eq!(peek(&bytes, cp()).unwrap(), Hint::Tape);
    }

    #[test]
    fn peek_rejects_other_input() {
        assert!(matches!(
            peek(b"\x7fELF\x02\x01\x01\x00", cp()),
            Err(Error::NotAContainer)
        ));
        assert!(matches!(peek(b"", cp()), Err(Error::NotAContainer)));
    }
}
