//! The AWS/HET virtual tape parser.
//!
//! A tape image is a run of blocks, each led by a 6-byte header: two
//! little-endian sizes (this block, previous block) and a big-endian
//! flag halfword. Records accumulate across blocks until an end-of-
//! record flag; a tape mark closes the current file. HET images add
//! per-block ZLIB or BZIP2 compression on top of the same framing.
//!
//! Completed 80-byte records bearing a standard label eye-catcher are
//! consumed as labels rather than file data; everything else lands in
//! the current dataset.

pub mod label;

use std::collections::HashMap;
use std::io::Read;

use bzip2::read::BzDecoder;
use flate2::read::ZlibDecoder;
use log::debug;
use scroll::{BE, LE, Pread};

use crate::dataset::{Dataset, DatasetKind};
use crate::error;
use crate::iebcopy::{self, Pds};
use crate::options::ParseOptions;
use crate::reader;
use crate::sniff;

use self::label::{Hdr1, Hdr2, VolumeLabel};

/// Start of a new record.
pub const NEWREC: u16 = 0x8000;
/// Tape mark.
pub const EOF: u16 = 0x4000;
/// End of the current record.
pub const ENDREC: u16 = 0x2000;
/// HET: block payload is ZLIB-compressed.
pub const ZLIB: u16 = 0x0100;
/// HET: block payload is BZIP2-compressed.
pub const BZIP2: u16 = 0x0200;

/// A parsed AWS/HET virtual tape.
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    /// VOL1 volume label, when the tape leads with one.
    pub volume: Option<VolumeLabel>,
    /// Every UTL user label on the tape, in order.
    pub user_labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ParseOptions,
}

enum LabelKind {
    Vol1,
    Hdr1,
    Hdr2,
    Utl,
    Eof,
}

/// An 80-byte record starting with a label eye-catcher is a label, not
/// file data.
fn label_kind(record: &[u8], options: &ParseOptions) -> Option<LabelKind> {
    if record.len() != 80 {
        return None;
    }
    let head = options.codepage.decode(&record[..4]);
    match head.as_str() {
        "VOL1" => Some(LabelKind::Vol1),
        "HDR1" => Some(LabelKind::Hdr1),
        "HDR2" => Some(LabelKind::Hdr2),
        "EOF1" | "EOF2" => Some(LabelKind::Eof),
        _ if head.starts_with("UTL") => Some(LabelKind::Utl),
        _ => None,
    }
}

fn decompress(raw: &[u8], flags: u16, at_offset: usize) -> error::Result<Vec<u8>> {
    if flags & ZLIB != 0 && flags & BZIP2 != 0 {
        return Err(error::Error::UnsupportedCompression(flags));
    }
    let mut payload = Vec::new();
    if flags & BZIP2 != 0 {
        BzDecoder::new(raw)
            .read_to_end(&mut payload)
            .map_err(|err| error::Error::MalformedTape {
                reason: format!("bzip2 block failed to decompress: {err}"),
                at_offset,
            })?;
    } else if flags & ZLIB != 0 {
        ZlibDecoder::new(raw)
            .read_to_end(&mut payload)
            .map_err(|err| error::Error::MalformedTape {
                reason: format!("zlib block failed to decompress: {err}"),
                at_offset,
            })?;
    } else {
        payload.extend_from_slice(raw);
    }
    Ok(payload)
}

impl Tape {
    pub fn parse(bytes: &[u8], options: &ParseOptions) -> error::Result<Tape> {
        let mut volume: Option<VolumeLabel> = None;
        let mut user_labels: Vec<String> = Vec::new();
        let mut datasets: Vec<Dataset> = Vec::new();
        let mut names: HashMap<String, usize> = HashMap::new();

        // labels seen since the last dataset was flushed
        let mut hdr1: Option<Hdr1> = None;
        let mut hdr2: Option<Hdr2> = None;
        let mut utl: Vec<String> = Vec::new();

        let mut record: Vec<u8> = Vec::new();
        let mut blocks: Vec<Vec<u8>> = Vec::new();
        let mut file_number = 1;

        let mut loc = 0;
        while loc + 6 <= bytes.len() {
            let cur_size = usize::from(bytes.pread_with::<u16>(loc, LE)?);
            let _prev_size = bytes.pread_with::<u16>(loc + 2, LE)?;
            let flags = bytes.pread_with::<u16>(loc + 4, BE)?;

            if flags & (NEWREC | ENDREC | EOF) == 0 {
                return Err(error::Error::MalformedTape {
                    reason: format!("unrecognized block flags {flags:#06x}"),
                    at_offset: loc + 4,
                });
            }
            if flags & NEWREC != 0 && !record.is_empty() {
                debug!("new record begins with {} bytes unterminated", record.len());
            }

            if cur_size > 0 {
                let raw = reader::slice(bytes, loc + 6, cur_size)?;
                record.extend_from_slice(&decompress(raw, flags, loc)?);
            }

            if (flags & ENDREC != 0 || flags & EOF != 0) && !record.is_empty() {
                match label_kind(&record, options) {
                    Some(LabelKind::Vol1) => {
                        if volume.is_none() {
                            volume = Some(VolumeLabel::parse(&record, options.codepage));
                            debug!("volume label {volume:?}");
                        }
                    }
                    Some(LabelKind::Hdr1) => hdr1 = Some(Hdr1::parse(&record, options.codepage)),
                    Some(LabelKind::Hdr2) => hdr2 = Some(Hdr2::parse(&record, options.codepage)),
                    Some(LabelKind::Utl) => {
                        let content = label::user_label(&record, options.codepage);
                        debug!("user label: {content}");
                        user_labels.push(content.clone());
                        utl.push(content);
                    }
                    Some(LabelKind::Eof) => debug!("trailer label, skipping"),
                    None => blocks.push(std::mem::take(&mut record)),
                }
                record.clear();
            }

            if flags & EOF != 0 {
                if !blocks.is_empty() {
                    let name = hdr1
                        .as_ref()
                        .map(|h| h.dsn.clone())
                        .filter(|dsn| !dsn.is_empty())
                        .unwrap_or_else(|| format!("FILE{file_number:04}"));
                    debug!("tape mark closes dataset {name}");
                    let dataset = assemble_dataset(
                        name,
                        std::mem::take(&mut blocks),
                        hdr1.take(),
                        hdr2.take(),
                        std::mem::take(&mut utl),
                        options,
                    )?;
                    match names.get(&dataset.name) {
                        Some(&index) => datasets[index] = dataset,
                        None => {
                            names.insert(dataset.name.clone(), datasets.len());
                            datasets.push(dataset);
                        }
                    }
                    file_number += 1;
                } else {
                    debug!("tape mark with no data, skipping");
                }
            }

            loc += 6 + cur_size;
        }

        if !record.is_empty() || !blocks.is_empty() {
            debug!("data after the final tape mark, dropping");
        }

        Ok(Tape {
            volume,
            user_labels,
            datasets,
            options: *options,
        })
    }
}

/// Classify a flushed tape file, convert text with the HDR2 record
/// geometry when labels are present, and decode an IEBCOPY payload.
fn assemble_dataset(
    name: String,
    blocks: Vec<Vec<u8>>,
    hdr1: Option<Hdr1>,
    hdr2: Option<Hdr2>,
    utl: Vec<String>,
    options: &ParseOptions,
) -> error::Result<Dataset> {
    let codepage = options.codepage;
    let joined = blocks.concat();
    let classification = sniff::classify_with(&joined, codepage, options.force_convert);

    let text = if classification.is_text() || options.force_convert {
        Some(match &hdr2 {
            Some(hdr2) if hdr2.recfm.contains('V') => {
                // each tape record is one variable block; recover the
                // per-record lengths off the RDWs
                let records: Vec<Vec<u8>> = blocks
                    .iter()
                    .flat_map(|block| iebcopy::split_variable(block))
                    .collect();
                sniff::convert_records(codepage, &records, options.strip_seqnum)
            }
            Some(hdr2) => {
                sniff::convert_text(codepage, &joined, hdr2.lrecl as usize, options.strip_seqnum)
            }
            None => {
                sniff::convert_text(codepage, &joined, usize::from(options.lrecl), options.strip_seqnum)
            }
        })
    } else {
        None
    };

    let mut dataset = Dataset {
        name,
        mimetype: classification.mime,
        encoding: classification.encoding,
        extension: classification.extension,
        text,
        kind: DatasetKind::Sequential,
        hdr1,
        hdr2,
        utl,
        blocks,
    };
    if let Some(pds) = Pds::from_tape_record(&joined, options)? {
        debug!("dataset {} is an unloaded PDS", dataset.name);
        dataset.mimetype = iebcopy::PDS_MIMETYPE.into();
        dataset.extension = None;
        dataset.text = None;
        dataset.kind = DatasetKind::Pds(pds);
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Codepage;
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    fn cp() -> Codepage {
        Codepage::default()
    }

    fn block(flags: u16, payload: &[u8]) -> Vec<u8> {
        let mut bytes = (payload.len() as u16).to_le_bytes().to_vec();
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&flags.to_be_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    fn label_record(content: &str) -> Vec<u8> {
        cp().encode(&format!("{content:<80}"))
    }

    #[test]
    fn zero_flags_are_malformed() {
        let bytes = block(0x0000, &[1, 2, 3]);
        assert!(matches!(
            Tape::parse(&bytes, &ParseOptions::default()),
            Err(error::Error::MalformedTape { at_offset: 4, .. })
        ));
    }

    #[test]
    fn unlabeled_file_gets_a_generated_name() {
        let mut bytes = block(NEWREC | ENDREC, &cp().encode(&format!("{:<80}", "SOME DATA")));
        bytes.extend(block(EOF, &[]));
        let tape = Tape::parse(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(tape.datasets.len(), 1);
        assert_eq!(tape.datasets[0].name, "FILE0001");
        assert_eq!(tape.volume, None);
        assert_eq!(tape.datasets[0].text.as_deref(), Some("SOME DATA\n"));
    }

    #[test]
    fn record_reassembles_across_blocks() {
        let half1 = cp().encode(&format!("{:<40}", "SPLIT"));
        let half2 = cp().encode(&" ".repeat(41));
        let mut bytes = block(NEWREC, &half1);
        bytes.extend(block(ENDREC, &half2));
        bytes.extend(block(EOF, &[]));
        let tape = Tape::parse(&bytes, &ParseOptions::default()).unwrap();
        // 81 bytes total, so not an 80-byte label candidate
        assert_eq!(tape.datasets[0].raw().len(), 81);
        assert_eq!(tape.datasets[0].text.as_deref(), Some("SPLIT\n\n"));
    }

    #[test]
    fn labels_are_consumed_not_counted_as_files() {
        let mut bytes = block(NEWREC | ENDREC, &label_record("VOL1SCR001"));
        bytes.extend(block(
            NEWREC | ENDREC,
            &label_record(&format!("HDR1{:<17}", "TAPE.DATA")),
        ));
        bytes.extend(block(NEWREC | ENDREC, &label_record("HDR2F3276000080")));
        bytes.extend(block(EOF, &[]));
        bytes.extend(block(NEWREC | ENDREC, &cp().encode(&format!("{:<80}", "PAYLOAD"))));
        bytes.extend(block(EOF, &[]));
        bytes.extend(block(NEWREC | ENDREC, &label_record("EOF1")));
        bytes.extend(block(NEWREC | ENDREC, &label_record("EOF2")));
        bytes.extend(block(EOF, &[]));
        bytes.extend(block(EOF, &[]));
        let tape = Tape::parse(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(tape.volume.as_ref().unwrap().volser, "SCR001");
        assert_eq!(tape.datasets.len(), 1);
        assert_eq!(tape.datasets[0].name, "TAPE.DATA");
        assert_eq!(tape.datasets[0].hdr2.as_ref().unwrap().lrecl, 80);
    }

    #[test]
    fn user_labels_accumulate() {
        let mut bytes = block(NEWREC | ENDREC, &label_record("UTL1FIRST LABEL"));
        bytes.extend(block(NEWREC | ENDREC, &cp().encode(&format!("{:<80}", "DATA"))));
        bytes.extend(block(EOF, &[]));
        let tape = Tape::parse(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(tape.user_labels, vec!["FIRST LABEL".to_string()]);
        assert_eq!(tape.datasets[0].utl, vec!["FIRST LABEL".to_string()]);
    }

    #[test]
    fn zlib_blocks_decompress() {
        let clear = cp().encode(&format!("{:<80}", "COMPRESSED PAYLOAD"));
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&clear).unwrap();
        let packed = encoder.finish().unwrap();
        let mut bytes = block(NEWREC | ENDREC | ZLIB, &packed);
        bytes.extend(block(EOF, &[]));
        let tape = Tape::parse(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(tape.datasets[0].raw(), clear);
    }

    #[test]
    fn both_compression_bits_are_unsupported() {
        let bytes = block(NEWREC | ENDREC | ZLIB | BZIP2, &[0x00]);
        assert!(matches!(
            Tape::parse(&bytes, &ParseOptions::default()),
            Err(error::Error::UnsupportedCompression(_))
        ));
    }

    #[test]
    fn corrupt_zlib_is_malformed() {
        let mut bytes = block(NEWREC | ENDREC | ZLIB, &[0xde, 0xad, 0xbe, 0xef]);
        bytes.extend(block(EOF, &[]));
        assert!(matches!(
            Tape::parse(&bytes, &ParseOptions::default()),
            Err(error::Error::MalformedTape { .. })
        ));
    }
}
