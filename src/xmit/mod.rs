//! The XMIT (TSO TRANSMIT / INMCOPY) container parser.
//!
//! An XMIT stream is a run of segments, each a 1-byte length (header
//! included), a flag byte, and payload. Control segments carry the
//! INMR01..INMR06 records that describe the transmission; data segments
//! belong to the file announced by the most recent INMR02. Logical
//! records close on the last-segment flag and become the dataset's
//! block list, which is where IEBCOPY decoding picks up for PDS
//! payloads.

pub mod text_unit;

use std::collections::HashMap;

use log::debug;
use scroll::{BE, Pread};

use crate::dataset::{Dataset, DatasetKind};
use crate::dcb;
use crate::error;
use crate::iebcopy::Pds;
use crate::options::ParseOptions;
use crate::reader;
use crate::sniff;
use crate::{codec, iebcopy};

use self::text_unit::TextUnits;

/// First segment of a logical record.
pub const SEG_FIRST: u8 = 0x80;
/// Last segment of a logical record.
pub const SEG_LAST: u8 = 0x40;
/// The segment carries (part of) a control record.
pub const SEG_CONTROL: u8 = 0x20;
/// Reserved low bits, present on some senders.
pub const SEG_RESERVED: u8 = 0x0f;

/// Transmission-level metadata from the INMR01 record.
#[derive(Debug, Clone, PartialEq)]
pub struct XmitHeader {
    /// The raw INMR01 text units.
    pub units: TextUnits,
    /// INMFTIME origin timestamp, normalized to ISO-8601 microseconds.
    pub timestamp: Option<String>,
    /// One entry per transmitted file, in INMR02 arrival order.
    pub files: Vec<FileMeta>,
}

/// Sender (INMR02) and receiver (INMR03) metadata for one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    /// Leading 4-byte file number of the INMR02 record.
    pub number: u32,
    pub dsn: Option<String>,
    pub dsorg: Option<String>,
    pub recfm: Option<String>,
    pub send: TextUnits,
    pub receive: Option<TextUnits>,
}

impl FileMeta {
    /// Logical record length, preferring the receiver-side value.
    pub fn lrecl(&self) -> Option<u64> {
        self.receive
            .as_ref()
            .and_then(|units| units.number(text_unit::INMLRECL))
            .or_else(|| self.send.number(text_unit::INMLRECL))
    }
}

/// The message a transmission can carry alongside its files.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub lrecl: usize,
    pub data: Vec<u8>,
    pub text: String,
}

/// A parsed XMIT container.
#[derive(Debug, Clone, PartialEq)]
pub struct Xmit {
    pub header: XmitHeader,
    pub message: Option<Message>,
    pub datasets: Vec<Dataset>,
    pub options: ParseOptions,
}

enum Target {
    Unset,
    Message,
    File(usize),
}

impl Xmit {
    pub fn parse(bytes: &[u8], options: &ParseOptions) -> error::Result<Xmit> {
        let codepage = options.codepage;
        if bytes.len() < 8 || codepage.decode(&bytes[2..8]) != "INMR01" {
            return Err(error::Error::MalformedXmit {
                expected: "an INMR01 control record".into(),
                at_offset: 2,
            });
        }

        let mut header_units: Option<TextUnits> = None;
        let mut files: Vec<FileMeta> = Vec::new();
        let mut receive_count = 0usize;
        let mut message_armed = false;
        let mut message_data: Vec<u8> = Vec::new();
        let mut message_file: Option<usize> = None;
        let mut target = Target::Unset;
        // (name, blocks) per dataset, in arrival order
        let mut payloads: Vec<(String, Vec<Vec<u8>>)> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut record: Vec<u8> = Vec::new();

        let mut loc = 0;
        while loc < bytes.len() {
            let length = usize::from(bytes[loc]);
            if length < 2 {
                return Err(error::Error::MalformedXmit {
                    expected: "a segment length covering its header".into(),
                    at_offset: loc,
                });
            }
            let flag = *bytes
                .get(loc + 1)
                .ok_or(error::Error::Truncated(loc + 1))?;
            let payload = reader::slice(bytes, loc + 2, length - 2)?;

            if flag & SEG_CONTROL != 0 {
                if payload.len() < 6 {
                    return Err(error::Error::MalformedXmit {
                        expected: "a 6-byte control record type".into(),
                        at_offset: loc + 2,
                    });
                }
                let record_type = codepage.decode(&payload[..6]);
                debug!("control record {record_type} at {loc:#x}");
                match record_type.as_str() {
                    "INMR01" => {
                        let units = text_unit::parse(&payload[6..], codepage)?;
                        message_armed |= units.has(text_unit::INMTERM);
                        header_units = Some(units);
                    }
                    "INMR02" => {
                        let number = payload.pread_with::<u32>(6, BE)?;
                        let units = text_unit::parse(&payload[10..], codepage)?;
                        message_armed |= units.has(text_unit::INMTERM);
                        let dsn = units.text(text_unit::INMDSNAM).map(String::from);
                        target = match &dsn {
                            Some(name) => {
                                let index = *by_name.entry(name.clone()).or_insert_with(|| {
                                    payloads.push((name.clone(), Vec::new()));
                                    payloads.len() - 1
                                });
                                Target::File(index)
                            }
                            None if message_armed => {
                                message_file = Some(files.len());
                                Target::Message
                            }
                            None => Target::Unset,
                        };
                        files.push(FileMeta {
                            number,
                            dsorg: units
                                .raw(text_unit::INMDSORG)
                                .map(|raw| dcb::dsorg(reader::be_uint(raw) as u16)),
                            recfm: units
                                .raw(text_unit::INMRECFM)
                                .map(|raw| dcb::recfm(raw.first().copied().unwrap_or(0))),
                            dsn,
                            send: units,
                            receive: None,
                        });
                    }
                    "INMR03" => {
                        let units = text_unit::parse(&payload[6..], codepage)?;
                        if let Some(meta) = files.get_mut(receive_count) {
                            meta.receive = Some(units);
                        } else {
                            debug!("INMR03 without a matching INMR02, ignoring");
                        }
                        receive_count += 1;
                    }
                    "INMR06" => {
                        debug!("INMR06: end of transmission, ignoring the rest");
                        break;
                    }
                    other => debug!("ignoring control record {other}"),
                }
            } else {
                if flag & SEG_RESERVED != 0 {
                    debug!("reserved segment flag bits {:#04x}", flag & SEG_RESERVED);
                }
                match target {
                    Target::Message => message_data.extend_from_slice(payload),
                    Target::File(index) => {
                        record.extend_from_slice(payload);
                        if flag & SEG_LAST != 0 {
                            payloads[index].1.push(std::mem::take(&mut record));
                        }
                    }
                    Target::Unset => {
                        return Err(error::Error::MalformedXmit {
                            expected: "an INMR02 record before file data".into(),
                            at_offset: loc,
                        });
                    }
                }
            }
            loc += length;
        }

        let units = header_units.ok_or(error::Error::MalformedXmit {
            expected: "an INMR01 control record".into(),
            at_offset: 0,
        })?;
        let timestamp = units
            .text(text_unit::INMFTIME)
            .and_then(codec::date::transmit);
        let header = XmitHeader {
            units,
            timestamp,
            files,
        };

        let message = if message_data.is_empty() {
            None
        } else {
            let lrecl = message_file
                .and_then(|index| header.files.get(index))
                .and_then(FileMeta::lrecl)
                .unwrap_or(u64::from(options.lrecl)) as usize;
            let text = sniff::convert_text(codepage, &message_data, lrecl, options.strip_seqnum);
            Some(Message {
                lrecl,
                data: message_data,
                text,
            })
        };

        let mut datasets = Vec::with_capacity(payloads.len());
        for (name, blocks) in payloads {
            let meta = header
                .files
                .iter()
                .find(|meta| meta.dsn.as_deref() == Some(name.as_str()));
            datasets.push(assemble_dataset(name, blocks, meta, options)?);
        }

        Ok(Xmit {
            header,
            message,
            datasets,
            options: *options,
        })
    }
}

/// Classify a reassembled payload, convert text, and decode the
/// IEBCOPY structure when the first block is a COPYR1.
fn assemble_dataset(
    name: String,
    blocks: Vec<Vec<u8>>,
    meta: Option<&FileMeta>,
    options: &ParseOptions,
) -> error::Result<Dataset> {
    let codepage = options.codepage;
    let joined = blocks.concat();
    let classification = sniff::classify_with(&joined, codepage, options.force_convert);
    let recfm = meta.and_then(|meta| meta.recfm.clone()).unwrap_or_default();
    let lrecl = meta
        .and_then(FileMeta::lrecl)
        .unwrap_or(u64::from(options.lrecl)) as usize;

    let text = if classification.is_text() || options.force_convert {
        Some(if recfm.contains('F') {
            sniff::convert_text(codepage, &joined, lrecl, options.strip_seqnum)
        } else if recfm.contains('V') {
            sniff::convert_records(codepage, &blocks, options.strip_seqnum)
        } else {
            sniff::convert_text(codepage, &joined, usize::from(options.lrecl), options.strip_seqnum)
        })
    } else {
        None
    };
    debug!(
        "dataset {name}: {} ({}), {} blocks, {} bytes",
        classification.mime,
        classification.encoding,
        blocks.len(),
        joined.len()
    );

    let mut dataset = Dataset {
        name,
        mimetype: classification.mime,
        encoding: classification.encoding,
        extension: classification.extension,
        text,
        kind: DatasetKind::Sequential,
        hdr1: None,
        hdr2: None,
        utl: Vec::new(),
        blocks,
    };
    if let Some(pds) = Pds::from_xmit_blocks(&dataset.blocks, options)? {
        debug!("dataset {} is an unloaded PDS", dataset.name);
        dataset.mimetype = iebcopy::PDS_MIMETYPE.into();
        dataset.extension = None;
        dataset.text = None;
        dataset.kind = DatasetKind::Pds(pds);
    }
    Ok(dataset)
}
