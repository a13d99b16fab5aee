//! IEBCOPY unload decoding: the PDS payload embedded in XMIT files and
//! tape datasets.
//!
//! An unloaded PDS is a COPYR1 control record, a COPYR2 control record,
//! the directory (276-byte blocks of packed member entries), then the
//! member data blocks. Members do not name their data; data records are
//! taken in arrival order and matched against the directory TTRs sorted
//! ascending.

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};
use scroll::{BE, Pread};

use crate::codec::{self, Codepage};
use crate::dcb;
use crate::error;
use crate::options::ParseOptions;
use crate::reader;
use crate::sniff;

/// COPYR1 eye-catcher, at offset 1 of the record body.
pub const EYECATCHER: u32 = 0xca6d0f;

/// MIME type reported for datasets that decode as an unloaded PDS.
pub const PDS_MIMETYPE: &str = "pds/directory";

/// Directory blocks are fixed-size.
pub const DIRECTORY_BLOCK: usize = 276;

/// First IEBCOPY control record: the unloaded dataset's DCB attributes
/// and the device geometry it came off.
#[derive(Debug, Clone, PartialEq)]
pub struct Copyr1 {
    /// Bit 0 of the first body byte marks a PDSE unload.
    pub pdse: bool,
    pub dsorg: u16,
    pub blksize: u16,
    pub lrecl: u16,
    /// DS1RECFM decoded to its listing form (`FB`, `VB`, `U`, ...).
    pub recfm: String,
    pub keylen: u8,
    pub optcd: u8,
    pub smsfg: u8,
    /// Block size of the file containing this unload when it was made.
    pub tape_blksize: u16,
    // device attributes, straight out of the IHADVA mapping
    pub dva_opts: u16,
    pub dva_class: u8,
    pub dva_unit: u8,
    pub dva_max_record: u32,
    pub dva_cyls: u16,
    pub dva_tracks_per_cyl: u16,
    pub dva_track_len: u16,
    pub dva_overhead: u16,
    pub header_records: u16,
    /// DS1REFD last-reference date as `yyddd`, when the optional tail
    /// of the record is present.
    pub last_referenced: Option<String>,
    pub secondary_extension: Option<[u8; 3]>,
    pub secondary_space: Option<[u8; 4]>,
    pub last_block_pointer: Option<[u8; 3]>,
    pub track_balance: Option<[u8; 2]>,
    /// BDW/SDW lengths when the record came off a tape (XMIT unloads
    /// drop the 8-byte prefix).
    pub block_prefix: Option<(u16, u16)>,
}

impl Copyr1 {
    /// Parse a COPYR1 record. `Ok(None)` means the eye-catcher is not
    /// at either candidate offset and the payload is not an unloaded
    /// PDS at all; an over-long body is an error.
    pub fn parse(record: &[u8]) -> error::Result<Option<Copyr1>> {
        let at_1 = record.len() >= 4 && reader::read_u24(record, 1)? == EYECATCHER;
        let at_9 = record.len() >= 12 && reader::read_u24(record, 9)? == EYECATCHER;
        if !at_1 && !at_9 {
            return Ok(None);
        }
        let (body, block_prefix) = if at_1 {
            (record, None)
        } else {
            let block_length = record.pread_with::<u16>(0, BE)?;
            let seg_length = record.pread_with::<u16>(4, BE)?;
            (&record[8..], Some((block_length, seg_length)))
        };
        if body.len() > 64 {
            return Err(error::Error::BadCopyR1 {
                reason: format!("{} byte record body exceeds 64 bytes", body.len()),
            });
        }
        if body.len() < 38 {
            debug!("COPYR1 body too short at {} bytes", body.len());
            return Ok(None);
        }
        let pdse = body[0] & 0x01 != 0;
        if pdse {
            warn!("PDSE unload: record boundary handling is best effort");
        }
        let mut copyr1 = Copyr1 {
            pdse,
            dsorg: body.pread_with::<u16>(4, BE)?,
            blksize: body.pread_with::<u16>(6, BE)?,
            lrecl: body.pread_with::<u16>(8, BE)?,
            recfm: dcb::recfm(body[10]),
            keylen: body[11],
            optcd: body[12],
            smsfg: body[13],
            tape_blksize: body.pread_with::<u16>(14, BE)?,
            dva_opts: body.pread_with::<u16>(16, BE)?,
            dva_class: body[18],
            dva_unit: body[19],
            dva_max_record: body.pread_with::<u32>(20, BE)?,
            dva_cyls: body.pread_with::<u16>(24, BE)?,
            dva_tracks_per_cyl: body.pread_with::<u16>(26, BE)?,
            dva_track_len: body.pread_with::<u16>(28, BE)?,
            dva_overhead: body.pread_with::<u16>(30, BE)?,
            header_records: body.pread_with::<u16>(36, BE)?,
            last_referenced: None,
            secondary_extension: None,
            secondary_space: None,
            last_block_pointer: None,
            track_balance: None,
            block_prefix,
        };
        // the tail past byte 38 is optional and all zero when absent
        if body.len() >= 54 && body[38..].iter().any(|&b| b != 0) {
            let day = body.pread_with::<u16>(40, BE)?;
            copyr1.last_referenced = Some(format!("{:02}{:04}", body[39] % 100, day));
            copyr1.secondary_extension = Some([body[42], body[43], body[44]]);
            copyr1.secondary_space = Some([body[45], body[46], body[47], body[48]]);
            copyr1.last_block_pointer = Some([body[49], body[50], body[51]]);
            copyr1.track_balance = Some([body[52], body[53]]);
        }
        Ok(Some(copyr1))
    }
}

/// Second IEBCOPY control record: the tail of the original dataset's
/// DEB plus its sixteen extent descriptors, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Copyr2 {
    pub deb: [u8; 16],
    pub extents: [[u8; 16]; 16],
}

impl Copyr2 {
    pub fn parse(record: &[u8]) -> error::Result<Copyr2> {
        if record.len() > 276 {
            return Err(error::Error::BadCopyR2 {
                reason: format!("{} byte record exceeds 276 bytes", record.len()),
            });
        }
        if record.len() < 272 {
            return Err(error::Error::BadCopyR2 {
                reason: format!("{} byte record cannot hold the DEB and 16 extents", record.len()),
            });
        }
        let mut deb = [0u8; 16];
        deb.copy_from_slice(&record[..16]);
        let mut extents = [[0u8; 16]; 16];
        for (index, extent) in extents.iter_mut().enumerate() {
            extent.copy_from_slice(&record[16 + index * 16..32 + index * 16]);
        }
        Ok(Copyr2 { deb, extents })
    }
}

/// ISPF statistics from a member's directory user data.
#[derive(Debug, Clone, PartialEq)]
pub struct Ispf {
    /// `vv.mm` version string.
    pub version: String,
    pub flags: u8,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub lines: u32,
    pub newlines: u32,
    pub modlines: u32,
    pub owner: String,
}

impl Ispf {
    /// Statistics need at least 30 bytes of user data; with flag 0x10
    /// the line counts move to 32-bit fields at the end.
    fn parse(user_data: &[u8], codepage: Codepage) -> Option<Ispf> {
        if user_data.len() < 30 {
            return None;
        }
        let mut ispf = Ispf {
            version: format!("{:02}.{:02}", user_data[0], user_data[1]),
            flags: user_data[2],
            created: codec::date::ispf(&user_data[4..8], 0),
            modified: codec::date::ispf(&user_data[8..14], user_data[3]),
            lines: u32::from(u16::from_be_bytes([user_data[14], user_data[15]])),
            newlines: u32::from(u16::from_be_bytes([user_data[16], user_data[17]])),
            modlines: u32::from(u16::from_be_bytes([user_data[18], user_data[19]])),
            owner: codepage.decode(&user_data[20..28]).trim_end().to_string(),
        };
        if ispf.flags & 0x10 != 0 && user_data.len() >= 40 {
            ispf.lines = u32::from_be_bytes([user_data[28], user_data[29], user_data[30], user_data[31]]);
            ispf.newlines =
                u32::from_be_bytes([user_data[32], user_data[33], user_data[34], user_data[35]]);
            ispf.modlines =
                u32::from_be_bytes([user_data[36], user_data[37], user_data[38], user_data[39]]);
        }
        Some(ispf)
    }
}

/// One PDS member: a directory entry plus whatever data records landed
/// on its TTR. Alias entries carry no payload of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    /// Track-track-record address of the member's first data block.
    pub ttr: u32,
    pub alias: bool,
    pub notes: u8,
    pub user_data: Vec<u8>,
    pub ispf: Option<Ispf>,
    pub mimetype: String,
    pub encoding: &'static str,
    pub extension: Option<String>,
    pub text: Option<String>,
    pub data: Vec<u8>,
}

impl Member {
    fn placeholder(name: String) -> Member {
        Member {
            name,
            ttr: 0,
            alias: false,
            notes: 0,
            user_data: Vec::new(),
            ispf: None,
            mimetype: "application/x-empty".into(),
            encoding: "binary",
            extension: None,
            text: None,
            data: Vec::new(),
        }
    }
}

/// A fully decoded PDS: control records, members in directory order,
/// and lookup indexes for names and TTR owners.
#[derive(Debug, Clone, PartialEq)]
pub struct Pds {
    pub copyr1: Copyr1,
    pub copyr2: Copyr2,
    members: Vec<Member>,
    name_index: HashMap<String, usize>,
    ttr_index: HashMap<u32, usize>,
}

impl Pds {
    /// Members in directory order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.name_index.get(name).map(|&index| &self.members[index])
    }

    /// Resolve a member for reading: aliases redirect to the non-alias
    /// member owning their TTR before any data access.
    pub fn resolve(&self, name: &str) -> error::Result<&Member> {
        let member = self
            .get(name)
            .ok_or_else(|| error::Error::UnknownMember(name.into()))?;
        if !member.alias {
            return Ok(member);
        }
        self.ttr_index
            .get(&member.ttr)
            .map(|&index| &self.members[index])
            .ok_or_else(|| error::Error::DanglingAlias(name.into()))
    }

    /// The name an alias points at, when `name` is an alias.
    pub fn alias_target(&self, name: &str) -> Option<&str> {
        let member = self.get(name)?;
        if !member.alias {
            return None;
        }
        self.ttr_index
            .get(&member.ttr)
            .map(|&index| self.members[index].name.as_str())
    }

    /// Decode an unloaded PDS arriving as XMIT logical records: block 0
    /// is COPYR1, block 1 COPYR2, then directory blocks, then member
    /// data. `Ok(None)` when block 0 is not a COPYR1.
    pub fn from_xmit_blocks(blocks: &[Vec<u8>], options: &ParseOptions) -> error::Result<Option<Pds>> {
        if blocks.len() < 2 {
            return Ok(None);
        }
        let copyr1 = match Copyr1::parse(&blocks[0])? {
            Some(copyr1) => copyr1,
            None => return Ok(None),
        };
        let copyr2 = Copyr2::parse(&blocks[1])?;
        let mut directory = Vec::new();
        let mut consumed = 2;
        for block in &blocks[2..] {
            directory.extend_from_slice(block);
            consumed += 1;
            if directory_complete(&directory) {
                break;
            }
        }
        let members = parse_directory(&directory, options.codepage);
        let stream = blocks[consumed..].concat();
        Pds::build(copyr1, copyr2, members, &stream, options).map(Some)
    }

    /// Decode an unloaded PDS arriving as one tape record: every block
    /// inside carries an 8-byte BDW/SDW prefix that is stripped.
    pub fn from_tape_record(record: &[u8], options: &ParseOptions) -> error::Result<Option<Pds>> {
        if record.len() < 2 {
            return Ok(None);
        }
        let copyr1_size = usize::from(record.pread_with::<u16>(0, BE)?);
        if copyr1_size < 12 || copyr1_size > record.len() {
            return Ok(None);
        }
        let copyr1 = match Copyr1::parse(&record[..copyr1_size])? {
            Some(copyr1) => copyr1,
            None => return Ok(None),
        };
        let copyr2_size = usize::from(record.pread_with::<u16>(copyr1_size, BE)?);
        if copyr2_size < 8 {
            return Err(error::Error::BadCopyR2 {
                reason: format!("{copyr2_size} byte block cannot hold a COPYR2 record"),
            });
        }
        let copyr2 = Copyr2::parse(reader::slice(record, copyr1_size + 8, copyr2_size - 8)?)?;
        let body_at = copyr1_size + copyr2_size;
        if body_at > record.len() {
            return Err(error::Error::Truncated(record.len()));
        }
        let rest = &record[body_at..];

        let mut directory = Vec::new();
        let mut loc = 0;
        while loc < rest.len() {
            let block_size = usize::from(rest.pread_with::<u16>(loc, BE)?);
            if block_size < 8 {
                warn!("directory block with impossible BDW length {block_size}");
                break;
            }
            directory.extend_from_slice(reader::slice(rest, loc + 8, block_size - 8)?);
            loc += block_size;
            if directory_complete(&directory) {
                break;
            }
        }
        let members = parse_directory(&directory, options.codepage);

        let mut stream = Vec::new();
        while loc < rest.len() {
            let block_size = usize::from(rest.pread_with::<u16>(loc, BE)?);
            if block_size < 8 {
                warn!("member data block with impossible BDW length {block_size}");
                break;
            }
            stream.extend_from_slice(reader::slice(rest, loc + 8, block_size - 8)?);
            loc += block_size;
            if stream.len() >= 12 && stream[stream.len() - 12..] == [0u8; 12] {
                break;
            }
        }
        Pds::build(copyr1, copyr2, members, &stream, options).map(Some)
    }

    fn build(
        copyr1: Copyr1,
        copyr2: Copyr2,
        mut members: Vec<Member>,
        stream: &[u8],
        options: &ParseOptions,
    ) -> error::Result<Pds> {
        assign_member_data(&mut members, &copyr1, stream, options)?;
        let mut name_index = HashMap::with_capacity(members.len());
        let mut ttr_index = HashMap::new();
        for (index, member) in members.iter().enumerate() {
            name_index.entry(member.name.clone()).or_insert(index);
            if !member.alias {
                ttr_index.entry(member.ttr).or_insert(index);
            }
        }
        Ok(Pds {
            copyr1,
            copyr2,
            members,
            name_index,
            ttr_index,
        })
    }
}

/// True once the accumulated directory bytes contain the all-`0xFF`
/// end-of-directory entry.
fn directory_complete(directory: &[u8]) -> bool {
    let mut block = 0;
    while block + 22 <= directory.len() {
        let entry_len =
            usize::from(u16::from_be_bytes([directory[block + 20], directory[block + 21]]))
                .saturating_sub(2);
        let entries = &directory[block + 22..];
        let mut loc = 0;
        while loc < entry_len {
            if entries.len() < loc + 12 {
                return false;
            }
            if entries[loc..loc + 8] == [0xff; 8] {
                return true;
            }
            loc += 12 + usize::from(entries[loc + 11] & 0x1f) * 2;
        }
        block += DIRECTORY_BLOCK;
    }
    false
}

/// Walk the 276-byte directory blocks. Each block is a 20-byte header
/// (zeroes, key length 8, data length 0x100, last-referenced member),
/// a 2-byte used-length that counts itself, then packed entries:
/// 8-byte EBCDIC name, 3-byte TTR, a flag byte (alias bit 0x80, note
/// count in bits 0x60, user-data halfword count in 0x1F), then the
/// user data.
fn parse_directory(directory: &[u8], codepage: Codepage) -> Vec<Member> {
    let mut members = Vec::new();
    let mut block = 0;
    'blocks: while block + 22 <= directory.len() {
        let entry_len =
            usize::from(u16::from_be_bytes([directory[block + 20], directory[block + 21]]))
                .saturating_sub(2);
        let entries = &directory[block + 22..];
        let mut loc = 0;
        while loc < entry_len && loc + 12 <= entries.len() {
            if entries[loc..loc + 8] == [0xff; 8] {
                debug!("end of directory, {} members", members.len());
                break 'blocks;
            }
            let name = codepage.decode(&entries[loc..loc + 8]).trim_end().to_string();
            let ttr = u32::from(entries[loc + 8]) << 16
                | u32::from(entries[loc + 9]) << 8
                | u32::from(entries[loc + 10]);
            let flag = entries[loc + 11];
            let halfwords = usize::from(flag & 0x1f) * 2;
            let notes = (flag & 0x60) >> 5;
            let end = (loc + 12 + halfwords).min(entries.len());
            let user_data = entries[loc + 12..end].to_vec();
            let ispf = if notes == 0 {
                Ispf::parse(&user_data, codepage)
            } else {
                None
            };
            debug!(
                "member {} ttr {:#08x} alias {} notes {} user data {} bytes",
                name,
                ttr,
                flag & 0x80 != 0,
                notes,
                user_data.len()
            );
            members.push(Member {
                name,
                ttr,
                alias: flag & 0x80 != 0,
                notes,
                user_data,
                ispf,
                mimetype: "application/x-empty".into(),
                encoding: "binary",
                extension: None,
                text: None,
                data: Vec::new(),
            });
            loc += 12 + halfwords;
        }
        block += DIRECTORY_BLOCK;
    }
    members
}

/// Split a variable-format block into records: a 4-byte BDW, then
/// `{u16 length, u16 reserved, payload}` repeated, where the length
/// counts the RDW itself. A zero length ends the block.
pub(crate) fn split_variable(block: &[u8]) -> Vec<Vec<u8>> {
    let mut records = Vec::new();
    let mut loc = 4;
    while loc + 2 <= block.len() {
        let rdw = usize::from(u16::from_be_bytes([block[loc], block[loc + 1]]));
        if rdw == 0 {
            break;
        }
        let end = (loc + rdw).min(block.len());
        let payload = if loc + 4 < end { &block[loc + 4..end] } else { &[] };
        records.push(payload.to_vec());
        loc += rdw;
    }
    records
}

/// Hand the member data stream out to members. Each block is a 12-byte
/// header — flag, extent, BB, CC, TTR, key length, data length — and
/// data records are assigned by arrival order against the directory
/// TTRs sorted ascending. A zero data length closes the current member.
fn assign_member_data(
    members: &mut Vec<Member>,
    copyr1: &Copyr1,
    stream: &[u8],
    options: &ParseOptions,
) -> error::Result<()> {
    let variable = copyr1.recfm.contains('V');
    let lrecl = usize::from(copyr1.lrecl);

    let mut owners: BTreeMap<u32, usize> = BTreeMap::new();
    let mut aliases: BTreeMap<u32, usize> = BTreeMap::new();
    for (index, member) in members.iter().enumerate() {
        if member.alias {
            aliases.entry(member.ttr).or_insert(index);
        } else {
            owners.insert(member.ttr, index);
        }
    }
    // every TTR needs a non-alias owner for the data to land on; when a
    // TTR is claimed only by aliases, the first such alias is promoted
    for (&ttr, &index) in &aliases {
        if !owners.contains_key(&ttr) {
            warn!("promoting alias {} to owner of TTR {ttr:#08x}", members[index].name);
            members[index].alias = false;
            owners.insert(ttr, index);
        }
    }
    let mut order: Vec<usize> = owners.values().copied().collect();

    let mut slot = 0;
    let mut deleted = 1;
    let mut current = None;
    let mut prev_ttr = 0u32;
    let mut record_closed = false;
    let mut data: Vec<u8> = Vec::new();
    let mut records: Vec<Vec<u8>> = Vec::new();
    let mut loc = 0;

    'blocks: while loc + 12 <= stream.len() {
        let mut ttr = reader::read_u24(stream, loc + 6)?;
        let mut data_len = usize::from(stream.pread_with::<u16>(loc + 10, BE)?);

        if copyr1.pdse && record_closed {
            // a PDSE unload repeats blocks for the member just closed;
            // skip forward to the next distinct TTR
            while ttr == prev_ttr {
                loc += data_len + 12;
                if loc + 12 > stream.len() {
                    break 'blocks;
                }
                ttr = reader::read_u24(stream, loc + 6)?;
                data_len = usize::from(stream.pread_with::<u16>(loc + 10, BE)?);
            }
            record_closed = false;
        }

        if ttr == 0 && data_len == 0 {
            loc += 12;
            continue;
        }

        let member_index = match order.get(slot) {
            Some(&index) => index,
            None => {
                // more data records than directory entries: recover
                // into a placeholder member rather than dropping bytes
                warn!(
                    "more data records than members ({} so far); creating DELETED{deleted}",
                    order.len()
                );
                let index = members.len();
                members.push(Member::placeholder(format!("DELETED{deleted}")));
                order.push(index);
                deleted += 1;
                index
            }
        };
        current = Some(member_index);

        let payload = reader::slice(stream, loc + 12, data_len)?;
        if variable {
            records.extend(split_variable(payload));
        } else {
            data.extend_from_slice(payload);
        }

        if data_len == 0 {
            if copyr1.pdse {
                record_closed = true;
            }
            finish_member(
                &mut members[member_index],
                &mut data,
                &mut records,
                variable,
                lrecl,
                options,
            );
            slot += 1;
            prev_ttr = ttr;
            current = None;
        }
        loc += data_len + 12;
    }

    // trailing data not closed by a zero-length record still belongs to
    // the member in flight
    if !data.is_empty() || !records.is_empty() {
        if let Some(member_index) = current {
            debug!("flushing trailing data for {}", members[member_index].name);
            finish_member(
                &mut members[member_index],
                &mut data,
                &mut records,
                variable,
                lrecl,
                options,
            );
        }
    }
    Ok(())
}

fn finish_member(
    member: &mut Member,
    data: &mut Vec<u8>,
    records: &mut Vec<Vec<u8>>,
    variable: bool,
    lrecl: usize,
    options: &ParseOptions,
) {
    let bytes = if variable {
        records.concat()
    } else {
        std::mem::take(data)
    };
    let classification = sniff::classify_with(&bytes, options.codepage, options.force_convert);
    if classification.is_text() || options.force_convert {
        member.text = Some(if variable {
            sniff::convert_records(options.codepage, records, options.strip_seqnum)
        } else {
            sniff::convert_text(options.codepage, &bytes, lrecl, options.strip_seqnum)
        });
    }
    debug!(
        "member {}: {} ({}), {} bytes",
        member.name,
        classification.mime,
        classification.encoding,
        bytes.len()
    );
    member.mimetype = classification.mime;
    member.encoding = classification.encoding;
    member.extension = classification.extension;
    member.data = bytes;
    data.clear();
    records.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp() -> Codepage {
        Codepage::default()
    }

    fn xmit_copyr1() -> Vec<u8> {
        let mut body = vec![0u8; 56];
        body[1] = 0xca;
        body[2] = 0x6d;
        body[3] = 0x0f;
        body[4..6].copy_from_slice(&0x0200u16.to_be_bytes()); // PO
        body[6..8].copy_from_slice(&27920u16.to_be_bytes());
        body[8..10].copy_from_slice(&80u16.to_be_bytes());
        body[10] = 0x90; // FB
        body
    }

    #[test]
    fn copyr1_xmit_form() {
        let copyr1 = Copyr1::parse(&xmit_copyr1()).unwrap().unwrap();
        assert!(!copyr1.pdse);
        assert_eq!(copyr1.recfm, "FB");
        assert_eq!(copyr1.lrecl, 80);
        assert_eq!(copyr1.block_prefix, None);
        assert_eq!(copyr1.last_referenced, None);
    }

    #[test]
    fn copyr1_tape_form_strips_the_prefix() {
        let mut record = vec![0u8; 8];
        record[0..2].copy_from_slice(&64u16.to_be_bytes());
        record[4..6].copy_from_slice(&60u16.to_be_bytes());
        record.extend(xmit_copyr1());
        let copyr1 = Copyr1::parse(&record).unwrap().unwrap();
        assert_eq!(copyr1.recfm, "FB");
        assert_eq!(copyr1.block_prefix, Some((64, 60)));
    }

    #[test]
    fn copyr1_without_eyecatcher_is_not_a_pds() {
        assert_eq!(Copyr1::parse(&[0u8; 56]).unwrap(), None);
        assert_eq!(Copyr1::parse(b"").unwrap(), None);
    }

    #[test]
    fn copyr1_overlong_is_an_error() {
        let mut record = xmit_copyr1();
        record.resize(80, 0);
        assert!(matches!(
            Copyr1::parse(&record),
            Err(error::Error::BadCopyR1 { .. })
        ));
    }

    #[test]
    fn copyr1_reference_date_tail() {
        let mut record = xmit_copyr1();
        record[39] = 121; // 2021 mod 100
        record[40..42].copy_from_slice(&33u16.to_be_bytes());
        let copyr1 = Copyr1::parse(&record).unwrap().unwrap();
        assert_eq!(copyr1.last_referenced.as_deref(), Some("210033"));
    }

    #[test]
    fn copyr2_layout() {
        let mut record = vec![0u8; 276];
        record[0] = 0x0f;
        record[16] = 0xaa; // first extent
        record[256 + 15] = 0xbb; // last extent
        let copyr2 = Copyr2::parse(&record).unwrap();
        assert_eq!(copyr2.deb[0], 0x0f);
        assert_eq!(copyr2.extents[0][0], 0xaa);
        assert_eq!(copyr2.extents[15][15], 0xbb);
        assert!(matches!(
            Copyr2::parse(&[0u8; 300]),
            Err(error::Error::BadCopyR2 { .. })
        ));
    }

    fn directory_entry(name: &str, ttr: u32, flag: u8, user_data: &[u8]) -> Vec<u8> {
        let mut entry = cp().encode(&format!("{name:<8}"));
        entry.extend_from_slice(&ttr.to_be_bytes()[1..]);
        entry.push(flag);
        entry.extend_from_slice(user_data);
        entry
    }

    fn directory_block(entries: &[Vec<u8>]) -> Vec<u8> {
        let mut packed: Vec<u8> = entries.concat();
        packed.extend_from_slice(&[0xff; 12]); // terminator entry
        let mut block = vec![0u8; 20];
        block[8..10].copy_from_slice(&8u16.to_be_bytes());
        block[10..12].copy_from_slice(&0x100u16.to_be_bytes());
        block.extend_from_slice(&((packed.len() + 2) as u16).to_be_bytes());
        block.extend_from_slice(&packed);
        block.resize(DIRECTORY_BLOCK, 0);
        block
    }

    #[test]
    fn directory_sentinel_on_block_boundary() {
        // entries sized so the 0xff sentinel lands flush against the
        // 276-byte block end: 3 x 74 + 20 + 12 + the 22-byte head
        let mut entries: Vec<Vec<u8>> = (0..3)
            .map(|i| directory_entry(&format!("MEM{i}"), i + 1, 0x1f, &[0u8; 62]))
            .collect();
        entries.push(directory_entry("MEM3", 4, 0x04, &[0u8; 8]));
        let block = directory_block(&entries);
        assert_eq!(block.len(), DIRECTORY_BLOCK);
        assert!(directory_complete(&block));
        let members = parse_directory(&block, cp());
        assert_eq!(members.len(), 4);
        assert_eq!(members[0].name, "MEM0");
        assert_eq!(members[3].ttr, 4);
    }

    #[test]
    fn directory_ispf_stats() {
        let mut user_data = vec![
            0x01, 0x04, // version 01.04
            0x00, // flags
            0x30, // modify seconds
            0x01, 0x21, 0x12, 0x3f, // created
            0x01, 0x21, 0x12, 0x3f, 0x14, 0x45, // modified + hhmm
        ];
        user_data.extend_from_slice(&500u16.to_be_bytes());
        user_data.extend_from_slice(&510u16.to_be_bytes());
        user_data.extend_from_slice(&3u16.to_be_bytes());
        user_data.extend_from_slice(&cp().encode("OWNER   "));
        user_data.extend_from_slice(&[0, 0]);
        let entry = directory_entry("STATS", 1, (user_data.len() / 2) as u8, &user_data);
        let members = parse_directory(&directory_block(&[entry]), cp());
        let ispf = members[0].ispf.as_ref().unwrap();
        assert_eq!(ispf.version, "01.04");
        assert_eq!(ispf.lines, 500);
        assert_eq!(ispf.owner, "OWNER");
        assert_eq!(ispf.created.as_deref(), Some("2021-05-03T00:00:00.000000"));
        assert_eq!(ispf.modified.as_deref(), Some("2021-05-03T14:45:30.000000"));
    }

    #[test]
    fn directory_extended_line_counts() {
        // flag 0x10 moves the line counts to 32-bit trailing fields
        let mut user_data = vec![0x01, 0x00, 0x10, 0x00];
        user_data.extend_from_slice(&[0x01, 0x21, 0x12, 0x3f]);
        user_data.extend_from_slice(&[0x01, 0x21, 0x12, 0x3f, 0x00, 0x00]);
        user_data.extend_from_slice(&1u16.to_be_bytes());
        user_data.extend_from_slice(&2u16.to_be_bytes());
        user_data.extend_from_slice(&3u16.to_be_bytes());
        user_data.extend_from_slice(&cp().encode("OWNER   "));
        user_data.extend_from_slice(&70000u32.to_be_bytes());
        user_data.extend_from_slice(&70001u32.to_be_bytes());
        user_data.extend_from_slice(&70002u32.to_be_bytes());
        assert_eq!(user_data.len(), 40);
        let entry = directory_entry("BIGSTATS", 1, 20, &user_data);
        let members = parse_directory(&directory_block(&[entry]), cp());
        let ispf = members[0].ispf.as_ref().unwrap();
        assert_eq!(ispf.lines, 70000);
        assert_eq!(ispf.newlines, 70001);
        assert_eq!(ispf.modlines, 70002);
    }

    #[test]
    fn notes_suppress_ispf() {
        let user_data = vec![0u8; 30];
        let entry = directory_entry("NOTES", 1, 0x20 | 15, &user_data);
        let members = parse_directory(&directory_block(&[entry]), cp());
        assert_eq!(members[0].notes, 1);
        assert_eq!(members[0].ispf, None);
    }

    #[test]
    fn variable_records_split_on_rdw() {
        let mut block = vec![0u8; 4]; // BDW
        for payload in [&b"FIRST"[..], &b"SECOND!"[..]] {
            block.extend_from_slice(&((payload.len() + 4) as u16).to_be_bytes());
            block.extend_from_slice(&[0, 0]);
            block.extend_from_slice(payload);
        }
        let records = split_variable(&block);
        assert_eq!(records, vec![b"FIRST".to_vec(), b"SECOND!".to_vec()]);
    }

    fn data_block(ttr: u32, payload: &[u8]) -> Vec<u8> {
        let mut block = vec![0u8; 6];
        block.extend_from_slice(&ttr.to_be_bytes()[1..]);
        block.push(0);
        block.extend_from_slice(&(payload.len() as u16).to_be_bytes());
        block.extend_from_slice(payload);
        block
    }

    fn test_pds(entries: &[Vec<u8>], stream: &[u8]) -> Pds {
        let copyr1 = Copyr1::parse(&xmit_copyr1()).unwrap().unwrap();
        let copyr2 = Copyr2::parse(&[0u8; 276]).unwrap();
        let members = parse_directory(&directory_block(entries), cp());
        Pds::build(copyr1, copyr2, members, stream, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn data_records_map_to_sorted_ttrs() {
        let entries = vec![
            directory_entry("BRAVO", 0x000202, 0, &[]),
            directory_entry("ALPHA", 0x000101, 0, &[]),
        ];
        let mut stream = data_block(0x000101, &cp().encode("ALPHA DATA"));
        stream.extend(data_block(0x000101, &[]));
        stream.extend(data_block(0x000202, &cp().encode("BRAVO DATA")));
        stream.extend(data_block(0x000202, &[]));
        let pds = test_pds(&entries, &stream);
        assert_eq!(pds.get("ALPHA").unwrap().data, cp().encode("ALPHA DATA"));
        assert_eq!(pds.get("BRAVO").unwrap().data, cp().encode("BRAVO DATA"));
    }

    #[test]
    fn alias_resolves_to_owner() {
        let entries = vec![
            directory_entry("REAL", 0x000101, 0, &[]),
            directory_entry("NICK", 0x000101, 0x80, &[]),
        ];
        let mut stream = data_block(0x000101, &cp().encode("PAYLOAD "));
        stream.extend(data_block(0x000101, &[]));
        let pds = test_pds(&entries, &stream);
        assert!(pds.get("NICK").unwrap().alias);
        assert!(pds.get("NICK").unwrap().data.is_empty());
        assert_eq!(pds.resolve("NICK").unwrap().name, "REAL");
        assert_eq!(pds.alias_target("NICK"), Some("REAL"));
        assert_eq!(pds.alias_target("REAL"), None);
    }

    #[test]
    fn orphan_alias_ring_promotes_the_first() {
        let entries = vec![
            directory_entry("GHOST1", 0x000303, 0x80, &[]),
            directory_entry("GHOST2", 0x000303, 0x80, &[]),
        ];
        let mut stream = data_block(0x000303, b"DATA");
        stream.extend(data_block(0x000303, &[]));
        let pds = test_pds(&entries, &stream);
        assert!(!pds.get("GHOST1").unwrap().alias);
        assert!(pds.get("GHOST2").unwrap().alias);
        assert_eq!(pds.resolve("GHOST2").unwrap().name, "GHOST1");
    }

    #[test]
    fn excess_data_records_become_deleted_members() {
        let entries = vec![directory_entry("ONLY", 0x000101, 0, &[])];
        let mut stream = data_block(0x000101, b"KNOWN");
        stream.extend(data_block(0x000101, &[]));
        stream.extend(data_block(0x000404, b"ORPHAN"));
        stream.extend(data_block(0x000404, &[]));
        let pds = test_pds(&entries, &stream);
        assert_eq!(pds.get("ONLY").unwrap().data, b"KNOWN");
        assert_eq!(pds.get("DELETED1").unwrap().data, b"ORPHAN");
    }

    #[test]
    fn trailing_data_without_close_is_flushed() {
        let entries = vec![directory_entry("TAIL", 0x000101, 0, &[])];
        let stream = data_block(0x000101, &cp().encode("NO CLOSE"));
        let pds = test_pds(&entries, &stream);
        assert_eq!(pds.get("TAIL").unwrap().data, cp().encode("NO CLOSE"));
    }
}
