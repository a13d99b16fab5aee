//! ANSI/IBM standard tape labels: fixed-width 80-byte EBCDIC records.
//!
//! Field offsets follow the IBM standard label layout. Numeric fields
//! are blank-padded decimal character data; a blank field reads as
//! zero. Text fields are stored right-trimmed.

use crate::codec::{self, Codepage};

fn raw(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect()
}

fn text(chars: &[char], start: usize, end: usize) -> String {
    raw(chars, start, end).trim_end().to_string()
}

fn number(chars: &[char], start: usize, end: usize) -> u32 {
    let field: String = text(chars, start, end);
    field.trim().parse().unwrap_or(0)
}

/// VOL1: volume serial and owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeLabel {
    pub volser: String,
    pub owner: String,
}

impl VolumeLabel {
    pub fn parse(record: &[u8], codepage: Codepage) -> VolumeLabel {
        let chars: Vec<char> = codepage.decode(record).chars().collect();
        VolumeLabel {
            volser: text(&chars, 4, 10),
            owner: text(&chars, 41, 51),
        }
    }
}

/// HDR1: dataset identity and accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hdr1 {
    pub dsn: String,
    pub serial: String,
    pub volume_seq: u32,
    pub dataset_seq: u32,
    pub generation: u32,
    pub version: u32,
    pub created: Option<String>,
    pub expires: Option<String>,
    pub security: bool,
    pub block_count_low: u32,
    pub system_code: String,
    pub block_count_high: u32,
}

impl Hdr1 {
    pub fn parse(record: &[u8], codepage: Codepage) -> Hdr1 {
        let chars: Vec<char> = codepage.decode(record).chars().collect();
        Hdr1 {
            dsn: text(&chars, 4, 21),
            serial: text(&chars, 21, 27),
            volume_seq: number(&chars, 27, 31),
            dataset_seq: number(&chars, 31, 35),
            generation: number(&chars, 35, 39),
            version: number(&chars, 39, 41),
            created: codec::date::tape(&raw(&chars, 41, 47)),
            expires: codec::date::tape(&raw(&chars, 47, 53)),
            security: number(&chars, 53, 54) != 0,
            block_count_low: number(&chars, 54, 60),
            system_code: text(&chars, 60, 73),
            block_count_high: number(&chars, 76, 80),
        }
    }
}

/// HDR2: record format and job provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hdr2 {
    pub recfm: String,
    pub block_len: u32,
    pub lrecl: u32,
    pub density: u32,
    pub position: String,
    pub jobid: String,
    pub technique: String,
    pub control_char: String,
    pub block_attr: String,
    pub devser: String,
    pub dsnid: String,
    pub large_block_len: String,
}

impl Hdr2 {
    pub fn parse(record: &[u8], codepage: Codepage) -> Hdr2 {
        let chars: Vec<char> = codepage.decode(record).chars().collect();
        Hdr2 {
            recfm: text(&chars, 4, 5),
            block_len: number(&chars, 5, 10),
            lrecl: number(&chars, 10, 15),
            density: number(&chars, 15, 16),
            position: text(&chars, 16, 17),
            jobid: text(&chars, 17, 34),
            technique: text(&chars, 34, 36),
            control_char: text(&chars, 36, 37),
            block_attr: text(&chars, 38, 39),
            devser: text(&chars, 41, 47),
            dsnid: text(&chars, 47, 48),
            large_block_len: text(&chars, 70, 80),
        }
    }
}

/// UTL1..UTL8 user label content: everything past the eye-catcher.
pub fn user_label(record: &[u8], codepage: Codepage) -> String {
    let chars: Vec<char> = codepage.decode(record).chars().collect();
    text(&chars, 4, chars.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp() -> Codepage {
        Codepage::default()
    }

    fn label(content: &str) -> Vec<u8> {
        cp().encode(&format!("{content:<80}"))
    }

    #[test]
    fn vol1_fields() {
        let mut content = String::from("VOL1SCR001");
        content.push_str(&" ".repeat(31));
        content.push_str("OWNER     ");
        let volume = VolumeLabel::parse(&label(&content), cp());
        assert_eq!(volume.volser, "SCR001");
        assert_eq!(volume.owner, "OWNER");
    }

    #[test]
    fn hdr1_fields() {
        let content = format!(
            "HDR1{:<17}{:<6}{:0>4}{:0>4}{:0>4}{:0>2}{}{}{}{:0>6}{:<13}{}{:0>4}",
            "SYS1.LINKLIB", "SCR001", 1, 1, 0, 0, " 87032", " 99365", "0", 12, "IBM OS/VS 370", "   ", 0
        );
        let hdr1 = Hdr1::parse(&label(&content), cp());
        assert_eq!(hdr1.dsn, "SYS1.LINKLIB");
        assert_eq!(hdr1.serial, "SCR001");
        assert_eq!(hdr1.volume_seq, 1);
        assert_eq!(hdr1.created.as_deref(), Some("1987-02-01T00:00:00.000000"));
        assert_eq!(hdr1.expires.as_deref(), Some("1999-12-31T00:00:00.000000"));
        assert!(!hdr1.security);
        assert_eq!(hdr1.block_count_low, 12);
        assert_eq!(hdr1.system_code, "IBM OS/VS 370");
    }

    #[test]
    fn hdr2_fields() {
        let mut content = String::from("HDR2F3276000080");
        content.push('3');
        content.push('0');
        content.push_str("JOB1/STEP1       ");
        content.push_str(&" ".repeat(46));
        let hdr2 = Hdr2::parse(&label(&content), cp());
        assert_eq!(hdr2.recfm, "F");
        assert_eq!(hdr2.block_len, 32760);
        assert_eq!(hdr2.lrecl, 80);
        assert_eq!(hdr2.density, 3);
        assert_eq!(hdr2.jobid, "JOB1/STEP1");
    }

    #[test]
    fn blank_numeric_fields_read_zero() {
        let hdr1 = Hdr1::parse(&label("HDR1"), cp());
        assert_eq!(hdr1.volume_seq, 0);
        assert_eq!(hdr1.created, None);
        assert_eq!(hdr1.dsn, "");
    }

    #[test]
    fn user_label_content() {
        let utl = user_label(&label("UTL1HELLO FROM THE PAST"), cp());
        assert_eq!(utl, "HELLO FROM THE PAST");
    }
}
