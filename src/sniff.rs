//! Payload classification and EBCDIC text conversion.
//!
//! A small signature table stands in for libmagic: enough to tell
//! common binary formats from plain text, with an encoding sub-value of
//! `binary`, `us-ascii` or `ebcdic`. Reassembled payloads that sniff as
//! an XMIT stream (a dataset can contain a whole transmission file) are
//! reclassified `application/xmit`.

use crate::codec::Codepage;

/// What the classifier concluded about one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub mime: String,
    /// `binary`, `us-ascii` or `ebcdic`.
    pub encoding: &'static str,
    /// Extension guessed from the MIME type, dot included.
    pub extension: Option<String>,
}

impl Classification {
    /// Text-like payloads get converted to UTF-8 downstream.
    pub fn is_text(&self) -> bool {
        self.mime == "text/plain" || self.encoding != "binary"
    }
}

/// (offset, magic, MIME type)
const SIGNATURES: &[(usize, &[u8], &str)] = &[
    (0, b"\x7fELF", "application/x-executable"),
    (0, b"MZ", "application/x-dosexec"),
    (0, b"PK\x03\x04", "application/zip"),
    (0, b"\x1f\x8b", "application/gzip"),
    (0, b"BZh", "application/x-bzip2"),
    (0, b"\xfd7zXZ\x00", "application/x-xz"),
    (0, b"7z\xbc\xaf\x27\x1c", "application/x-7z-compressed"),
    (0, b"%PDF-", "application/pdf"),
    (0, b"\x89PNG\r\n\x1a\n", "image/png"),
    (0, b"\xff\xd8\xff", "image/jpeg"),
    (0, b"GIF8", "image/gif"),
    (257, b"ustar", "application/x-tar"),
];

/// Extension for a MIME type; unknown types fall back to a dot plus the
/// subtype, matching what the original tooling shipped.
pub fn extension_for(mime: &str) -> String {
    match mime {
        "text/plain" => ".txt".into(),
        "application/xmit" => ".xmi".into(),
        "application/zip" => ".zip".into(),
        "application/gzip" => ".gz".into(),
        "application/x-bzip2" => ".bz2".into(),
        "application/x-xz" => ".xz".into(),
        "application/x-7z-compressed" => ".7z".into(),
        "application/pdf" => ".pdf".into(),
        "application/x-tar" => ".tar".into(),
        "application/x-dosexec" => ".exe".into(),
        "image/png" => ".png".into(),
        "image/jpeg" => ".jpg".into(),
        "image/gif" => ".gif".into(),
        _ => {
            let subtype = mime.rsplit('/').next().unwrap_or("bin");
            format!(".{subtype}")
        }
    }
}

fn ascii_text(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| (0x20..0x7f).contains(&b) || b == b'\n' || b == b'\r' || b == b'\t')
}

fn ebcdic_text(bytes: &[u8], codepage: Codepage) -> bool {
    codepage
        .decode(bytes)
        .chars()
        .all(|c| c != '\u{fffd}' && (!c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\u{85}')))
}

/// Classify a payload from its leading bytes.
pub fn classify(bytes: &[u8], codepage: Codepage) -> Classification {
    let (mime, encoding) = if bytes.is_empty() {
        ("application/x-empty", "binary")
    } else if let Some(&(_, _, mime)) = SIGNATURES
        .iter()
        .find(|&&(offset, magic, _)| bytes.len() >= offset + magic.len() && &bytes[offset..offset + magic.len()] == magic)
    {
        (mime, "binary")
    } else if ascii_text(bytes) {
        ("text/plain", "us-ascii")
    } else if ebcdic_text(bytes, codepage) {
        ("text/plain", "ebcdic")
    } else {
        ("application/octet-stream", "binary")
    };

    // the signature table cannot see a nested transmission file:
    // bytes 2..8 of an XMIT stream are EBCDIC "INMR01"
    let mime = if mime == "application/octet-stream"
        && bytes.len() >= 8
        && codepage.decode(&bytes[2..8]) == "INMR01"
    {
        "application/xmit"
    } else {
        mime
    };

    Classification {
        mime: mime.into(),
        encoding,
        extension: Some(extension_for(mime)),
    }
}

/// Classify, then apply the force-convert extension override. A forced
/// payload reports `.txt` unless it sniffed as a nested XMIT, whose
/// `.xmi` extension wins.
pub fn classify_with(bytes: &[u8], codepage: Codepage, force_convert: bool) -> Classification {
    let mut classification = classify(bytes, codepage);
    if force_convert && classification.mime != "application/xmit" {
        classification.extension = Some(".txt".into());
    }
    classification
}

/// Convert an EBCDIC payload to UTF-8 text, one line per `recl`-sized
/// record. When `strip_seqnum` is on and a line ends in an 8-digit
/// sequence number column, the column is dropped; every line is then
/// right-trimmed. A `recl` of zero converts the payload as one line.
pub fn convert_text(codepage: Codepage, bytes: &[u8], recl: usize, strip_seqnum: bool) -> String {
    let decoded = codepage.decode(bytes);
    if recl < 1 {
        return decoded + "\n";
    }
    let chars: Vec<char> = decoded.chars().collect();
    let mut lines = Vec::with_capacity(chars.len() / recl + 1);
    for chunk in chars.chunks(recl) {
        let keep = if strip_seqnum
            && chunk.len() >= 8
            && chunk[chunk.len() - 8..].iter().all(|c| c.is_ascii_digit())
        {
            chunk.len() - 8
        } else {
            chunk.len()
        };
        let line: String = chars_trim_end(&chunk[..keep]);
        lines.push(line);
    }
    lines.join("\n") + "\n"
}

/// Convert variable-format records: each record is one line, trimmed.
pub fn convert_records(codepage: Codepage, records: &[Vec<u8>], strip_seqnum: bool) -> String {
    let mut text = String::new();
    for record in records {
        let line = convert_text(codepage, record, record.len(), strip_seqnum);
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

fn chars_trim_end(chars: &[char]) -> String {
    let line: String = chars.iter().collect();
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp() -> Codepage {
        Codepage::default()
    }

    #[test]
    fn classifies_ascii_text() {
        let c = classify(b"hello world\n", cp());
        assert_eq!(c.mime, "text/plain");
        assert_eq!(c.encoding, "us-ascii");
        assert_eq!(c.extension.as_deref(), Some(".txt"));
    }

    #[test]
    fn classifies_ebcdic_text() {
        let bytes = cp().encode("HELLO   DATA");
        let c = classify(&bytes, cp());
        assert_eq!(c.mime, "text/plain");
        assert_eq!(c.encoding, "ebcdic");
        assert!(c.is_text());
    }

    #[test]
    fn classifies_binaries_by_signature() {
        let c = classify(b"\x7fELF\x02\x01\x01", cp());
        assert_eq!(c.mime, "application/x-executable");
        assert!(!c.is_text());
        assert_eq!(classify(b"\x1f\x8b\x08\x00", cp()).extension.as_deref(), Some(".gz"));
    }

    #[test]
    fn classifies_empty() {
        assert_eq!(classify(b"", cp()).mime, "application/x-empty");
    }

    #[test]
    fn reclassifies_nested_xmit() {
        let mut bytes = vec![0x00, 0x00];
        bytes.extend_from_slice(&cp().encode("INMR01"));
        bytes.extend_from_slice(&[0x00, 0x00]);
        let c = classify(&bytes, cp());
        assert_eq!(c.mime, "application/xmit");
        assert_eq!(c.extension.as_deref(), Some(".xmi"));
    }

    #[test]
    fn converts_fixed_records() {
        let mut text = String::from("HELLO");
        text.push_str(&" ".repeat(75));
        let bytes = cp().encode(&text);
        assert_eq!(convert_text(cp(), &bytes, 80, true), "HELLO\n");
    }

    #[test]
    fn strips_sequence_numbers() {
        let line = format!("{:<72}{:0>8}", "MOVE A TO B", 10);
        let bytes = cp().encode(&line);
        assert_eq!(convert_text(cp(), &bytes, 80, true), "MOVE A TO B\n");
        assert_eq!(
            convert_text(cp(), &bytes, 80, false),
            format!("{:<72}{:0>8}\n", "MOVE A TO B", 10)
        );
    }

    #[test]
    fn converts_variable_records() {
        let records = vec![cp().encode("FIRST   "), cp().encode("SECOND")];
        assert_eq!(convert_records(cp(), &records, true), "FIRST\nSECOND\n");
    }
}
