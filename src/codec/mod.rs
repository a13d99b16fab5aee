//! EBCDIC codepage registry and byte/char translation.
//!
//! Every character field in an XMIT or tape container is EBCDIC; which
//! national variant depends on where the archive was built, so the
//! codepage is a parse option rather than a constant. `cp1140` (the
//! euro-currency update of US/Canada `cp037`) is the default, matching
//! what most hobbyist MVS distributions emit.

use crate::error;

mod tables;
pub mod date;

/// One supported EBCDIC codepage: a name and its 256-entry table.
#[derive(Clone, Copy)]
pub struct Codepage {
    name: &'static str,
    table: &'static [char; 256],
}

/// Name/table registry, ordered by codepage number.
const REGISTRY: &[(&str, &[char; 256])] = &[
    ("cp037", &tables::CP037),
    ("cp273", &tables::CP273),
    ("cp277", &tables::CP277),
    ("cp278", &tables::CP278),
    ("cp280", &tables::CP280),
    ("cp284", &tables::CP284),
    ("cp285", &tables::CP285),
    ("cp297", &tables::CP297),
    ("cp420", &tables::CP420),
    ("cp424", &tables::CP424),
    ("cp500", &tables::CP500),
    ("cp875", &tables::CP875),
    ("cp1025", &tables::CP1025),
    ("cp1026", &tables::CP1026),
    ("cp1047", &tables::CP1047),
    ("cp1140", &tables::CP1140),
    ("cp1141", &tables::CP1141),
    ("cp1142", &tables::CP1142),
    ("cp1143", &tables::CP1143),
    ("cp1144", &tables::CP1144),
    ("cp1145", &tables::CP1145),
    ("cp1146", &tables::CP1146),
    ("cp1147", &tables::CP1147),
    ("cp1148", &tables::CP1148),
    ("cp1149", &tables::CP1149),
    ("cp1153", &tables::CP1153),
];

/// Names of every codepage in the registry.
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|&(name, _)| name).collect()
}

impl Codepage {
    /// Look a codepage up by name. Names arrive from UI pickers that
    /// decorate the active entry with `<b>…</b>` markup; the markup is
    /// stripped before the lookup.
    pub fn named(name: &str) -> error::Result<Codepage> {
        let name = name.replace("<b>", "").replace("</b>", "");
        let name = name.trim().to_ascii_lowercase();
        REGISTRY
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(name, table)| Codepage { name, table })
            .ok_or(error::Error::CodepageUnknown(name))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Translate EBCDIC bytes to a Unicode string, one char per byte.
    /// Positions the codepage leaves unassigned come out as U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.table[b as usize]).collect()
    }

    /// Translate a Unicode string back to EBCDIC. Characters outside
    /// the codepage repertoire become the EBCDIC question mark (0x6F).
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| {
                self.table
                    .iter()
                    .position(|&t| t == ch)
                    .map_or(0x6f, |b| b as u8)
            })
            .collect()
    }
}

impl Default for Codepage {
    fn default() -> Self {
        Codepage {
            name: "cp1140",
            table: &tables::CP1140,
        }
    }
}

impl PartialEq for Codepage {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Codepage {}

impl core::fmt::Debug for Codepage {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt.debug_tuple("Codepage").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_the_default() {
        assert!(names().contains(&"cp1140"));
        assert_eq!(Codepage::default().name(), "cp1140");
    }

    #[test]
    fn markup_is_stripped() {
        let cp = Codepage::named("<b>cp037</b>").unwrap();
        assert_eq!(cp.name(), "cp037");
        assert!(matches!(
            Codepage::named("cp9999"),
            Err(error::Error::CodepageUnknown(_))
        ));
    }

    #[test]
    fn decodes_the_classics() {
        let cp = Codepage::named("cp1140").unwrap();
        // "HELLO" in EBCDIC
        assert_eq!(cp.decode(&[0xc8, 0xc5, 0xd3, 0xd3, 0xd6]), "HELLO");
        // cp1140 swaps the international currency sign for the euro
        assert_eq!(cp.decode(&[0x9f]), "\u{20ac}");
        assert_eq!(Codepage::named("cp037").unwrap().decode(&[0x9f]), "\u{a4}");
    }

    #[test]
    fn round_trips_its_repertoire() {
        let cp = Codepage::default();
        let text = "IEBCOPY 0123456789 abc XYZ .&$#@";
        assert_eq!(cp.decode(&cp.encode(text)), text);
    }

    #[test]
    fn encode_replaces_unmappable() {
        let cp = Codepage::named("cp037").unwrap();
        assert_eq!(cp.encode("\u{4e00}"), vec![0x6f]);
    }
}
