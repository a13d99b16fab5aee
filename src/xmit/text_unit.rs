//! INMR text units: the key/count/items metadata encoding used by the
//! TSO TRANSMIT control records.
//!
//! Each unit is a 2-byte key, a 2-byte item count, then `count` items.
//! Every item is a 2-byte length followed by that many bytes; the first
//! item's length sits after the count, later items restart at the next
//! free byte. Values decode per the key's registered type.

use log::debug;
use scroll::{BE, Pread};

use crate::codec::Codepage;
use crate::error;
use crate::reader;

pub const INMDDNAM: u16 = 0x0001;
pub const INMDSNAM: u16 = 0x0002;
pub const INMMEMBR: u16 = 0x0003;
pub const INMSECND: u16 = 0x000b;
pub const INMDIR: u16 = 0x000c;
pub const INMEXPDT: u16 = 0x0022;
pub const INMTERM: u16 = 0x0028;
pub const INMBLKSZ: u16 = 0x0030;
pub const INMDSORG: u16 = 0x003c;
pub const INMLRECL: u16 = 0x0042;
pub const INMRECFM: u16 = 0x0049;
pub const INMTNODE: u16 = 0x1001;
pub const INMTUID: u16 = 0x1002;
pub const INMFNODE: u16 = 0x1011;
pub const INMFUID: u16 = 0x1012;
pub const INMLREF: u16 = 0x1020;
pub const INMLCHG: u16 = 0x1021;
pub const INMCREAT: u16 = 0x1022;
pub const INMFVERS: u16 = 0x1023;
pub const INMFTIME: u16 = 0x1024;
pub const INMTTIME: u16 = 0x1025;
pub const INMFACK: u16 = 0x1026;
pub const INMERRCD: u16 = 0x1027;
pub const INMUTILN: u16 = 0x1028;
pub const INMUSERP: u16 = 0x1029;
pub const INMRECCT: u16 = 0x102a;
pub const INMSIZE: u16 = 0x102c;
pub const INMNUMF: u16 = 0x102f;
pub const INMTYPE: u16 = 0x8012;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitType {
    Character,
    Decimal,
    Hex,
}

/// Key registry: (key, mnemonic, value type).
const KEYS: &[(u16, &str, UnitType)] = &[
    (INMDDNAM, "INMDDNAM", UnitType::Character),
    (INMDSNAM, "INMDSNAM", UnitType::Character),
    (INMMEMBR, "INMMEMBR", UnitType::Character),
    (INMSECND, "INMSECND", UnitType::Decimal),
    (INMDIR, "INMDIR", UnitType::Decimal),
    (INMEXPDT, "INMEXPDT", UnitType::Character),
    (INMTERM, "INMTERM", UnitType::Character),
    (INMBLKSZ, "INMBLKSZ", UnitType::Decimal),
    (INMDSORG, "INMDSORG", UnitType::Hex),
    (INMLRECL, "INMLRECL", UnitType::Decimal),
    (INMRECFM, "INMRECFM", UnitType::Hex),
    (INMTNODE, "INMTNODE", UnitType::Character),
    (INMTUID, "INMTUID", UnitType::Character),
    (INMFNODE, "INMFNODE", UnitType::Character),
    (INMFUID, "INMFUID", UnitType::Character),
    (INMLREF, "INMLREF", UnitType::Character),
    (INMLCHG, "INMLCHG", UnitType::Character),
    (INMCREAT, "INMCREAT", UnitType::Character),
    (INMFVERS, "INMFVERS", UnitType::Character),
    (INMFTIME, "INMFTIME", UnitType::Character),
    (INMTTIME, "INMTTIME", UnitType::Character),
    (INMFACK, "INMFACK", UnitType::Character),
    (INMERRCD, "INMERRCD", UnitType::Character),
    (INMUTILN, "INMUTILN", UnitType::Character),
    (INMUSERP, "INMUSERP", UnitType::Character),
    (INMRECCT, "INMRECCT", UnitType::Character),
    (INMSIZE, "INMSIZE", UnitType::Decimal),
    (INMNUMF, "INMNUMF", UnitType::Decimal),
    (INMTYPE, "INMTYPE", UnitType::Hex),
];

/// The mnemonic for a key, if it is one the registry knows.
pub fn mnemonic(key: u16) -> Option<&'static str> {
    KEYS.iter().find(|&&(k, ..)| k == key).map(|&(_, name, _)| name)
}

fn unit_type(key: u16) -> Option<UnitType> {
    KEYS.iter().find(|&&(k, ..)| k == key).map(|&(.., ty)| ty)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(u64),
    Bytes(Vec<u8>),
}

/// A decoded text-unit stream, indexed by 16-bit key. Repeated keys
/// keep the last value seen, matching receiver behavior.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextUnits {
    units: Vec<(u16, Value)>,
}

impl TextUnits {
    pub fn get(&self, key: u16) -> Option<&Value> {
        self.units
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn has(&self, key: u16) -> bool {
        self.get(key).is_some()
    }

    pub fn text(&self, key: u16) -> Option<&str> {
        match self.get(key) {
            Some(Value::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self, key: u16) -> Option<u64> {
        match self.get(key) {
            Some(Value::Number(number)) => Some(*number),
            _ => None,
        }
    }

    pub fn raw(&self, key: u16) -> Option<&[u8]> {
        match self.get(key) {
            Some(Value::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u16, Value)> {
        self.units.iter()
    }

    fn set(&mut self, key: u16, value: Value) {
        if let Some(slot) = self.units.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.units.push((key, value));
        }
    }
}

/// Walk a text-unit stream to exhaustion.
pub fn parse(bytes: &[u8], codepage: Codepage) -> error::Result<TextUnits> {
    let mut units = TextUnits::default();
    let mut loc = 0;
    while loc < bytes.len() {
        let key = bytes.pread_with::<u16>(loc, BE)?;
        let count = bytes.pread_with::<u16>(loc + 2, BE)?;
        if count == 0 {
            // zero-count units (INMFACK acknowledgment requests, the
            // INMTERM message marker) are pure presence flags
            debug!("zero-count text unit {:#06x}", key);
            units.set(key, Value::Text(String::new()));
            loc += 4;
            continue;
        }
        let mut qualifiers: Vec<String> = Vec::new();
        for item in 0..count {
            let (length, data_at) = if item == 0 {
                (usize::from(bytes.pread_with::<u16>(loc + 4, BE)?), loc + 6)
            } else {
                (usize::from(bytes.pread_with::<u16>(loc, BE)?), loc + 2)
            };
            let data = reader::slice(bytes, data_at, length)?;
            match unit_type(key) {
                Some(UnitType::Character) => {
                    let text = codepage.decode(data);
                    if key == INMDSNAM {
                        // dataset name qualifiers arrive one item each
                        qualifiers.push(text);
                    } else {
                        units.set(key, Value::Text(text));
                    }
                }
                Some(UnitType::Decimal) => {
                    units.set(key, Value::Number(reader::be_uint(data)));
                }
                Some(UnitType::Hex) if key == INMTYPE => {
                    let label = match reader::be_uint(data) {
                        0x80 => "Data Library",
                        0x40 => "Program Library",
                        _ => "None",
                    };
                    units.set(key, Value::Text(label.into()));
                }
                Some(UnitType::Hex) => {
                    units.set(key, Value::Bytes(data.to_vec()));
                }
                None => {
                    debug!("skipping unknown text unit key {:#06x}", key);
                }
            }
            loc = data_at + length;
        }
        if key == INMDSNAM && !qualifiers.is_empty() {
            units.set(key, Value::Text(qualifiers.join(".")));
        }
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp() -> Codepage {
        Codepage::default()
    }

    fn unit(key: u16, items: &[&[u8]]) -> Vec<u8> {
        let mut bytes = key.to_be_bytes().to_vec();
        bytes.extend_from_slice(&(items.len() as u16).to_be_bytes());
        for item in items {
            bytes.extend_from_slice(&(item.len() as u16).to_be_bytes());
            bytes.extend_from_slice(item);
        }
        bytes
    }

    #[test]
    fn dsname_qualifiers_are_joined() {
        let stream = unit(
            INMDSNAM,
            &[&cp().encode("USER1"), &cp().encode("TEST"), &cp().encode("DATA")],
        );
        let units = parse(&stream, cp()).unwrap();
        assert_eq!(units.text(INMDSNAM), Some("USER1.TEST.DATA"));
    }

    #[test]
    fn decimals_and_hex() {
        let mut stream = unit(INMLRECL, &[&[0x00, 0x50]]);
        stream.extend(unit(INMRECFM, &[&[0x90, 0x00]]));
        stream.extend(unit(INMTYPE, &[&[0x80]]));
        let units = parse(&stream, cp()).unwrap();
        assert_eq!(units.number(INMLRECL), Some(80));
        assert_eq!(units.raw(INMRECFM), Some(&[0x90, 0x00][..]));
        assert_eq!(units.text(INMTYPE), Some("Data Library"));
    }

    #[test]
    fn zero_count_unit_is_presence() {
        let stream = [&INMTERM.to_be_bytes()[..], &[0x00, 0x00]].concat();
        let units = parse(&stream, cp()).unwrap();
        assert!(units.has(INMTERM));
    }

    #[test]
    fn truncated_item_is_an_error() {
        let mut stream = unit(INMFUID, &[&cp().encode("USER1")]);
        stream.truncate(stream.len() - 2);
        assert!(matches!(
            parse(&stream, cp()),
            Err(error::Error::Truncated(_))
        ));
    }

    #[test]
    fn unknown_keys_are_skipped_not_fatal() {
        let mut stream = unit(0x7777, &[&[0xde, 0xad]]);
        stream.extend(unit(INMFUID, &[&cp().encode("USER1")]));
        let units = parse(&stream, cp()).unwrap();
        assert_eq!(units.text(INMFUID), Some("USER1"));
        assert!(!units.has(0x7777));
    }
}
