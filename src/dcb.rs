//! DCB attribute decoding: RECFM and DSORG bit fields rendered the way
//! listings spell them.

/// Decode the first RECFM byte into the `F`/`V`/`U` family letter plus
/// the blocked/ANSI/machine/spanned flags.
pub fn recfm(flag: u8) -> String {
    let mut rfm = String::from(match flag & 0xc0 {
        0x40 => "V",
        0x80 => "F",
        0xc0 => "U",
        _ => "?",
    });
    if flag & 0x10 != 0 {
        rfm.push('B');
    }
    if flag & 0x04 != 0 {
        rfm.push('A');
    }
    if flag & 0x02 != 0 {
        rfm.push('M');
    }
    if flag & 0x08 != 0 {
        rfm.push('S');
    }
    rfm
}

/// Decode a DSORG halfword. Organization bits are tested from high to
/// low and the last match wins, then the unmovable bit appends `U`.
pub fn dsorg(flags: u16) -> String {
    let mut org = "";
    if flags & 0x8000 != 0 {
        org = "ISAM";
    }
    if flags & 0x4000 != 0 {
        org = "PS";
    }
    if flags & 0x2000 != 0 {
        org = "DA";
    }
    if flags & 0x1000 != 0 {
        org = "BTAM";
    }
    if flags & 0x0200 != 0 {
        org = "PO";
    }
    let mut org = if org.is_empty() {
        String::from("?")
    } else {
        String::from(org)
    };
    if flags & 0x0001 != 0 {
        org.push('U');
    }
    org
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recfm_families() {
        assert_eq!(recfm(0x90), "FB");
        assert_eq!(recfm(0x50), "VB");
        assert_eq!(recfm(0xc0), "U");
        assert_eq!(recfm(0x80), "F");
        assert_eq!(recfm(0x00), "?");
    }

    #[test]
    fn recfm_option_flags() {
        assert_eq!(recfm(0x94), "FBA");
        assert_eq!(recfm(0x42), "VM");
        assert_eq!(recfm(0x58), "VBS");
    }

    #[test]
    fn dsorg_bits() {
        assert_eq!(dsorg(0x4001), "PSU");
        assert_eq!(dsorg(0x0200), "PO");
        assert_eq!(dsorg(0x8000), "ISAM");
        assert_eq!(dsorg(0x0000), "?");
        // PO outranks PS when both bits are lit
        assert_eq!(dsorg(0x4200), "PO");
    }
}
