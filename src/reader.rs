//! Bounded byte access primitives shared by the container walkers.
//!
//! Multi-byte integers come off `scroll`; the helpers here cover the
//! shapes scroll has no context for: 3-byte TTR addresses, big-endian
//! integers of arbitrary width (text-unit decimals), and slice
//! extraction that reports truncation instead of panicking.

use crate::error;

/// Extract `len` bytes at `offset`, or fail with `Truncated` at the
/// first byte that is out of bounds.
pub(crate) fn slice(bytes: &[u8], offset: usize, len: usize) -> error::Result<&[u8]> {
    let end = offset
        .checked_add(len)
        .ok_or(error::Error::Truncated(offset))?;
    if end > bytes.len() {
        return Err(error::Error::Truncated(bytes.len().max(offset)));
    }
    Ok(&bytes[offset..end])
}

/// A 3-byte big-endian quantity; TTRs and the COPYR1 eye-catcher.
pub(crate) fn read_u24(bytes: &[u8], offset: usize) -> error::Result<u32> {
    let b = slice(bytes, offset, 3)?;
    Ok(u32::from(b[0]) << 16 | u32::from(b[1]) << 8 | u32::from(b[2]))
}

/// Big-endian integer of whatever width the field happens to have.
/// Widths beyond 8 bytes keep the low-order 64 bits.
pub(crate) fn be_uint(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| acc << 8 | u64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_in_bounds() {
        let buf = [1u8, 2, 3, 4];
        assert_eq!(slice(&buf, 1, 2).unwrap(), &[2, 3]);
    }

    #[test]
    fn slice_truncated() {
        let buf = [1u8, 2, 3, 4];
        assert!(matches!(
            slice(&buf, 2, 3),
            Err(crate::error::Error::Truncated(_))
        ));
    }

    #[test]
    fn u24_and_be_uint() {
        let buf = [0xca, 0x6d, 0x0f, 0x01];
        assert_eq!(read_u24(&buf, 0).unwrap(), 0xca6d0f);
        assert_eq!(be_uint(&buf), 0xca6d0f01);
        assert_eq!(be_uint(&[]), 0);
    }
}
