//! Mainframe date decoding.
//!
//! Three shapes show up in these containers: packed-decimal ISPF
//! statistics dates, `cyyddd` tape label dates, and the 20-digit
//! `INMFTIME` origin timestamp. All of them normalize to ISO-8601 with
//! microsecond precision, or `None` when the source bytes do not parse.
//! A partially-converted string is never produced.

use chrono::{NaiveDate, NaiveDateTime};

fn iso(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Two BCD digits, or `None` on a non-decimal nibble.
fn bcd(byte: u8) -> Option<u32> {
    let (hi, lo) = (u32::from(byte >> 4), u32::from(byte & 0x0f));
    if hi > 9 || lo > 9 {
        return None;
    }
    Some(hi * 10 + lo)
}

/// Decode an ISPF statistics date: byte 0 is the century offset from
/// 1900, byte 1 the BCD year, bytes 2..4 the BCD day-of-year (high
/// three digits, the final nibble is the packed-decimal sign). Bytes
/// 4..6, when present, carry BCD hours and minutes; seconds travel in a
/// separate byte of the stats block.
pub fn ispf(date: &[u8], seconds: u8) -> Option<String> {
    if date.len() < 4 {
        return None;
    }
    let year = i32::try_from(19 + u32::from(date[0])).ok()? * 100 + bcd(date[1])? as i32;
    let day_units = u32::from(date[3] >> 4);
    if day_units > 9 {
        return None;
    }
    let mut day = bcd(date[2])? * 10 + day_units;
    if day == 0 {
        day = 1;
    }
    let (hours, minutes) = if date.len() >= 6 {
        (bcd(date[4])?, bcd(date[5])?)
    } else {
        (0, 0)
    };
    let seconds = if seconds != 0 { bcd(seconds)? } else { 0 };
    let datetime = NaiveDate::from_yo_opt(year, day)?.and_hms_opt(hours, minutes, seconds)?;
    Some(iso(datetime))
}

/// Decode a tape label date in `cyyddd` form: a blank century means
/// 1900, otherwise the century digit counts up from 2000. A trailing
/// `'0'` day digit is bumped to `'1'` (day-of-year 000 does not exist).
pub fn tape(date: &str) -> Option<String> {
    let chars: Vec<char> = date.chars().collect();
    if chars.len() < 6 {
        return None;
    }
    let century = match chars[0] {
        ' ' => 19,
        c => 20 + c.to_digit(10)?,
    };
    let mut digits: String = chars[1..6].iter().collect();
    if digits.ends_with('0') {
        digits.pop();
        digits.push('1');
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = i32::try_from(century).ok()? * 100 + digits[..2].parse::<i32>().ok()?;
    let day: u32 = digits[2..5].parse().ok()?;
    let datetime = NaiveDate::from_yo_opt(year, day)?.and_hms_opt(0, 0, 0)?;
    Some(iso(datetime))
}

/// Normalize an `INMFTIME` origin timestamp. The field is a decimal
/// character string `YYYYMMDDHHMMSSffffff` that senders truncate at
/// arbitrary precision; it is right-padded with zeros to 20 digits
/// before parsing.
pub fn transmit(stamp: &str) -> Option<String> {
    let mut digits = stamp.trim().to_string();
    while digits.len() < 20 {
        digits.push('0');
    }
    if !digits.as_bytes().iter().take(20).all(u8::is_ascii_digit) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(
        digits[0..4].parse().ok()?,
        digits[4..6].parse().ok()?,
        digits[6..8].parse().ok()?,
    )?;
    let datetime = date.and_hms_micro_opt(
        digits[8..10].parse().ok()?,
        digits[10..12].parse().ok()?,
        digits[12..14].parse().ok()?,
        digits[14..20].parse().ok()?,
    )?;
    Some(iso(datetime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ispf_date_without_time() {
        // century 20, year 21, day 123
        assert_eq!(
            ispf(&[0x01, 0x21, 0x12, 0x3f], 0).as_deref(),
            Some("2021-05-03T00:00:00.000000")
        );
    }

    #[test]
    fn ispf_date_with_time_and_seconds() {
        assert_eq!(
            ispf(&[0x00, 0x99, 0x00, 0x1f, 0x23, 0x59], 0x42).as_deref(),
            Some("1999-01-01T23:59:42.000000")
        );
    }

    #[test]
    fn ispf_day_zero_is_bumped() {
        assert_eq!(
            ispf(&[0x01, 0x20, 0x00, 0x0f], 0).as_deref(),
            Some("2020-01-01T00:00:00.000000")
        );
    }

    #[test]
    fn ispf_garbage_is_none() {
        assert_eq!(ispf(&[0x01, 0xab, 0x00, 0x1f], 0), None);
        assert_eq!(ispf(&[0x01], 0), None);
    }

    #[test]
    fn tape_blank_century_is_1900() {
        assert_eq!(tape(" 87032").as_deref(), Some("1987-02-01T00:00:00.000000"));
    }

    #[test]
    fn tape_century_digit_counts_from_2000() {
        assert_eq!(tape("121001").as_deref(), Some("2121-01-01T00:00:00.000000"));
    }

    #[test]
    fn tape_trailing_zero_day_is_bumped() {
        assert_eq!(tape(" 99100").as_deref(), Some("1999-04-11T00:00:00.000000"));
    }

    #[test]
    fn tape_blanks_are_none() {
        assert_eq!(tape("      "), None);
        assert_eq!(tape(""), None);
    }

    #[test]
    fn transmit_pads_to_microseconds() {
        assert_eq!(
            transmit("20210101123456").as_deref(),
            Some("2021-01-01T12:34:56.000000")
        );
        assert_eq!(
            transmit("20210101123456123456").as_deref(),
            Some("2021-01-01T12:34:56.123456")
        );
        assert_eq!(transmit("not a date"), None);
    }
}
