//! Shared number and name shaping for slide copy.

use core::str;

/// Enough room for `u64::MAX` with separators.
pub const GROUPED_NUMBER_BYTES: usize = 26;

/// Formats `value` with `,` between thousands groups, e.g. `159,935`.
pub fn group_thousands(value: u64, out: &mut [u8; GROUPED_NUMBER_BYTES]) -> &str {
    let mut digits = [0u8; 20];
    let mut digit_count = 0usize;
    let mut rest = value;
    loop {
        digits[digit_count] = b'0' + (rest % 10) as u8;
        digit_count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let mut len = 0usize;
    for idx in (0..digit_count).rev() {
        out[len] = digits[idx];
        len += 1;
        if idx > 0 && idx % 3 == 0 {
            out[len] = b',';
            len += 1;
        }
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

/// First whitespace-delimited word of a display name.
pub fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// `part / whole` as a whole percentage, rounded half up and capped at 100.
pub fn percent_of(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }

    let scaled = (part as u128 * 200 + whole as u128) / (whole as u128 * 2);
    scaled.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let mut buf = [0u8; GROUPED_NUMBER_BYTES];
        assert_eq!(group_thousands(0, &mut buf), "0");
        assert_eq!(group_thousands(999, &mut buf), "999");
        assert_eq!(group_thousands(1_000, &mut buf), "1,000");
        assert_eq!(group_thousands(159_935, &mut buf), "159,935");
        assert_eq!(group_thousands(12_345_678, &mut buf), "12,345,678");
        assert_eq!(
            group_thousands(u64::MAX, &mut buf),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn first_name_takes_leading_word() {
        assert_eq!(first_name("Ana Lima"), "Ana");
        assert_eq!(first_name("Zed"), "Zed");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1, 2), 50);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 200), 1);
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(10, 5), 100);
    }
}
