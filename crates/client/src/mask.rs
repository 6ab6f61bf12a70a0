//! Key masking for display and export.
//!
//! Invariants:
//! - The input is trimmed before masking.
//! - At most `visible_start` leading and `visible_end` trailing characters are revealed.
//! - Keys no longer than `visible_start + visible_end` are fully replaced by
//!   the same number of asterisks.
//! - Lengths are counted in `char`s, so multi-byte input is never split.

use keyprobe_config::constants::{MASK_VISIBLE_END, MASK_VISIBLE_START};

/// Fixed filler placed between the visible prefix and suffix.
const MASK_FILLER: &str = "****";

/// Mask a key with the default 4 leading and 3 trailing visible characters.
///
/// ```
/// use keyprobe_client::mask_key;
///
/// assert_eq!(mask_key("ABCDEFGHIJK"), "ABCD****IJK");
/// assert_eq!(mask_key("AB"), "**");
/// ```
pub fn mask_key(key: &str) -> String {
    mask_key_with(key, MASK_VISIBLE_START, MASK_VISIBLE_END)
}

/// Mask a key, keeping `visible_start` leading and `visible_end` trailing characters.
pub fn mask_key_with(key: &str, visible_start: usize, visible_end: usize) -> String {
    let trimmed = key.trim();
    let len = trimmed.chars().count();

    if len <= visible_start.saturating_add(visible_end) {
        return "*".repeat(len);
    }

    let head: String = trimmed.chars().take(visible_start).collect();
    let tail: String = trimmed.chars().skip(len - visible_end).collect();
    format!("{head}{MASK_FILLER}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_long_key() {
        assert_eq!(mask_key("ABCDEFGHIJK"), "ABCD****IJK");
    }

    #[test]
    fn test_mask_short_key_is_fully_hidden() {
        assert_eq!(mask_key("AB"), "**");
        assert_eq!(mask_key("ABCDEFG"), "*******");
    }

    #[test]
    fn test_mask_empty_key() {
        assert_eq!(mask_key(""), "");
        assert_eq!(mask_key("   "), "");
    }

    #[test]
    fn test_mask_trims_whitespace() {
        assert_eq!(mask_key("  ABCDEFGHIJK\t\n"), "ABCD****IJK");
        assert_eq!(mask_key(" abc "), "***");
    }

    #[test]
    fn test_mask_just_above_threshold() {
        assert_eq!(mask_key("ABCDEFGH"), "ABCD****FGH");
    }

    #[test]
    fn test_mask_custom_visibility() {
        assert_eq!(mask_key_with("0123456789", 2, 2), "01****89");
        assert_eq!(mask_key_with("0123456789", 0, 0), "****");
    }

    #[test]
    fn test_mask_multibyte_characters() {
        assert_eq!(mask_key("ñañañañaña"), "ñaña****aña");
        assert_eq!(mask_key("ñandú"), "*****");
    }
}
