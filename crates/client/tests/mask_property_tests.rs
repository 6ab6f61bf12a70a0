//! Property tests for key masking.
//!
//! # Invariants
//! - Masking never panics and never reveals more than 4 leading and 3 trailing chars.
//! - Short keys (7 chars or fewer after trimming) are fully replaced by asterisks.
//! - Output depends only on the trimmed key.

use keyprobe_client::{mask_key, mask_key_with};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_mask_never_panics(key in ".*") {
        let _ = mask_key(&key);
    }

    #[test]
    fn prop_short_keys_fully_masked(key in "[a-zA-Z0-9]{0,7}") {
        let masked = mask_key(&key);
        prop_assert_eq!(masked.chars().count(), key.chars().count());
        prop_assert!(masked.chars().all(|c| c == '*'));
    }

    #[test]
    fn prop_long_keys_reveal_only_edges(key in "[a-zA-Z0-9]{8,64}") {
        let masked = mask_key(&key);
        let chars: Vec<char> = key.chars().collect();
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 3..].iter().collect();

        prop_assert_eq!(masked, format!("{head}****{tail}"));
    }

    #[test]
    fn prop_surrounding_whitespace_ignored(key in "[a-z0-9]{0,40}", pad in "[ \t\r\n]{0,4}") {
        let padded = format!("{pad}{key}{pad}");
        prop_assert_eq!(mask_key(&padded), mask_key(&key));
    }

    #[test]
    fn prop_unicode_keys_do_not_split_chars(key in "\\PC{8,32}") {
        // Any valid String output proves no UTF-8 sequence was split.
        let masked = mask_key_with(&key, 4, 3);
        prop_assert!(masked.chars().count() <= 11);
    }
}
