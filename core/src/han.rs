//! Han (Chinese/CJK) code point classification.
//!
//! The set is the union of the Unicode blocks allocated to Han ideographs and
//! their related symbols (radicals, iteration marks, Hangzhou numerals, the
//! unified ideograph blocks and the compatibility ideographs). It is built
//! once per process and never mutated afterwards.
//!
//! # Example
//! ```
//! use hanzidict_core::han::{is_han, is_han_char};
//!
//! assert!(is_han(0x4E2D)); // 中
//! assert!(is_han_char('國'));
//! assert!(!is_han_char('a'));
//! assert!(!is_han(0x3002)); // 。 ideographic full stop is punctuation
//! ```
use once_cell::sync::Lazy;
use std::ops::Range;

/// Han blocks as half-open `[start, end)` code point ranges, sorted by start.
pub const HAN_RANGES: &[(u32, u32)] = &[
    // CJK RADICAL REPEAT .. CJK RADICAL RAP
    (0x2E80, 0x2E9A),
    // CJK RADICAL CHOKE .. CJK RADICAL C-SIMPLIFIED TURTLE
    (0x2E9B, 0x2EF4),
    // KANGXI RADICAL ONE .. KANGXI RADICAL FLUTE
    (0x2F00, 0x2FD6),
    // IDEOGRAPHIC ITERATION MARK
    (0x3005, 0x3006),
    // IDEOGRAPHIC NUMBER ZERO
    (0x3007, 0x3008),
    // HANGZHOU NUMERAL ONE .. HANGZHOU NUMERAL NINE
    (0x3021, 0x302A),
    // HANGZHOU NUMERAL TEN .. HANGZHOU NUMERAL THIRTY
    (0x3038, 0x303B),
    // VERTICAL IDEOGRAPHIC ITERATION MARK
    (0x303B, 0x303C),
    // CJK UNIFIED IDEOGRAPH-3400 .. CJK UNIFIED IDEOGRAPH-4DB5
    (0x3400, 0x4DB6),
    // CJK UNIFIED IDEOGRAPH-4E00 .. CJK UNIFIED IDEOGRAPH-9FC3
    (0x4E00, 0x9FC4),
    // CJK COMPATIBILITY IDEOGRAPH-F900 .. CJK COMPATIBILITY IDEOGRAPH-FA2D
    (0xF900, 0xFA2E),
    // CJK COMPATIBILITY IDEOGRAPH-FA30 .. CJK COMPATIBILITY IDEOGRAPH-FA6A
    (0xFA30, 0xFA6B),
    // CJK COMPATIBILITY IDEOGRAPH-FA70 .. CJK COMPATIBILITY IDEOGRAPH-FAD9
    (0xFA70, 0xFADA),
    // CJK UNIFIED IDEOGRAPH-20000 .. CJK UNIFIED IDEOGRAPH-2A6D6
    (0x20000, 0x2A6D7),
    // CJK COMPATIBILITY IDEOGRAPH-2F800 .. CJK COMPATIBILITY IDEOGRAPH-2FA1D
    (0x2F800, 0x2FA1E),
];

static GLOBAL: Lazy<HanRangeSet> = Lazy::new(HanRangeSet::new);

/// Immutable set of Han code points, stored as sorted non-overlapping ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanRangeSet {
    ranges: Vec<Range<u32>>,
}

impl HanRangeSet {
    /// Build the set from [`HAN_RANGES`].
    ///
    /// Panics if the literal table is unsorted, overlapping or contains an
    /// empty range; that is a data error, not a runtime condition.
    pub fn new() -> Self {
        let ranges: Vec<Range<u32>> = HAN_RANGES.iter().map(|&(s, e)| s..e).collect();

        for r in &ranges {
            assert!(r.start < r.end, "empty han range {:#X}..{:#X}", r.start, r.end);
        }
        for pair in ranges.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "han ranges out of order or overlapping at {:#X}",
                pair[1].start
            );
        }

        tracing::trace!(ranges = ranges.len(), "built han range set");
        Self { ranges }
    }

    /// The process-wide shared set, built on first access.
    pub fn global() -> &'static HanRangeSet {
        &GLOBAL
    }

    /// Whether `code_point` belongs to one of the Han ranges.
    ///
    /// Total over all `u32` values, including values that are not valid
    /// Unicode scalar values.
    pub fn contains(&self, code_point: u32) -> bool {
        let idx = self.ranges.partition_point(|r| r.start <= code_point);
        idx > 0 && self.ranges[idx - 1].contains(&code_point)
    }

    /// The underlying ranges, in ascending order.
    pub fn ranges(&self) -> &[Range<u32>] {
        &self.ranges
    }

    /// Total number of code points covered by the set.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| (r.end - r.start) as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for HanRangeSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Is `code_point` a Chinese character (or Han radical/mark)?
pub fn is_han(code_point: u32) -> bool {
    HanRangeSet::global().contains(code_point)
}

pub fn is_han_char(ch: char) -> bool {
    is_han(ch as u32)
}

/// True when at least one character of `text` is Han.
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han_char)
}

/// True when `text` has at least one non-whitespace character and every
/// non-whitespace character is Han.
pub fn is_han_text(text: &str) -> bool {
    let mut seen = false;
    for ch in text.chars().filter(|c| !c.is_whitespace()) {
        if !is_han_char(ch) {
            return false;
        }
        seen = true;
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_hanzi_are_han() {
        for ch in ['中', '国', '字', '典', '〇', '々', '⺀', '⼀'] {
            assert!(is_han_char(ch), "{ch} should be han");
        }
    }

    #[test]
    fn non_han_is_rejected() {
        for ch in ['a', 'Z', '1', '。', '，', 'ㄅ', 'あ', 'ア', '한', ' '] {
            assert!(!is_han_char(ch), "{ch} should not be han");
        }
    }

    #[test]
    fn range_boundaries_are_half_open() {
        assert!(is_han(0x4E00));
        assert!(is_han(0x9FC3));
        assert!(!is_han(0x9FC4));
        assert!(!is_han(0x4DFF));
        assert!(!is_han(0x2E9A));
        assert!(is_han(0x2E9B));
        // 0x303B closes one range and is the whole of the next
        assert!(is_han(0x303A));
        assert!(is_han(0x303B));
        assert!(!is_han(0x303C));
    }

    #[test]
    fn total_over_out_of_range_values() {
        assert!(!is_han(0));
        assert!(!is_han(0x110000));
        assert!(!is_han(u32::MAX));
    }

    #[test]
    fn text_helpers() {
        assert!(contains_han("abc中"));
        assert!(!contains_han("zhong1"));
        assert!(is_han_text("中国"));
        assert!(is_han_text(" 中 国 "));
        assert!(!is_han_text("中a"));
        assert!(!is_han_text(""));
        assert!(!is_han_text("   "));
    }

    #[test]
    fn covered_size_matches_table() {
        let expected: usize = HAN_RANGES.iter().map(|&(s, e)| (e - s) as usize).sum();
        assert_eq!(HanRangeSet::global().len(), expected);
        assert!(!HanRangeSet::global().is_empty());
    }
}
