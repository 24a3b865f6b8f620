//! # Boyer-Moore-Horspool Pattern

use compact_str::CompactString;

use crate::{
    errors::{ZAbbrevError, ZResult},
    types::ZHashMap,
};

/// Chars below this bound use the dense skip table.
const DENSE_CHARS: usize = 256;

/// Bad-character shift table.
///
/// Latin-1 chars are looked up in a dense array; everything else
/// falls back to a sparse map, which is empty for most patterns.
#[derive(Debug, Clone)]
struct SkipTable {
    dense: [usize; DENSE_CHARS],
    sparse: ZHashMap<char, usize>,
    default: usize,
}

impl SkipTable {
    fn new(default: usize) -> Self {
        Self {
            dense: [default; DENSE_CHARS],
            sparse: ZHashMap::new(),
            default,
        }
    }

    fn set(
        &mut self,
        c: char,
        skip: usize,
    ) {
        match self.dense.get_mut(c as usize) {
            Some(slot) => *slot = skip,
            None => {
                self.sparse.insert(c, skip);
            }
        }
    }

    #[inline]
    fn get(
        &self,
        c: char,
    ) -> usize {
        match self.dense.get(c as usize) {
            Some(&skip) => skip,
            None => *self.sparse.get(&c).unwrap_or(&self.default),
        }
    }
}

/// A prepared substring search pattern.
///
/// Built once per pattern in `O(m)`; each [`HorspoolPattern::find_from`]
/// scan is sub-linear on typical text and `O(n * m)` in the worst case.
#[derive(Debug, Clone)]
pub struct HorspoolPattern {
    text: CompactString,
    needle: Vec<char>,
    skip: SkipTable,
}

impl HorspoolPattern {
    /// Prepare a pattern.
    ///
    /// ## Arguments
    /// * `text` - the text to search for; must be non-empty.
    ///
    /// ## Returns
    /// The pattern, or [`ZAbbrevError::EmptyPattern`].
    pub fn new<S: AsRef<str>>(text: S) -> ZResult<Self> {
        let text = text.as_ref();
        let needle: Vec<char> = text.chars().collect();
        if needle.is_empty() {
            return Err(ZAbbrevError::EmptyPattern);
        }

        let last = needle.len() - 1;
        let mut skip = SkipTable::new(needle.len());
        for (i, &c) in needle[..last].iter().enumerate() {
            skip.set(c, last - i);
        }

        Ok(Self {
            text: text.into(),
            needle,
            skip,
        })
    }

    /// The pattern text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The pattern length, in chars.
    pub fn len(&self) -> usize {
        self.needle.len()
    }

    /// Always false; empty patterns are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Find the lowest match position `>= start`.
    ///
    /// Resuming at `previous + 1` enumerates overlapping matches.
    pub fn find_from(
        &self,
        haystack: &[char],
        start: usize,
    ) -> Option<usize> {
        let nlen = self.needle.len();
        let last = nlen - 1;

        let mut pos = start;
        while pos <= haystack.len().checked_sub(nlen)? {
            let window = &haystack[pos..pos + nlen];
            if window.iter().rev().eq(self.needle.iter().rev()) {
                return Some(pos);
            }
            pos += self.skip.get(window[last]);
        }

        None
    }

    /// Find the first match in `haystack`.
    pub fn find(
        &self,
        haystack: &[char],
    ) -> Option<usize> {
        self.find_from(haystack, 0)
    }

    /// Count all matches, including overlapping ones.
    pub fn count_overlapping(
        &self,
        haystack: &[char],
    ) -> usize {
        let mut count = 0;
        let mut start = 0;
        while let Some(idx) = self.find_from(haystack, start) {
            count += 1;
            start = idx + 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_pattern() {
        assert!(matches!(
            HorspoolPattern::new(""),
            Err(ZAbbrevError::EmptyPattern)
        ));
    }

    #[test]
    fn test_accessors() {
        let pattern = HorspoolPattern::new("the ").unwrap();
        assert_eq!(pattern.text(), "the ");
        assert_eq!(pattern.len(), 4);
        assert!(!pattern.is_empty());
    }

    #[test]
    fn test_find_from() {
        let haystack = chars("the cat and the hat");
        let pattern = HorspoolPattern::new("the").unwrap();

        assert_eq!(pattern.find(&haystack), Some(0));
        assert_eq!(pattern.find_from(&haystack, 1), Some(12));
        assert_eq!(pattern.find_from(&haystack, 12), Some(12));
        assert_eq!(pattern.find_from(&haystack, 13), None);
        assert_eq!(pattern.find_from(&haystack, 100), None);

        let pattern = HorspoolPattern::new("hat").unwrap();
        assert_eq!(pattern.find(&haystack), Some(16));

        let pattern = HorspoolPattern::new("dog").unwrap();
        assert_eq!(pattern.find(&haystack), None);
    }

    #[test]
    fn test_pattern_longer_than_haystack() {
        let pattern = HorspoolPattern::new("abcdef").unwrap();
        assert_eq!(pattern.find(&chars("abc")), None);
        assert_eq!(pattern.find(&[]), None);
    }

    #[test]
    fn test_overlapping_count() {
        let pattern = HorspoolPattern::new("aa").unwrap();
        assert_eq!(pattern.find_from(&chars("aaa"), 0), Some(0));
        assert_eq!(pattern.find_from(&chars("aaa"), 1), Some(1));
        assert_eq!(pattern.count_overlapping(&chars("aaa")), 2);
        assert_eq!(pattern.count_overlapping(&chars("aaaa")), 3);
    }

    #[test]
    fn test_sentinel_blocks_match() {
        let pattern = HorspoolPattern::new("ab").unwrap();
        assert_eq!(pattern.count_overlapping(&chars("a\0b")), 0);
        assert_eq!(pattern.count_overlapping(&chars("ab\0ab")), 2);
    }

    #[test]
    fn test_wide_chars() {
        let haystack = chars("caf\u{e9} na\u{ef}ve \u{4f60}\u{597d} \u{4f60}\u{597d}");
        let pattern = HorspoolPattern::new("\u{4f60}\u{597d}").unwrap();
        assert_eq!(pattern.find(&haystack), Some(11));
        assert_eq!(pattern.count_overlapping(&haystack), 2);

        let pattern = HorspoolPattern::new("na\u{ef}ve").unwrap();
        assert_eq!(pattern.find(&haystack), Some(5));
    }
}
