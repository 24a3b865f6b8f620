//! # Text Corpus Buffer

use crate::matching::HorspoolPattern;

/// Fragment terminator and redaction marker.
///
/// Candidates never contain it, so no match can cross it.
pub const SENTINEL: char = '\0';

/// An append-only (modulo rollback and redaction) text buffer.
///
/// Offsets never escape a mutating call; every method which
/// changes the buffer recomputes positions internally.
#[derive(Debug, Clone, Default)]
pub struct TextCorpus {
    chars: Vec<char>,
}

impl TextCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` followed by a [`SENTINEL`].
    pub fn append(
        &mut self,
        text: &str,
    ) {
        self.chars.extend(text.chars());
        self.chars.push(SENTINEL);
    }

    /// The current length in chars, sentinels included.
    ///
    /// Usable as a checkpoint for [`TextCorpus::rollback`].
    pub fn position(&self) -> usize {
        self.chars.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Truncate back to `position` chars.
    ///
    /// Out of range positions are ignored.
    ///
    /// ## Returns
    /// `true` if the corpus was truncated.
    pub fn rollback(
        &mut self,
        position: usize,
    ) -> bool {
        if position < self.chars.len() {
            self.chars.truncate(position);
            true
        } else {
            false
        }
    }

    /// Drop all text and release the buffer.
    pub fn clear(&mut self) {
        self.chars = Vec::new();
    }

    /// A read-only view of the buffer.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Count matches of `pattern`, overlapping matches included.
    pub fn count_occurrences(
        &self,
        pattern: &HorspoolPattern,
    ) -> usize {
        pattern.count_overlapping(&self.chars)
    }

    /// Replace every match of `pattern` with a single [`SENTINEL`].
    ///
    /// Matches are taken left to right without overlap, exactly as
    /// repeatedly redacting the first match from the start would.
    /// A match cannot contain a sentinel, so resuming after each
    /// redaction never misses or invents a match.
    ///
    /// ## Returns
    /// The number of redacted matches.
    pub fn redact_all(
        &mut self,
        pattern: &HorspoolPattern,
    ) -> usize {
        let Some(first) = pattern.find(&self.chars) else {
            return 0;
        };

        let mut redacted = Vec::with_capacity(self.chars.len());
        let mut count = 0;
        let mut copied = 0;
        let mut next = Some(first);
        while let Some(idx) = next {
            redacted.extend_from_slice(&self.chars[copied..idx]);
            redacted.push(SENTINEL);
            count += 1;

            copied = idx + pattern.len();
            next = pattern.find_from(&self.chars, copied);
        }
        redacted.extend_from_slice(&self.chars[copied..]);

        self.chars = redacted;
        count
    }
}
