//! # Word Finder

use core::ops::Range;

use compact_str::CompactString;

use crate::corpus::SENTINEL;

/// Characters which end a word.
///
/// [`SENTINEL`] is also treated as a delimiter.
pub const WORD_DELIMITERS: &[char] = &[' ', '.', ',', ':', ';', '!', '?', '(', ')', '/'];

/// Does `c` separate words?
#[inline]
pub fn is_word_delimiter(c: char) -> bool {
    c == SENTINEL || WORD_DELIMITERS.contains(&c)
}

/// The char ranges of maximal non-delimiter runs.
pub fn word_spans(chars: &[char]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, &c) in chars.iter().enumerate() {
        match (start, is_word_delimiter(c)) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                spans.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(s..chars.len());
    }
    spans
}

fn join(
    prev: Option<char>,
    word: &[char],
    next: Option<char>,
) -> CompactString {
    prev.into_iter()
        .chain(word.iter().copied())
        .chain(next)
        .collect()
}

/// Find the candidate texts in `text`.
///
/// For each word, yields (in order):
/// * the word;
/// * the preceding char + the word;
/// * the preceding char + the word + the following char;
/// * the word + the following char.
///
/// Variants are skipped when the adjoining char is missing (the word
/// touches either end of `text`) or is the [`SENTINEL`].
/// Duplicates are not removed.
pub fn find_words(text: &str) -> Vec<CompactString> {
    let chars: Vec<char> = text.chars().collect();
    let adjoining = |idx: Option<usize>| {
        idx.and_then(|i| chars.get(i))
            .copied()
            .filter(|&c| c != SENTINEL)
    };

    let mut words = Vec::new();
    for span in word_spans(&chars) {
        let word = &chars[span.clone()];
        let prev = adjoining(span.start.checked_sub(1));
        let next = adjoining(Some(span.end));

        words.push(join(None, word, None));
        if prev.is_some() {
            words.push(join(prev, word, None));
        }
        if prev.is_some() && next.is_some() {
            words.push(join(prev, word, next));
        }
        if next.is_some() {
            words.push(join(None, word, next));
        }
    }
    words
}
