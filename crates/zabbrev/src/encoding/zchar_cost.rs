//! # Z-Char Cost Model

use crate::{
    encoding::TextCostModel,
    errors::{ZAbbrevError, ZResult},
};

/// The number of characters in a Z-machine alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Default alphabet 2; the first two slots are the escape and newline codes.
const DEFAULT_A2: &str = "0123456789.,!?_#'\"/\\-:()";

/// Cost of a space (Z-char 0).
const SPACE_COST: usize = 1;

/// Cost of a newline (shift to A2, then code 7).
const NEWLINE_COST: usize = 2;

/// Cost of an A0 character.
const A0_COST: usize = 1;

/// Cost of an A1 or A2 character (shift, then code).
const SHIFTED_COST: usize = 2;

/// Cost of any other character (shift, ZSCII escape, two 5-bit halves).
const ESCAPED_COST: usize = 4;

/// The three Z-machine alphabets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZAlphabets {
    alphabets: [Vec<char>; 3],
}

impl Default for ZAlphabets {
    fn default() -> Self {
        Self {
            alphabets: [
                ('a'..='z').collect(),
                ('A'..='Z').collect(),
                DEFAULT_A2.chars().collect(),
            ],
        }
    }
}

impl ZAlphabets {
    /// Replace one alphabet.
    ///
    /// Short alphabets are padded on the left with spaces to
    /// [`ALPHABET_SIZE`]; alphabet 2 then loses its first two slots,
    /// which are taken by the escape and newline codes.
    ///
    /// ## Arguments
    /// * `index` - the alphabet number, `0..=2`.
    /// * `chars` - up to 26 characters.
    pub fn with_alphabet<S: AsRef<str>>(
        self,
        index: usize,
        chars: S,
    ) -> ZResult<Self> {
        if index > 2 {
            return Err(ZAbbrevError::AlphabetIndex { index });
        }

        let chars: Vec<char> = chars.as_ref().chars().collect();
        if chars.len() > ALPHABET_SIZE {
            return Err(ZAbbrevError::AlphabetTooLong {
                index,
                len: chars.len(),
            });
        }

        let mut alphabet = vec![' '; ALPHABET_SIZE - chars.len()];
        alphabet.extend(chars);
        if index == 2 {
            alphabet = alphabet.split_off(2);
        }

        let mut alphabets = self.alphabets;
        alphabets[index] = alphabet;
        Ok(Self { alphabets })
    }

    /// The characters of alphabet `index`, if it exists.
    pub fn alphabet(
        &self,
        index: usize,
    ) -> Option<&[char]> {
        self.alphabets.get(index).map(Vec::as_slice)
    }

    /// The alphabet holding `c`, searched in order.
    pub fn alphabet_of(
        &self,
        c: char,
    ) -> Option<usize> {
        self.alphabets.iter().position(|a| a.contains(&c))
    }
}

/// Z-char cost of text encoded without abbreviations.
#[derive(Debug, Clone, Default)]
pub struct ZCharCostModel {
    alphabets: ZAlphabets,
}

impl ZCharCostModel {
    /// Build a cost model over custom alphabets.
    pub fn new(alphabets: ZAlphabets) -> Self {
        Self { alphabets }
    }

    /// The alphabets in use.
    pub fn alphabets(&self) -> &ZAlphabets {
        &self.alphabets
    }

    /// The Z-char cost of one character.
    pub fn char_cost(
        &self,
        c: char,
    ) -> usize {
        match c {
            ' ' => SPACE_COST,
            '\n' => NEWLINE_COST,
            _ => match self.alphabets.alphabet_of(c) {
                Some(0) => A0_COST,
                Some(_) => SHIFTED_COST,
                None => ESCAPED_COST,
            },
        }
    }
}

impl TextCostModel for ZCharCostModel {
    fn cost_in_units(
        &self,
        text: &str,
    ) -> usize {
        text.chars().map(|c| self.char_cost(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::unit_savings;

    #[test]
    fn test_default_costs() {
        let model = ZCharCostModel::default();

        assert_eq!(model.cost_in_units(""), 0);
        assert_eq!(model.cost_in_units("the"), 3);
        assert_eq!(model.cost_in_units(" the "), 5);
        assert_eq!(model.cost_in_units("The"), 4);
        assert_eq!(model.cost_in_units("42."), 6);
        assert_eq!(model.cost_in_units("a\nb"), 4);
        assert_eq!(model.cost_in_units("caf\u{e9}"), 7);
        assert_eq!(model.cost_in_units("[x]"), 9);
    }

    #[test]
    fn test_unit_savings() {
        let model = ZCharCostModel::default();
        assert_eq!(unit_savings(&model, "an"), 0);
        assert_eq!(unit_savings(&model, "the"), 1);
        assert_eq!(unit_savings(&model, "The "), 3);
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabets = ZAlphabets::default()
            .with_alphabet(0, "etaoinshrdlucmfwypvbgkqjxz")
            .unwrap()
            .with_alphabet(2, "[]")
            .unwrap();

        assert_eq!(alphabets.alphabet(0).unwrap().len(), ALPHABET_SIZE);
        assert_eq!(alphabets.alphabet(2).unwrap().len(), ALPHABET_SIZE - 2);
        assert_eq!(alphabets.alphabet_of('['), Some(2));
        assert_eq!(alphabets.alphabet_of('0'), None);
        assert_eq!(alphabets.alphabet_of('Q'), Some(1));
        assert_eq!(alphabets.alphabet(3), None);

        let model = ZCharCostModel::new(alphabets);
        assert_eq!(model.cost_in_units("[x]"), 5);
        assert_eq!(model.cost_in_units("0"), 4);
    }

    #[test]
    fn test_alphabet_errors() {
        assert!(matches!(
            ZAlphabets::default().with_alphabet(3, "abc"),
            Err(ZAbbrevError::AlphabetIndex { index: 3 })
        ));
        assert!(matches!(
            ZAlphabets::default().with_alphabet(1, "ABCDEFGHIJKLMNOPQRSTUVWXYZ!"),
            Err(ZAbbrevError::AlphabetTooLong { index: 1, len: 27 })
        ));
    }
}
