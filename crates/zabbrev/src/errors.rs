//! # Error Types

/// Errors from zabbrev operations.
///
/// The selection loop itself never fails; these come from
/// construction helpers and listing output.
#[derive(Debug, thiserror::Error)]
pub enum ZAbbrevError {
    /// A search pattern must contain at least one character.
    #[error("search pattern is empty")]
    EmptyPattern,

    /// Z-machine alphabets are numbered 0, 1 and 2.
    #[error("alphabet index ({index}) must be 0, 1 or 2")]
    AlphabetIndex {
        /// The rejected alphabet index.
        index: usize,
    },

    /// A Z-machine alphabet holds at most 26 characters.
    #[error("alphabet {index} has {len} characters; at most 26 are allowed")]
    AlphabetTooLong {
        /// The alphabet index.
        index: usize,

        /// The number of characters supplied.
        len: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for zabbrev operations.
pub type ZResult<T> = core::result::Result<T, ZAbbrevError>;
