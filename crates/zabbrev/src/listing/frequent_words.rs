//! # Frequent Words Writer

use std::{borrow::Cow, io::Write};

use crate::{errors::ZResult, selection::AbbrevResult};

/// The size of the Z-machine abbreviation table.
pub const MAX_ABBREVIATIONS: usize = 96;

const INDENT: &str = "        ";

/// Totals for a written listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// The number of abbreviations written.
    pub count: usize,

    /// Their summed savings, in Z-chars.
    pub total_savings: i64,
}

impl ListingSummary {
    /// Approximate savings in bytes; three Z-chars pack into two bytes.
    pub fn approx_bytes(&self) -> i64 {
        self.total_savings * 2 / 3
    }
}

/// Escape a string literal; `"` becomes `""`.
pub fn escape_string(text: &str) -> Cow<'_, str> {
    if text.contains('"') {
        Cow::Owned(text.replace('"', "\"\""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Write a frequent words file.
///
/// ## Arguments
/// * `writer` - the output.
/// * `source_name` - named in the header comment.
/// * `results` - the abbreviations, in table order.
/// * `table_size` - the number of `WORDS::` entries; unused slots
///   point at an empty dummy string. Results beyond it are dropped.
///
/// ## Returns
/// A summary of what was written.
pub fn write_frequent_words<W, I>(
    writer: &mut W,
    source_name: &str,
    results: I,
    table_size: usize,
) -> ZResult<ListingSummary>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = AbbrevResult>,
{
    writeln!(writer, "{INDENT}; Frequent words file for {source_name}")?;
    writeln!(writer)?;

    let mut summary = ListingSummary::default();
    for result in results.into_iter().take(table_size) {
        summary.count += 1;
        summary.total_savings += result.savings;
        writeln!(
            writer,
            "{INDENT}.FSTR FSTR?{},\"{}\"\t\t; {}x, saved {}",
            summary.count,
            escape_string(&result.text),
            result.count,
            result.savings
        )?;
    }

    if summary.count < table_size {
        writeln!(writer, "{INDENT}.FSTR FSTR?DUMMY,\"\"")?;
    }

    writeln!(writer, "WORDS::")?;
    for idx in 1..=summary.count {
        writeln!(writer, "{INDENT}FSTR?{idx}")?;
    }
    for _ in summary.count..table_size {
        writeln!(writer, "{INDENT}FSTR?DUMMY")?;
    }

    writeln!(writer)?;
    writeln!(writer, "{INDENT}.ENDI")?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        savings: i64,
        count: usize,
        text: &str,
    ) -> AbbrevResult {
        AbbrevResult {
            savings,
            count,
            text: text.into(),
        }
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert!(matches!(escape_string("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_string("say \"hi\""), "say \"\"hi\"\"");
    }

    #[test]
    fn test_write_partial_table() {
        let mut buf: Vec<u8> = Vec::new();
        let summary = write_frequent_words(
            &mut buf,
            "zork.zap",
            vec![result(10, 3, " lantern"), result(4, 2, "\"Hi")],
            4,
        )
        .unwrap();

        assert_eq!(
            summary,
            ListingSummary {
                count: 2,
                total_savings: 14
            }
        );
        assert_eq!(summary.approx_bytes(), 9);

        let expected = [
            "        ; Frequent words file for zork.zap",
            "",
            "        .FSTR FSTR?1,\" lantern\"\t\t; 3x, saved 10",
            "        .FSTR FSTR?2,\"\"\"Hi\"\t\t; 2x, saved 4",
            "        .FSTR FSTR?DUMMY,\"\"",
            "WORDS::",
            "        FSTR?1",
            "        FSTR?2",
            "        FSTR?DUMMY",
            "        FSTR?DUMMY",
            "",
            "        .ENDI",
            "",
        ]
        .join("\n");
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_write_full_table() {
        let mut buf: Vec<u8> = Vec::new();
        let results = (0..5).map(|i| result(10 - i, 2, &format!("word{i}")));
        let summary = write_frequent_words(&mut buf, "full.zap", results, 3).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_savings, 10 + 9 + 8);

        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("DUMMY"));
        assert!(!text.contains("word3"));
        assert!(text.contains("        FSTR?3\n"));
    }
}
