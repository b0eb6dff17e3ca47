//! Name → count extraction for the miRNA word cloud.

use std::io::Read;

use serde::Serialize;

use crate::error::Result;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub name: String,
    pub value: i32,
}

/// Parse a count column. Anything that is not a base-10 `i32` counts as zero.
pub fn parse_count(text: &str) -> i32 {
    text.parse().unwrap_or(0)
}

/// Extract one entry per row with at least two columns, in file order.
/// The first line is a header and is ignored.
pub fn extract_frequencies<R: Read>(reader: R) -> Result<Vec<FrequencyEntry>> {
    let table = Table::read(reader)?;
    let mut entries = Vec::new();
    for row in table {
        let row = row?;
        if let [name, count, ..] = row.fields() {
            entries.push(FrequencyEntry {
                name: name.clone(),
                value: parse_count(count),
            });
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_count_is_zero() {
        let input = "name\tvalue\nmiR-21\t42\nmiR-9\tabc\n";
        let entries = extract_frequencies(input.as_bytes()).unwrap();
        assert_eq!(
            entries,
            vec![
                FrequencyEntry { name: "miR-21".into(), value: 42 },
                FrequencyEntry { name: "miR-9".into(), value: 0 },
            ]
        );
    }

    #[test]
    fn test_parse_count_edges() {
        assert_eq!(parse_count("+7"), 7);
        assert_eq!(parse_count("-3"), -3);
        assert_eq!(parse_count(" 5"), 0);
        assert_eq!(parse_count("4.5"), 0);
        assert_eq!(parse_count(""), 0);
        // Out of i32 range
        assert_eq!(parse_count("99999999999"), 0);
    }

    #[test]
    fn test_short_rows_skipped() {
        let input = "name\tvalue\nlonely\nmiR-155\t3\textra\n";
        let entries = extract_frequencies(input.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "miR-155");
        assert_eq!(entries[0].value, 3);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(extract_frequencies("name\tvalue\n".as_bytes()).unwrap().is_empty());
    }
}
