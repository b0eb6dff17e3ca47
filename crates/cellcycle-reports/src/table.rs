//! Line-oriented table parser.
//!
//! Each line of a resource is one [`TableRow`], split on the tab character.
//! Fields are kept as text; callers decide how to interpret them.
//! Quote characters carry no meaning and rows may differ in width.
//! Bytes that are not valid UTF-8 decode to U+FFFD.

use std::io::{BufRead, BufReader, Read};

use crate::error::Result;

/// One line of a tab-delimited resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    fields: Vec<String>,
}

impl TableRow {
    /// Build a row from split fields. Trailing empty fields are dropped,
    /// so `"TP53\t"` is a one-column row.
    pub fn new(mut fields: Vec<String>) -> Self {
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        Self { fields }
    }

    /// Split one line (without its terminator) on tabs.
    ///
    /// An empty line is a single empty field, not an empty row.
    pub fn parse(line: &str) -> Self {
        if line.is_empty() {
            return Self {
                fields: vec![String::new()],
            };
        }
        Self::new(line.split('\t').map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Lazy iterator over every row of a resource, header included.
///
/// The underlying reader is owned by the iterator and released when it is
/// dropped, whether or not the rows were read to the end.
pub struct TableReader<R> {
    reader: BufReader<R>,
    line: Vec<u8>,
}

impl<R: Read> TableReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line: Vec::new(),
        }
    }
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = Result<TableRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = self.line.as_slice();
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest;
                }
                if let Some(rest) = line.strip_suffix(b"\r") {
                    line = rest;
                }
                Some(Ok(TableRow::parse(&String::from_utf8_lossy(line))))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// A resource split into its header and a lazy sequence of data rows.
pub struct Table<R> {
    header: TableRow,
    rows: TableReader<R>,
}

impl<R: Read> Table<R> {
    /// Read the header (the first line) and position the reader on the
    /// first data row. An empty resource yields an empty header and no rows.
    pub fn read(reader: R) -> Result<Self> {
        let mut rows = TableReader::new(reader);
        let header = rows.next().transpose()?.unwrap_or_default();
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &TableRow {
        &self.header
    }
}

impl<R: Read> Iterator for Table<R> {
    type Item = Result<TableRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::ReportError;

    fn rows(input: &str) -> Vec<TableRow> {
        TableReader::new(input.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_splits_on_tabs_only() {
        let parsed = rows("a b\tc,d\te\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].fields(), &["a b", "c,d", "e"]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let parsed = rows("A\tB\tC\nx\ty\nx\ty\tz\tw\n");
        let widths: Vec<usize> = parsed.iter().map(TableRow::len).collect();
        assert_eq!(widths, vec![3, 2, 4]);
    }

    #[test]
    fn test_trailing_empty_fields_dropped() {
        let parsed = rows("TP53\t\n\tApoptosis\n\t\n");
        assert_eq!(parsed[0].fields(), &["TP53"]);
        // Leading empties are data
        assert_eq!(parsed[1].fields(), &["", "Apoptosis"]);
        assert!(parsed[2].is_empty());
    }

    #[test]
    fn test_quotes_are_literal() {
        let parsed = rows("\"hsa04110\"\tCell \"cycle\"\n");
        assert_eq!(parsed[0].get(0), Some("\"hsa04110\""));
        assert_eq!(parsed[0].get(1), Some("Cell \"cycle\""));
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = rows("gene\thallmark\r\nTP53\tApoptosis\r\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].get(1), Some("Apoptosis"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let parsed = rows("A\tB\nx\ty");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].get(1), Some("y"));
    }

    #[test]
    fn test_blank_line_is_one_empty_field() {
        let parsed = rows("A\tB\n\nx\ty\n");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].fields(), &[""]);
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let mut table = Table::read("\nA\tB\n".as_bytes()).unwrap();
        assert_eq!(table.header().fields(), &[""]);
        assert_eq!(table.next().unwrap().unwrap().fields(), &["A", "B"]);
    }

    #[test]
    fn test_table_reads_header_once() {
        let mut table = Table::read("name\tvalue\nmiR-21\t42\n".as_bytes()).unwrap();
        assert_eq!(table.header().fields(), &["name", "value"]);
        let first = table.next().unwrap().unwrap();
        assert_eq!(first.get(0), Some("miR-21"));
        assert!(table.next().is_none());
    }

    #[test]
    fn test_empty_resource() {
        let mut table = Table::read("".as_bytes()).unwrap();
        assert!(table.header().is_empty());
        assert!(table.next().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"gene\thallmark\nCDK1\tCaf\xe9\nTP53\tApoptosis\n";
        let parsed: Vec<TableRow> = TableReader::new(bytes)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].get(1), Some("Caf\u{FFFD}"));
        assert_eq!(parsed[2].get(0), Some("TP53"));
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("device gone"));
            }
            self.served = true;
            let head = b"gene\thallmark\n";
            buf[..head.len()].copy_from_slice(head);
            Ok(head.len())
        }
    }

    #[test]
    fn test_read_error_surfaces_as_io() {
        let mut table = Table::read(FailingReader { served: false }).unwrap();
        assert_eq!(table.header().fields(), &["gene", "hallmark"]);
        assert!(matches!(table.next(), Some(Err(ReportError::Io(_)))));
    }
}
