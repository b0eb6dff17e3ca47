//! KEGG pathway passthrough: each data row becomes a header → value map.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Serialize;

use crate::error::Result;
use crate::table::{Table, TableRow};

/// One data row keyed by column name.
///
/// Only columns present in both the header and the row are included.
/// The column set is data-driven, so this stays a dynamic map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathwayRow(BTreeMap<String, String>);

impl PathwayRow {
    pub fn from_row(header: &TableRow, row: &TableRow) -> Self {
        let columns = header
            .fields()
            .iter()
            .zip(row.fields())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self(columns)
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn pathway_rows<R: Read>(reader: R) -> Result<Vec<PathwayRow>> {
    let table = Table::read(reader)?;
    let header = table.header().clone();
    table
        .map(|row| row.map(|row| PathwayRow::from_row(&header, &row)))
        .collect()
}
