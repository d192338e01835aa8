use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One table cell: a category label or a series value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Text(_) => None,
            Cell::Number(value) => Some(*value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

/// Header-plus-rows table handed to a chart renderer.
///
/// Row 0 of the source data is the header naming columns; data rows hold
/// cells aligned by column index. Column 0 is the category axis by
/// convention, remaining columns are series values.
///
/// Renderers pass datasets through without checking their shape; the backend
/// signals malformed input. Hosts that want early checks call
/// [`TabularDataset::validate`] themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularDataset {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TabularDataset {
    #[must_use]
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, C>(&mut self, row: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    #[must_use]
    pub fn with_row<I, C>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.push_row(row);
        self
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Checks the shape invariant: a non-empty header and one cell per named
    /// column in every row.
    pub fn validate(&self) -> ChartResult<()> {
        if self.header.is_empty() {
            return Err(ChartError::MalformedDataset(
                "header must name at least one column".to_owned(),
            ));
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != self.header.len() {
                return Err(ChartError::MalformedDataset(format!(
                    "row {index} has {} cells, header names {} columns",
                    row.len(),
                    self.header.len()
                )));
            }
        }
        Ok(())
    }
}
