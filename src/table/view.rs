use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::table::{Cell, TabularDataset};

/// Column-selecting view over a [`TabularDataset`].
///
/// Backends draw what the view exposes: the selected columns in selection
/// order, every row. [`TableView::all`] is the common case; [`TableView::select`]
/// narrows a wider table to the columns one chart needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    table: &'a TabularDataset,
    columns: SmallVec<[usize; 8]>,
}

impl<'a> TableView<'a> {
    #[must_use]
    pub fn all(table: &'a TabularDataset) -> Self {
        Self {
            table,
            columns: (0..table.column_count()).collect(),
        }
    }

    #[must_use]
    pub fn select<I>(table: &'a TabularDataset, columns: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            table,
            columns: columns.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &TabularDataset {
        self.table
    }

    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Checks the underlying table shape and that every selected column
    /// exists. Called on the backend side, not by renderers.
    pub fn validate(&self) -> ChartResult<()> {
        self.table.validate()?;
        for &column in &self.columns {
            if column >= self.table.column_count() {
                return Err(ChartError::MalformedDataset(format!(
                    "view selects column {column}, table has {} columns",
                    self.table.column_count()
                )));
            }
        }
        Ok(())
    }

    /// Header labels of the selected columns, in selection order.
    #[must_use]
    pub fn selected_header(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|&column| self.table.header().get(column).cloned())
            .collect()
    }

    /// Data rows narrowed to the selected columns, in selection order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<Vec<Cell>> {
        self.table
            .rows()
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .filter_map(|&column| row.get(column).cloned())
                    .collect()
            })
            .collect()
    }
}
