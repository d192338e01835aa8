use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartOptions;
use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartKind, DrawRequest};
use crate::surface::SurfaceRegistry;
use crate::table::{TableView, TabularDataset};

/// Legend and stacking switches for one column-chart render.
///
/// Both default to off, matching a plain single-series chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnStyle {
    pub show_legend: bool,
    pub stacked: bool,
}

impl ColumnStyle {
    #[must_use]
    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }
}

/// Draws multi-series tables as vertical bar charts.
#[derive(Debug)]
pub struct ColumnChartRenderer<B: ChartBackend> {
    backend: B,
}

impl<B: ChartBackend> ColumnChartRenderer<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Renders with the default style: legend hidden, bars unstacked.
    pub fn render(
        &mut self,
        surfaces: &dyn SurfaceRegistry,
        surface_id: &str,
        dataset: &TabularDataset,
        title: &str,
    ) -> ChartResult<()> {
        self.render_styled(surfaces, surface_id, dataset, title, ColumnStyle::default())
    }

    /// Renders `dataset` as a column chart into the surface named
    /// `surface_id`, drawing a view over the full dataset (all columns, one
    /// series per value column).
    pub fn render_styled(
        &mut self,
        surfaces: &dyn SurfaceRegistry,
        surface_id: &str,
        dataset: &TabularDataset,
        title: &str,
        style: ColumnStyle,
    ) -> ChartResult<()> {
        let surface = surfaces.lookup(surface_id)?;
        let options = ChartOptions::column(title, style.show_legend, style.stacked);
        debug!(
            surface = surface_id,
            title,
            show_legend = style.show_legend,
            stacked = style.stacked,
            rows = dataset.row_count(),
            "drawing column chart"
        );
        self.backend.draw(DrawRequest {
            kind: ChartKind::Column,
            surface,
            view: TableView::all(dataset),
            options,
        })
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the renderer and hands the backend back.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
