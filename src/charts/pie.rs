use tracing::debug;

use crate::charts::ChartOptions;
use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartKind, DrawRequest};
use crate::surface::SurfaceRegistry;
use crate::table::{TableView, TabularDataset};

/// Draws labeled share tables as pie charts.
///
/// The chart background is read from the target surface at call time, so the
/// chart blends with however the page styles that container.
#[derive(Debug)]
pub struct PieChartRenderer<B: ChartBackend> {
    backend: B,
}

impl<B: ChartBackend> PieChartRenderer<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Renders `dataset` as a pie chart into the surface named `surface_id`.
    ///
    /// A meaningful pie needs exactly a label column and a value column; the
    /// dataset is passed through unvalidated and anything else is the
    /// backend's to accept or reject. Rendering the same arguments again
    /// fully redraws the surface with identical options.
    pub fn render(
        &mut self,
        surfaces: &dyn SurfaceRegistry,
        surface_id: &str,
        dataset: &TabularDataset,
        title: &str,
    ) -> ChartResult<()> {
        let surface = surfaces.lookup(surface_id)?;
        let options = ChartOptions::pie(title, surface.background_color());
        debug!(
            surface = surface_id,
            title,
            rows = dataset.row_count(),
            "drawing pie chart"
        );
        self.backend.draw(DrawRequest {
            kind: ChartKind::Pie,
            surface,
            view: TableView::all(dataset),
            options,
        })
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the renderer and hands the backend back, e.g. to inspect a
    /// recording backend after a test run.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
