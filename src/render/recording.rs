use crate::charts::ChartOptions;
use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartKind, DrawRequest};
use crate::table::Cell;

/// Owned snapshot of one draw request, as the engine would have seen it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub kind: ChartKind,
    pub surface_id: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub options: ChartOptions,
}

/// Headless backend for tests and hosts without a charting engine.
///
/// It still validates the table view, so a ragged dataset or an out-of-range
/// column selection fails here the way a real engine would reject it.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    draws: Vec<RecordedDraw>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    #[must_use]
    pub fn last_draw(&self) -> Option<&RecordedDraw> {
        self.draws.last()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl ChartBackend for RecordingBackend {
    fn draw(&mut self, request: DrawRequest<'_>) -> ChartResult<()> {
        request.view.validate()?;
        self.draws.push(RecordedDraw {
            kind: request.kind,
            surface_id: request.surface.id().to_owned(),
            header: request.view.selected_header(),
            rows: request.view.selected_rows(),
            options: request.options,
        });
        Ok(())
    }
}
