mod recording;
mod request;

pub use recording::{RecordedDraw, RecordingBackend};
pub use request::{ChartKind, DrawRequest};

use crate::error::ChartResult;

/// Contract implemented by any charting-engine backend.
///
/// Backends receive one fully composed draw request per render call and own
/// all layout, drawing, and dataset shape policing. Adapter code never
/// inspects the outcome beyond propagating the error, and a backend must be
/// ready to draw before the first request arrives.
pub trait ChartBackend {
    fn draw(&mut self, request: DrawRequest<'_>) -> ChartResult<()>;
}
