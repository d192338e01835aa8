use crate::charts::ChartOptions;
use crate::surface::TargetSurface;
use crate::table::TableView;

/// Chart family requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Column,
}

/// One backend submission: what to draw, where, and how.
#[derive(Debug)]
pub struct DrawRequest<'a> {
    pub kind: ChartKind,
    pub surface: &'a TargetSurface,
    pub view: TableView<'a>,
    pub options: ChartOptions,
}
