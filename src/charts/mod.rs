mod column;
mod options;
mod pie;

pub use column::{ColumnChartRenderer, ColumnStyle};
pub use options::{
    BarOptions, COLUMN_GROUP_WIDTH, ChartOptions, LEGEND_MAX_LINES, LegendOptions, LegendPosition,
    VAxisOptions,
};
pub use pie::PieChartRenderer;
