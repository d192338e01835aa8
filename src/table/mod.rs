mod dataset;
mod view;

pub use dataset::{Cell, TabularDataset};
pub use view::TableView;
