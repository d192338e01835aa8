use statboard::ChartError;
use statboard::table::{Cell, TableView, TabularDataset};

fn totals_table() -> TabularDataset {
    TabularDataset::new(["Media type", "Posts", "Size (MB)"])
        .with_row([Cell::from("Image"), Cell::from(12), Cell::from(34.5)])
        .with_row([Cell::from("Video"), Cell::from(3), Cell::from(120.0)])
}

#[test]
fn integer_cells_are_stored_as_numbers() {
    let table = totals_table();

    assert_eq!(table.rows()[0][0].as_text(), Some("Image"));
    assert_eq!(table.rows()[0][1].as_number(), Some(12.0));
    assert_eq!(table.rows()[0][0].as_number(), None);
    assert_eq!(table.rows()[0][1].as_text(), None);
}

#[test]
fn all_view_exposes_every_column() {
    let table = totals_table();
    let view = TableView::all(&table);

    view.validate().expect("valid view");
    assert_eq!(view.columns(), &[0, 1, 2]);
    assert_eq!(view.selected_header(), table.header().to_vec());
    assert_eq!(view.selected_rows(), table.rows().to_vec());
}

#[test]
fn select_narrows_and_reorders_columns() {
    let table = totals_table();
    let view = TableView::select(&table, [0, 2]);

    view.validate().expect("valid selection");
    assert_eq!(
        view.selected_header(),
        vec!["Media type".to_owned(), "Size (MB)".to_owned()]
    );
    assert_eq!(
        view.selected_rows()[1],
        vec![Cell::from("Video"), Cell::from(120.0)]
    );
}

#[test]
fn out_of_range_selection_fails_validation() {
    let table = totals_table();
    let view = TableView::select(&table, [0, 3]);

    let err = view.validate().expect_err("column 3 does not exist");
    assert!(matches!(err, ChartError::MalformedDataset(_)));
}

#[test]
fn ragged_rows_fail_validation() {
    let mut table = TabularDataset::new(["Media type", "Posts"]);
    table.push_row([Cell::from("Image"), Cell::from(1.0)]);
    table.push_row([Cell::from("Video")]);

    let err = table.validate().expect_err("row 1 is short");
    assert!(matches!(err, ChartError::MalformedDataset(_)));
    let err = TableView::all(&table)
        .validate()
        .expect_err("view sees the same shape");
    assert!(matches!(err, ChartError::MalformedDataset(_)));
}

#[test]
fn empty_header_fails_validation() {
    let table = TabularDataset::new(Vec::<String>::new());

    let err = table.validate().expect_err("no columns named");
    assert!(matches!(err, ChartError::MalformedDataset(_)));
}
