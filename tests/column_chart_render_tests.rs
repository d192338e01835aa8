use statboard::charts::{
    BarOptions, COLUMN_GROUP_WIDTH, LegendOptions, LegendPosition, VAxisOptions,
};
use statboard::render::{ChartKind, RecordingBackend};
use statboard::surface::{InMemorySurfaceRegistry, TargetSurface};
use statboard::table::{Cell, TabularDataset};
use statboard::{ColumnChartRenderer, ColumnStyle};

fn week_registry() -> InMemorySurfaceRegistry {
    InMemorySurfaceRegistry::new().with_surface(TargetSurface::new("week_column", "#ffffff"))
}

fn visits_dataset() -> TabularDataset {
    TabularDataset::new(["Day", "Visits", "Signups"]).with_row([
        Cell::from("Mon"),
        Cell::from(100.0),
        Cell::from(10.0),
    ])
}

#[test]
fn column_chart_with_legend_and_stacking_composes_full_option_set() {
    let surfaces = week_registry();
    let mut renderer = ColumnChartRenderer::new(RecordingBackend::new());

    renderer
        .render_styled(
            &surfaces,
            "week_column",
            &visits_dataset(),
            "Weekly traffic",
            ColumnStyle::default().with_legend().stacked(),
        )
        .expect("render column");

    let backend = renderer.into_backend();
    let draw = backend.last_draw().expect("recorded draw");
    assert_eq!(draw.kind, ChartKind::Column);
    assert_eq!(draw.options.title, "Weekly traffic");
    assert_eq!(draw.options.background_color, None);
    assert_eq!(
        draw.options.legend,
        Some(LegendOptions {
            position: LegendPosition::Top,
            max_lines: Some(3),
        })
    );
    assert_eq!(draw.options.v_axis, Some(VAxisOptions { min_value: 0.0 }));
    assert_eq!(
        draw.options.bar,
        Some(BarOptions {
            group_width: COLUMN_GROUP_WIDTH.to_owned(),
        })
    );
    assert_eq!(draw.options.is_stacked, Some(true));
}

#[test]
fn column_chart_defaults_hide_legend_and_disable_stacking() {
    let surfaces = week_registry();
    let mut renderer = ColumnChartRenderer::new(RecordingBackend::new());

    renderer
        .render(&surfaces, "week_column", &visits_dataset(), "Weekly traffic")
        .expect("render column");

    let backend = renderer.into_backend();
    let draw = backend.last_draw().expect("recorded draw");
    assert_eq!(
        draw.options.legend,
        Some(LegendOptions {
            position: LegendPosition::None,
            max_lines: None,
        })
    );
    assert_eq!(draw.options.v_axis, Some(VAxisOptions { min_value: 0.0 }));
    assert_eq!(draw.options.is_stacked, Some(false));
}

#[test]
fn column_chart_stacking_alone_keeps_legend_hidden() {
    let surfaces = week_registry();
    let mut renderer = ColumnChartRenderer::new(RecordingBackend::new());

    renderer
        .render_styled(
            &surfaces,
            "week_column",
            &visits_dataset(),
            "Weekly traffic",
            ColumnStyle::default().stacked(),
        )
        .expect("render column");

    let backend = renderer.into_backend();
    let draw = backend.last_draw().expect("recorded draw");
    assert_eq!(
        draw.options.legend.map(|legend| legend.position),
        Some(LegendPosition::None)
    );
    assert_eq!(draw.options.is_stacked, Some(true));
}

#[test]
fn column_chart_axis_stays_pinned_to_zero_for_negative_data() {
    let surfaces = week_registry();
    let dataset = TabularDataset::new(["Day", "Net change"])
        .with_row([Cell::from("Mon"), Cell::from(-12.0)])
        .with_row([Cell::from("Tue"), Cell::from(4.0)]);
    let mut renderer = ColumnChartRenderer::new(RecordingBackend::new());

    renderer
        .render(&surfaces, "week_column", &dataset, "Net change")
        .expect("render column");

    let backend = renderer.into_backend();
    let draw = backend.last_draw().expect("recorded draw");
    assert_eq!(draw.options.v_axis, Some(VAxisOptions { min_value: 0.0 }));
}

#[test]
fn column_chart_draws_view_over_all_columns() {
    let surfaces = week_registry();
    let mut renderer = ColumnChartRenderer::new(RecordingBackend::new());

    renderer
        .render(&surfaces, "week_column", &visits_dataset(), "Weekly traffic")
        .expect("render column");

    let backend = renderer.into_backend();
    let draw = backend.last_draw().expect("recorded draw");
    assert_eq!(
        draw.header,
        vec!["Day".to_owned(), "Visits".to_owned(), "Signups".to_owned()]
    );
    assert_eq!(
        draw.rows,
        vec![vec![
            Cell::from("Mon"),
            Cell::from(100.0),
            Cell::from(10.0)
        ]]
    );
}

#[test]
fn column_chart_render_is_idempotent() {
    let surfaces = week_registry();
    let dataset = visits_dataset();
    let style = ColumnStyle::default().with_legend();
    let mut renderer = ColumnChartRenderer::new(RecordingBackend::new());

    renderer
        .render_styled(&surfaces, "week_column", &dataset, "Weekly traffic", style)
        .expect("first render");
    renderer
        .render_styled(&surfaces, "week_column", &dataset, "Weekly traffic", style)
        .expect("second render");

    let backend = renderer.into_backend();
    let draws = backend.draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].options, draws[1].options);
    assert_eq!(draws[0], draws[1]);
}
