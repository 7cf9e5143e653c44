use crate::domain::chart::{
    Adjust, ChartSpec, ColorEncoding, Coordinate, Geometry, Mark, Scale, Tooltip,
    DEFAULT_HEIGHT, DEFAULT_PALETTE,
};
use crate::domain::model::ChartKind;

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Builds the chart description for `kind`. `palette` only affects charts
/// colored by a categorical field.
pub fn chart_spec(kind: ChartKind, palette: Option<&[String]>) -> ChartSpec {
    let palette = palette.map(<[String]>::to_vec).unwrap_or_else(default_palette);
    match kind {
        ChartKind::YearType => year_type_spec(palette),
        ChartKind::CategoryShare => category_share_spec(palette),
        ChartKind::Cumulative => cumulative_spec(),
    }
}

/// Stacked bars: one column per year, one segment per type.
fn year_type_spec(palette: Vec<String>) -> ChartSpec {
    let mut amount = Scale::new("amount");
    amount.alias = Some("Amount".to_string());

    let mut bars = Mark::new(Geometry::Interval, "year*amount");
    bars.adjust = Some(Adjust::Stack);
    bars.color = Some(ColorEncoding {
        field: "type".to_string(),
        palette,
    });
    bars.label = Some("{amount}".to_string());

    ChartSpec {
        container: "container".to_string(),
        auto_fit: true,
        height: DEFAULT_HEIGHT,
        coordinate: Coordinate::Rect,
        scales: vec![amount],
        marks: vec![bars],
        tooltip: Tooltip {
            shared: true,
            show_title: true,
            ..Default::default()
        },
        interactions: vec![
            "active-region".to_string(),
            "element-highlight-by-color".to_string(),
        ],
        legend: true,
    }
}

/// Pie: a stacked interval in a theta coordinate.
fn category_share_spec(palette: Vec<String>) -> ChartSpec {
    let mut percent = Scale::new("percent");
    percent.percent = true;

    let mut slices = Mark::new(Geometry::Interval, "percent");
    slices.adjust = Some(Adjust::Stack);
    slices.color = Some(ColorEncoding {
        field: "category".to_string(),
        palette,
    });
    slices.label = Some("{category}: {percent}".to_string());

    ChartSpec {
        container: "basic-category".to_string(),
        auto_fit: true,
        height: DEFAULT_HEIGHT,
        coordinate: Coordinate::Theta { radius: 0.75 },
        scales: vec![percent],
        marks: vec![slices],
        tooltip: Tooltip::default(),
        interactions: vec!["element-active".to_string()],
        legend: true,
    }
}

/// Area with an outline over the running total.
fn cumulative_spec() -> ChartSpec {
    let mut value = Scale::new("value");
    value.min = Some(0.0);
    value.nice = true;

    ChartSpec {
        container: "basic-accumulated".to_string(),
        auto_fit: true,
        height: DEFAULT_HEIGHT,
        coordinate: Coordinate::Rect,
        scales: vec![value],
        marks: vec![
            Mark::new(Geometry::Area, "year*value"),
            Mark::new(Geometry::Line, "year*value"),
        ],
        tooltip: Tooltip {
            shared: true,
            show_title: true,
            show_markers: true,
            show_crosshairs: true,
        },
        interactions: Vec::new(),
        legend: false,
    }
}
