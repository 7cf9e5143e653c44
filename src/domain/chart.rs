use serde::{Deserialize, Serialize};

pub const DEFAULT_HEIGHT: u32 = 500;

pub const DEFAULT_PALETTE: [&str; 9] = [
    "#FF6B3B", "#5B8FF9", "#FFC100", "#61DDAA", "#76523B", "#0E8E89", "#E19348", "#F383A2",
    "#247FEA",
];

/// Declarative chart configuration handed to the charting library along
/// with the dataset. Field names follow the grammar-of-graphics vocabulary
/// (geometry, position, color, adjust).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub container: String,
    pub auto_fit: bool,
    pub height: u32,
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scales: Vec<Scale>,
    pub marks: Vec<Mark>,
    pub tooltip: Tooltip,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interactions: Vec<String>,
    pub legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Coordinate {
    Rect,
    Theta { radius: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default)]
    pub nice: bool,
    /// `true` renders the field, a fraction in `0..=1`, multiplied by 100
    /// with a `%` suffix.
    #[serde(default)]
    pub percent: bool,
}

impl Scale {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            alias: None,
            min: None,
            nice: false,
            percent: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Interval,
    Area,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjust {
    Stack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub geometry: Geometry,
    /// `x*y` pair, or a single field for polar charts.
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorEncoding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjust: Option<Adjust>,
    /// Label template; `{field}` placeholders are filled per datum and
    /// formatted through that field's scale, so a `percent` scale renders
    /// 0.3 as `30%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Mark {
    pub fn new(geometry: Geometry, position: &str) -> Self {
        Self {
            geometry,
            position: position.to_string(),
            color: None,
            adjust: None,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEncoding {
    pub field: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub shared: bool,
    pub show_title: bool,
    pub show_markers: bool,
    pub show_crosshairs: bool,
}
