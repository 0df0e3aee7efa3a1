//! Chart specification handed to the renderer
//!
//! A `ChartSpec` is pure data: everything the chart backend needs to draw one
//! panel — kind, title, category labels, styled series, and axis behavior.
//! Assembly happens in the pipeline; no drawing code lives here.

/// Chart kind for a panel (or a per-series override)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Vertical bars per category
    #[default]
    Bar,
    /// Filled line per series
    Line,
}

/// RGBA color, alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }
}

/// One named, colored, ordered numeric sequence plotted within a panel
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    /// Values in category order; may be empty (blank series still render)
    pub values: Vec<f64>,
    pub border: Rgba,
    pub fill: Rgba,
    /// Fill the area under a line series (bars ignore this)
    pub filled: bool,
    /// Draw this series with a different kind than the panel
    /// (the bankruptcy score is a line over its threshold bars)
    pub kind_override: Option<ChartKind>,
}

impl Series {
    /// The kind this series actually draws with
    pub fn kind(&self, panel_kind: ChartKind) -> ChartKind {
        self.kind_override.unwrap_or(panel_kind)
    }
}

/// Axis behavior flags
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisOptions {
    /// Categories share one slot on the x axis (series overlay in place)
    pub x_stacked: bool,
    /// Force the y axis to start at zero
    pub begin_at_zero: bool,
}

/// Everything needed to render one panel
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Placeholder element id, also the output file stem
    pub panel_id: String,
    pub title: String,
    pub kind: ChartKind,
    /// Shared year labels (category axis)
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub axis: AxisOptions,
}

impl ChartSpec {
    pub fn n_categories(&self) -> usize {
        self.labels.len()
    }
}
