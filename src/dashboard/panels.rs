//! Static panel registry
//!
//! One authoritative table drives the whole dashboard: each entry names a
//! placeholder element, the attributes its series come from, and the fixed
//! presentation metadata (title, colors, chart kind, axis flags). The
//! pipeline iterates this table once instead of repeating a construction
//! block per panel.
//!
//! Series may source their values from another panel's element — several
//! panels re-plot a sequence that canonically lives elsewhere (the equity
//! panel re-plots total debt, the agility panel re-plots the instant ratio,
//! the price panel re-plots the direct wage, the profit panel re-plots net
//! sale). The bankruptcy panel additionally plots three synthetic constant
//! bands from the risk-threshold generator.

use super::risk::RiskLevel;
use super::spec::{ChartKind, Rgba};

/// Where a series gets its values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesSource {
    /// A JSON-array attribute on a placeholder element
    Attribute {
        element: &'static str,
        name: &'static str,
    },
    /// A constant risk band sized to the year axis
    RiskThreshold(RiskLevel),
}

/// One series within a panel definition
#[derive(Debug, Clone, Copy)]
pub struct SeriesDef {
    pub label: &'static str,
    pub source: SeriesSource,
    pub border: Rgba,
    pub fill: Rgba,
    /// Fill the area under a line series
    pub filled: bool,
    /// Draw with a different kind than the panel (score line over bars)
    pub kind_override: Option<ChartKind>,
}

/// One dashboard panel: a placeholder element plus its chart definition
#[derive(Debug, Clone, Copy)]
pub struct PanelDef {
    /// Placeholder element id (also the output file stem)
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub begin_at_zero: bool,
    pub x_stacked: bool,
    pub series: &'static [SeriesDef],
}

/// Element and attribute carrying the shared year-label sequence
pub const YEAR_ELEMENT: &str = "SaleChart";
pub const YEAR_ATTRIBUTE: &str = "data-year";

/// Panel whose raw attribute is echoed to the log, informational only
pub const ECHOED_PANEL: &str = "InventoryChart";
pub const ECHOED_ATTRIBUTE: &str = "data-inventory";

const fn attr(element: &'static str, name: &'static str) -> SeriesSource {
    SeriesSource::Attribute { element, name }
}

const fn series(
    label: &'static str,
    source: SeriesSource,
    border: Rgba,
    fill: Rgba,
) -> SeriesDef {
    SeriesDef {
        label,
        source,
        border,
        fill,
        filled: true,
        kind_override: None,
    }
}

/// All dashboard panels, in construction order.
///
/// Titles, labels, and colors are the product's display constants;
/// the label text is Persian.
pub const PANELS: &[PanelDef] = &[
    PanelDef {
        id: "SaleChart",
        title: "نمودار فروش",
        kind: ChartKind::Bar,
        begin_at_zero: true,
        x_stacked: true,
        series: &[series(
            "فروش خالص",
            attr("SaleChart", "data-net-sale"),
            Rgba::new(255, 99, 132, 1.0),
            Rgba::new(255, 99, 132, 0.7),
        )],
    },
    PanelDef {
        id: "AssetChart",
        title: "نمودار دارایی‌ها",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "دارایی‌های جاری",
                attr("AssetChart", "data-current-asset"),
                Rgba::opaque(71, 203, 226),
                Rgba::new(71, 203, 226, 0.7),
            ),
            series(
                "دارایی‌های غیر جاری",
                attr("AssetChart", "data-non-current-asset"),
                Rgba::opaque(3, 120, 184),
                Rgba::new(3, 120, 184, 0.7),
            ),
            series(
                "مجموع دارایی‌های جاری و غیر جاری",
                attr("AssetChart", "data-total-asset"),
                Rgba::opaque(5, 160, 146),
                Rgba::new(5, 160, 146, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "DebtChart",
        title: "نمودار بدهی‌ها",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "بدهی‌های جاری",
                attr("DebtChart", "data-current-debt"),
                Rgba::opaque(243, 133, 132),
                Rgba::new(243, 133, 132, 0.7),
            ),
            series(
                "بدهی‌های غیر جاری",
                attr("DebtChart", "data-non-current-debt"),
                Rgba::opaque(133, 164, 156),
                Rgba::new(133, 164, 156, 0.7),
            ),
            series(
                "مجموع بدهی‌های جاری و غیر جاری",
                attr("DebtChart", "data-total-debt"),
                Rgba::opaque(246, 190, 97),
                Rgba::new(246, 190, 97, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "InventoryChart",
        title: "انبار",
        kind: ChartKind::Bar,
        begin_at_zero: true,
        x_stacked: true,
        series: &[series(
            "موجودی انبار",
            attr("InventoryChart", "data-inventory"),
            Rgba::opaque(230, 58, 70),
            Rgba::new(230, 58, 70, 0.7),
        )],
    },
    PanelDef {
        // Element id spelled as the upstream templates spell it
        id: "BankrupsyChart",
        title: "نمودار احتمال ورشکستگی",
        kind: ChartKind::Bar,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            SeriesDef {
                label: "جایگاه در سال جاری",
                source: attr("BankrupsyChart", "data-altman-bankrupsy"),
                border: Rgba::opaque(28, 29, 104),
                fill: Rgba::opaque(28, 29, 104),
                filled: false,
                kind_override: Some(ChartKind::Line),
            },
            series(
                "احتمال ورشکستی بالا",
                SeriesSource::RiskThreshold(RiskLevel::High),
                Rgba::opaque(252, 48, 61),
                Rgba::opaque(252, 48, 61),
            ),
            series(
                "احتمال ورشکستی متوسط",
                SeriesSource::RiskThreshold(RiskLevel::Mid),
                Rgba::opaque(237, 202, 62),
                Rgba::opaque(237, 202, 62),
            ),
            series(
                "احتمال ورشکستگی پایین",
                SeriesSource::RiskThreshold(RiskLevel::Low),
                Rgba::opaque(5, 160, 146),
                Rgba::opaque(5, 160, 146),
            ),
        ],
    },
    PanelDef {
        id: "LeverageChart",
        title: "نسبت‌های اهرمی",
        kind: ChartKind::Line,
        // Ratios hover near zero; the axis follows the data instead
        begin_at_zero: false,
        x_stacked: true,
        series: &[
            series(
                "نسبت بدهی",
                attr("LeverageChart", "data-debt-ratio"),
                Rgba::opaque(230, 111, 79),
                Rgba::new(230, 111, 79, 0.7),
            ),
            series(
                "نسبت سرمایه",
                attr("LeverageChart", "data-capital-ratio"),
                Rgba::opaque(233, 196, 107),
                Rgba::new(233, 196, 107, 0.7),
            ),
            series(
                "نسبت مالکانه",
                attr("LeverageChart", "data-property-ratio"),
                Rgba::opaque(242, 163, 96),
                Rgba::new(242, 163, 96, 0.7),
            ),
            series(
                "نسبت حقوق صاحبان سهام به کل بدهی‌ها",
                attr("LeverageChart", "data-equity-per-debt-ratio"),
                Rgba::opaque(42, 157, 142),
                Rgba::new(42, 157, 142, 0.7),
            ),
            series(
                "نسبت حقوق صاحبان سهام به کل دارایی‌های ثابت",
                attr("LeverageChart", "data-equity-per-asset-ratio"),
                Rgba::opaque(40, 69, 83),
                Rgba::new(40, 69, 83, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "SalaryChart",
        title: "دستمزد",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "دستمزد غیرمتسقیم",
                attr("SalaryChart", "data-salary-fee"),
                Rgba::opaque(69, 123, 157),
                Rgba::new(69, 123, 157, 0.7),
            ),
            series(
                "دستمزد مستقیم",
                attr("SalaryChart", "data-production-fee"),
                Rgba::opaque(168, 217, 221),
                Rgba::new(168, 217, 221, 0.7),
            ),
            series(
                "جمع دستمزد مستقیم و دستمزد غیر مستقیم",
                attr("SalaryChart", "data-salary-production-fee"),
                Rgba::opaque(230, 58, 70),
                Rgba::new(230, 58, 70, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "EquityChart",
        title: "نمودار حقوق صاحبان سهام",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            // These two attributes predate the data- prefix convention
            series(
                "جمع حقوق صاحبان سهام",
                attr("EquityChart", "total-equity"),
                Rgba::opaque(97, 107, 57),
                Rgba::new(97, 107, 57, 0.5),
            ),
            series(
                "جمع بدهی‌های جاری و غیرجاری",
                attr("DebtChart", "data-total-debt"),
                Rgba::opaque(253, 250, 223),
                Rgba::new(253, 250, 223, 0.5),
            ),
            series(
                "جمع بدهی‌ها و حقوق صاحبان سهام",
                attr("EquityChart", "total-sum-equity-debt"),
                Rgba::opaque(187, 110, 38),
                Rgba::new(187, 110, 38, 0.5),
            ),
        ],
    },
    PanelDef {
        id: "ProfitibilityChart",
        title: "نسبت‌های سود‌اوری",
        kind: ChartKind::Line,
        begin_at_zero: false,
        x_stacked: true,
        series: &[
            series(
                "ROA",
                attr("ProfitibilityChart", "data-roa"),
                Rgba::opaque(75, 201, 241),
                Rgba::new(75, 201, 241, 0.7),
            ),
            series(
                "ROA`",
                attr("ProfitibilityChart", "data-roab"),
                Rgba::opaque(63, 55, 202),
                Rgba::new(63, 55, 202, 0.7),
            ),
            series(
                "اثربخشی",
                attr("ProfitibilityChart", "data-efficiency"),
                Rgba::opaque(21, 226, 220),
                Rgba::new(21, 226, 220, 0.7),
            ),
            series(
                "حاشیه سود ناخالص",
                attr("ProfitibilityChart", "data-gross-profit-margin"),
                Rgba::opaque(180, 24, 159),
                Rgba::new(180, 24, 159, 0.7),
            ),
            series(
                "حاشیه سود خالص",
                attr("ProfitibilityChart", "data-net-profit-margin"),
                Rgba::opaque(249, 37, 133),
                Rgba::new(249, 37, 133, 0.7),
            ),
            series(
                "ROE",
                attr("ProfitibilityChart", "data-roe"),
                Rgba::opaque(0, 0, 0),
                Rgba::new(0, 0, 0, 0.5),
            ),
        ],
    },
    PanelDef {
        id: "LiquidityChart",
        title: "نمودار نقدینگی",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "نسبت آنی",
                attr("LiquidityChart", "data-instant-ratio"),
                Rgba::opaque(72, 203, 223),
                Rgba::new(72, 203, 223, 0.7),
            ),
            series(
                "نسبت جاری",
                attr("LiquidityChart", "data-current-ratio"),
                Rgba::opaque(1, 2, 95),
                Rgba::new(1, 2, 95, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "AgilityChart",
        title: "نسبت‌های چابکی",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "نسبت آنی",
                attr("LiquidityChart", "data-instant-ratio"),
                Rgba::opaque(21, 32, 62),
                Rgba::new(21, 32, 62, 0.7),
            ),
            series(
                "گردش موجودی انبار",
                attr("AgilityChart", "data-stock-turnover"),
                Rgba::opaque(252, 163, 17),
                Rgba::new(252, 163, 17, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "PriceChart",
        title: "هزینه‌ها",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "سربار ساخت",
                attr("PriceChart", "data-construction-overhead"),
                Rgba::opaque(255, 35, 132),
                Rgba::new(255, 35, 132, 0.5),
            ),
            series(
                "دستمزد مستقیم",
                attr("SalaryChart", "data-production-fee"),
                Rgba::opaque(255, 194, 132),
                Rgba::new(255, 194, 132, 0.5),
            ),
            series(
                "مواد مستقیم مصرفی",
                attr("PriceChart", "data-consuming-material"),
                Rgba::opaque(107, 112, 90),
                Rgba::new(107, 112, 90, 0.7),
            ),
            series(
                "جمع هزینه‌های تولید",
                attr("PriceChart", "data-production-total-price"),
                Rgba::opaque(182, 184, 162),
                Rgba::new(182, 184, 162, 0.7),
            ),
        ],
    },
    PanelDef {
        id: "ProfitChart",
        title: "سود",
        kind: ChartKind::Line,
        begin_at_zero: true,
        x_stacked: true,
        series: &[
            series(
                "سود ناخالص",
                attr("ProfitChart", "data-gross-profit"),
                Rgba::opaque(252, 164, 6),
                Rgba::new(252, 164, 6, 0.7),
            ),
            series(
                "سود عملیاتی",
                attr("ProfitChart", "data-operation-profit"),
                Rgba::opaque(222, 46, 0),
                Rgba::new(222, 46, 0, 0.5),
            ),
            series(
                "سود ویژه",
                attr("ProfitChart", "data-proceed-profit"),
                Rgba::opaque(105, 2, 14),
                Rgba::new(105, 2, 14, 0.5),
            ),
            series(
                "سود خالص",
                attr("ProfitChart", "data-net-profit"),
                Rgba::opaque(0, 5, 29),
                Rgba::new(0, 5, 29, 0.5),
            ),
            series(
                "فروش خالص",
                attr("SaleChart", "data-net-sale"),
                Rgba::opaque(25, 99, 132),
                Rgba::new(25, 99, 132, 0.5),
            ),
        ],
    },
];

/// Look up a panel definition by element id
pub fn panel(id: &str) -> Option<&'static PanelDef> {
    PANELS.iter().find(|p| p.id == id)
}
