//! findash-charts - Development entry point
//!
//! Builds a synthetic page document for three fiscal years, writes it to the
//! output directory, and renders the full dashboard from it. Useful for
//! exercising the pipeline end to end without an upstream page generator.
//!
//! Usage:
//! ```bash
//! cargo run --bin demo [out_dir]
//! ```

use findash_charts::config::RendererConfig;
use findash_charts::dashboard::document::{PageDocument, Placeholder};
use findash_charts::dashboard::result;
use findash_charts::pipeline;
use std::collections::HashMap;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== findash-charts - Demo Mode ===\n");

    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo_out".to_string())
        .into();
    std::fs::create_dir_all(&out_dir)?;

    // Build and persist the sample document so it can be replayed through
    // the main binary
    let doc = sample_document();
    let doc_path = out_dir.join("page_document.json");
    std::fs::write(&doc_path, serde_json::to_string_pretty(&doc)?)?;
    println!("✓ Sample page document: {}", doc_path.display());
    println!("  Placeholders: {}\n", doc.placeholders.len());

    let config = RendererConfig::from_settings(&doc.settings_reader());
    let results = pipeline::generate_charts(&doc, &config, &out_dir).await?;

    let index = result::write_index_html(&out_dir, &results)?;
    println!("✓ Index page: {}", index.display());

    Ok(())
}

fn placeholder(id: &str, attrs: &[(&str, String)]) -> Placeholder {
    Placeholder {
        id: id.to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    }
}

fn nums(values: &[f64]) -> String {
    serde_json::to_string(values).expect("numeric arrays serialize")
}

/// Three fiscal years of plausible metrics for every panel
fn sample_document() -> PageDocument {
    let years = serde_json::to_string(&["1399", "1400", "1401"]).expect("labels serialize");

    let placeholders = vec![
        placeholder(
            "SaleChart",
            &[
                ("data-year", years),
                ("data-net-sale", nums(&[1820.0, 2540.0, 3390.0])),
            ],
        ),
        placeholder(
            "AssetChart",
            &[
                ("data-current-asset", nums(&[1200.0, 1450.0, 1800.0])),
                ("data-non-current-asset", nums(&[800.0, 950.0, 1000.0])),
                ("data-total-asset", nums(&[2000.0, 2400.0, 2800.0])),
            ],
        ),
        placeholder(
            "DebtChart",
            &[
                ("data-current-debt", nums(&[700.0, 820.0, 990.0])),
                ("data-non-current-debt", nums(&[300.0, 340.0, 400.0])),
                ("data-total-debt", nums(&[1000.0, 1160.0, 1390.0])),
            ],
        ),
        placeholder(
            "InventoryChart",
            &[("data-inventory", nums(&[420.0, 510.0, 610.0]))],
        ),
        placeholder(
            "BankrupsyChart",
            &[("data-altman-bankrupsy", nums(&[2.1, 2.6, 3.4]))],
        ),
        placeholder(
            "LeverageChart",
            &[
                ("data-debt-ratio", nums(&[0.50, 0.48, 0.50])),
                ("data-capital-ratio", nums(&[0.36, 0.39, 0.37])),
                ("data-property-ratio", nums(&[0.50, 0.52, 0.50])),
                ("data-equity-per-debt-ratio", nums(&[1.00, 1.07, 1.01])),
                ("data-equity-per-asset-ratio", nums(&[1.25, 1.31, 1.41])),
            ],
        ),
        placeholder(
            "SalaryChart",
            &[
                ("data-salary-fee", nums(&[210.0, 260.0, 310.0])),
                ("data-production-fee", nums(&[480.0, 560.0, 640.0])),
                ("data-salary-production-fee", nums(&[690.0, 820.0, 950.0])),
            ],
        ),
        placeholder(
            "EquityChart",
            &[
                ("total-equity", nums(&[1000.0, 1240.0, 1410.0])),
                ("total-sum-equity-debt", nums(&[2000.0, 2400.0, 2800.0])),
            ],
        ),
        placeholder(
            "ProfitibilityChart",
            &[
                ("data-roa", nums(&[0.15, 0.16, 0.17])),
                ("data-roab", nums(&[0.13, 0.14, 0.15])),
                ("data-roe", nums(&[0.30, 0.31, 0.34])),
                ("data-efficiency", nums(&[0.91, 1.06, 1.21])),
                ("data-gross-profit-margin", nums(&[0.31, 0.28, 0.27])),
                ("data-net-profit-margin", nums(&[0.16, 0.15, 0.14])),
            ],
        ),
        placeholder(
            "LiquidityChart",
            &[
                ("data-instant-ratio", nums(&[0.8, 0.9, 1.1])),
                ("data-current-ratio", nums(&[1.4, 1.5, 1.7])),
            ],
        ),
        placeholder(
            "AgilityChart",
            &[("data-stock-turnover", nums(&[3.2, 3.8, 4.1]))],
        ),
        placeholder(
            "PriceChart",
            &[
                ("data-construction-overhead", nums(&[150.0, 180.0, 210.0])),
                ("data-consuming-material", nums(&[520.0, 600.0, 700.0])),
                ("data-production-total-price", nums(&[1150.0, 1340.0, 1550.0])),
            ],
        ),
        placeholder(
            "ProfitChart",
            &[
                ("data-gross-profit", nums(&[560.0, 720.0, 910.0])),
                ("data-operation-profit", nums(&[410.0, 520.0, 660.0])),
                ("data-proceed-profit", nums(&[380.0, 470.0, 590.0])),
                ("data-net-profit", nums(&[300.0, 380.0, 480.0])),
            ],
        ),
    ];

    let mut settings = HashMap::new();
    settings.insert("chart.width".to_string(), "1100".to_string());

    PageDocument {
        placeholders,
        settings,
    }
}
