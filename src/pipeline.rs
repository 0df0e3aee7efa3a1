//! Shared dashboard rendering pipeline
//!
//! One linear pass per page document:
//! 1. Resolve the shared year-label sequence from the sale placeholder
//! 2. Iterate the panel registry in order; for each panel, look up its
//!    placeholder, decode every series attribute independently, and
//!    assemble a ChartSpec
//! 3. Render each spec and write its PNG before moving to the next panel
//!
//! A missing placeholder is fatal and stops the pass at that panel; panels
//! rendered before it stay on disk. A malformed attribute is not fatal: it
//! yields an empty series for that one attribute and the pass continues.

use crate::config::RendererConfig;
use crate::dashboard::decode::{decode_labels, decode_numbers, Decoded};
use crate::dashboard::document::PageDocument;
use crate::dashboard::panels::{self, PanelDef, SeriesSource, PANELS};
use crate::dashboard::result::{self, ChartResult};
use crate::dashboard::risk::threshold_series;
use crate::dashboard::spec::{AxisOptions, ChartSpec, Series};
use crate::dashboard::{DashboardError, Result};
use crate::render;
use std::path::Path;

/// Resolve the shared year-label sequence
///
/// The sale placeholder must exist (fatal otherwise); its year attribute is
/// decoded defensively like any series — absent, empty, or malformed all
/// yield an empty label sequence.
pub fn year_labels(doc: &PageDocument) -> Result<Vec<String>> {
    let placeholder = doc.placeholder(panels::YEAR_ELEMENT)?;
    let outcome = decode_labels(placeholder.attribute(panels::YEAR_ATTRIBUTE));
    if let Decoded::Invalid(reason) = &outcome {
        eprintln!(
            "⚠ Attribute '{}' on '{}' is not a JSON string array: {}",
            panels::YEAR_ATTRIBUTE,
            panels::YEAR_ELEMENT,
            reason
        );
    }
    Ok(outcome.into_values())
}

/// Assemble one panel's ChartSpec from the page document
///
/// Each series attribute decodes on its own: one malformed value blanks only
/// its own series. Placeholder lookups (the panel's own element and any
/// cross-panel source element) are fatal when missing.
pub fn assemble_panel(
    doc: &PageDocument,
    def: &PanelDef,
    labels: &[String],
) -> Result<ChartSpec> {
    // The panel's own placeholder must exist even when every series sources
    // another element
    doc.placeholder(def.id)?;

    let mut series = Vec::with_capacity(def.series.len());
    for sdef in def.series {
        let values = match sdef.source {
            SeriesSource::Attribute { element, name } => {
                let placeholder = doc.placeholder(element)?;
                let outcome = decode_numbers(placeholder.attribute(name));
                if let Decoded::Invalid(reason) = &outcome {
                    eprintln!(
                        "⚠ Attribute '{}' on '{}' is not a numeric JSON array: {}",
                        name, element, reason
                    );
                }
                outcome.into_values()
            }
            SeriesSource::RiskThreshold(level) => threshold_series(level, labels.len()),
        };

        series.push(Series {
            label: sdef.label.to_string(),
            values,
            border: sdef.border,
            fill: sdef.fill,
            filled: sdef.filled,
            kind_override: sdef.kind_override,
        });
    }

    Ok(ChartSpec {
        panel_id: def.id.to_string(),
        title: def.title.to_string(),
        kind: def.kind,
        labels: labels.to_vec(),
        series,
        axis: AxisOptions {
            x_stacked: def.x_stacked,
            begin_at_zero: def.begin_at_zero,
        },
    })
}

/// Run the whole dashboard pass: assemble, render, and write every panel
pub async fn generate_charts(
    doc: &PageDocument,
    config: &RendererConfig,
    out_dir: &Path,
) -> Result<Vec<ChartResult>> {
    println!("[1/3] Resolving shared year labels...");
    let labels = year_labels(doc)?;
    println!("  Categories: {} {:?}", labels.len(), labels);

    let (width, height) = config.resolve_dimensions(labels.len());
    println!("  Chart size: {}×{} pixels", width, height);

    std::fs::create_dir_all(out_dir)?;

    println!("\n[2/3] Rendering {} panel(s)...", PANELS.len());
    let mut results = Vec::with_capacity(PANELS.len());

    for (idx, def) in PANELS.iter().enumerate() {
        // Informational echo of one raw attribute, kept from the page script
        if def.id == panels::ECHOED_PANEL {
            let raw = doc.placeholder(def.id)?.attribute(panels::ECHOED_ATTRIBUTE);
            println!("  {} {} = {:?}", def.id, panels::ECHOED_ATTRIBUTE, raw);
        }

        let spec = assemble_panel(doc, def, &labels)?;
        let summary: Vec<String> = spec
            .series
            .iter()
            .map(|s| format!("{}", s.values.len()))
            .collect();
        println!(
            "  [{}/{}] {} ({:?}, series lengths: [{}])",
            idx + 1,
            PANELS.len(),
            def.id,
            def.kind,
            summary.join(", ")
        );

        // Drawing is CPU-bound; hand it to a blocking worker
        let render_spec = spec.clone();
        let png =
            tokio::task::spawn_blocking(move || render::render_chart(&render_spec, width, height))
                .await
                .map_err(|e| {
                    DashboardError::Render(format!("panel '{}': render task failed: {}", def.id, e))
                })??;

        // Write immediately: a fatal error later in the pass leaves the
        // panels rendered so far on disk
        let path = result::write_png(out_dir, def.id, &png)?;
        println!("        ✓ {} ({} bytes)", path.display(), png.len());

        results.push(ChartResult {
            panel_id: def.id.to_string(),
            title: def.title.to_string(),
            path,
            png_bytes: png.len(),
            width,
            height,
        });
    }

    println!("\n[3/3] Dashboard pass complete: {} chart(s)", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::document::Placeholder;
    use crate::dashboard::risk::RiskLevel;
    use std::collections::HashMap;

    fn doc_from(entries: &[(&str, &[(&str, &str)])]) -> PageDocument {
        let placeholders = entries
            .iter()
            .map(|(id, attrs)| Placeholder {
                id: id.to_string(),
                attributes: attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
            .collect();
        PageDocument {
            placeholders,
            settings: HashMap::new(),
        }
    }

    /// A document with every registered placeholder present but only the
    /// given attributes populated
    fn full_doc(populated: &[(&str, &[(&str, &str)])]) -> PageDocument {
        const NO_ATTRS: &[(&str, &str)] = &[];
        let mut entries: Vec<(&str, &[(&str, &str)])> =
            PANELS.iter().map(|def| (def.id, NO_ATTRS)).collect();
        for (id, attrs) in populated.iter().copied() {
            if let Some(entry) = entries.iter_mut().find(|(eid, _)| *eid == id) {
                entry.1 = attrs;
            }
        }
        doc_from(&entries)
    }

    const YEARS: &[(&str, &str)] = &[
        ("data-year", "[\"1399\",\"1400\",\"1401\"]"),
        ("data-net-sale", "[100,200,300]"),
    ];

    #[test]
    fn test_year_labels_from_sale_placeholder() {
        let doc = full_doc(&[("SaleChart", YEARS)]);
        let labels = year_labels(&doc).unwrap();
        assert_eq!(labels, vec!["1399", "1400", "1401"]);
    }

    #[test]
    fn test_year_labels_missing_sale_placeholder_is_fatal() {
        let doc = doc_from(&[("InventoryChart", &[])]);
        let err = year_labels(&doc).unwrap_err();
        assert!(matches!(err, DashboardError::MissingPlaceholder(id) if id == "SaleChart"));
    }

    #[test]
    fn test_year_labels_absent_attribute_is_empty_not_error() {
        let doc = full_doc(&[]);
        assert!(year_labels(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_sale_series_decodes_in_order() {
        let doc = full_doc(&[("SaleChart", YEARS)]);
        let labels = year_labels(&doc).unwrap();
        let def = panels::panel("SaleChart").unwrap();

        let spec = assemble_panel(&doc, def, &labels).unwrap();
        assert_eq!(spec.n_categories(), 3);
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, "فروش خالص");
        assert_eq!(spec.series[0].values, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_inventory_absent_attribute_renders_empty() {
        let doc = full_doc(&[("SaleChart", YEARS)]);
        let labels = year_labels(&doc).unwrap();
        let def = panels::panel("InventoryChart").unwrap();

        let spec = assemble_panel(&doc, def, &labels).unwrap();
        assert!(spec.series[0].values.is_empty());
    }

    #[test]
    fn test_malformed_attribute_blanks_only_its_own_series() {
        let doc = full_doc(&[
            ("SaleChart", YEARS),
            (
                "AssetChart",
                &[
                    ("data-current-asset", "[1,2"),
                    ("data-non-current-asset", "[3,4,5]"),
                    ("data-total-asset", "[6,7,8]"),
                ],
            ),
            ("DebtChart", &[("data-current-debt", "[9,10,11]")]),
        ]);
        let labels = year_labels(&doc).unwrap();

        let asset = assemble_panel(&doc, panels::panel("AssetChart").unwrap(), &labels).unwrap();
        assert!(asset.series[0].values.is_empty());
        assert_eq!(asset.series[1].values, vec![3.0, 4.0, 5.0]);
        assert_eq!(asset.series[2].values, vec![6.0, 7.0, 8.0]);

        // Later panels keep their own valid data
        let debt = assemble_panel(&doc, panels::panel("DebtChart").unwrap(), &labels).unwrap();
        assert_eq!(debt.series[0].values, vec![9.0, 10.0, 11.0]);
    }

    #[test]
    fn test_missing_placeholder_halts_that_panel() {
        let mut doc = full_doc(&[("SaleChart", YEARS)]);
        doc.placeholders.retain(|p| p.id != "DebtChart");
        let labels = year_labels(&doc).unwrap();

        // Panels before the missing one assemble fine
        assert!(assemble_panel(&doc, panels::panel("SaleChart").unwrap(), &labels).is_ok());

        let err = assemble_panel(&doc, panels::panel("DebtChart").unwrap(), &labels).unwrap_err();
        assert!(matches!(err, DashboardError::MissingPlaceholder(id) if id == "DebtChart"));

        // The equity panel re-plots a debt attribute, so it halts too
        let err = assemble_panel(&doc, panels::panel("EquityChart").unwrap(), &labels).unwrap_err();
        assert!(matches!(err, DashboardError::MissingPlaceholder(id) if id == "DebtChart"));
    }

    #[test]
    fn test_bankruptcy_thresholds_sized_to_labels() {
        let doc = full_doc(&[
            ("SaleChart", YEARS),
            ("BankrupsyChart", &[("data-altman-bankrupsy", "[2.1,2.6,3.4]")]),
        ]);
        let labels = year_labels(&doc).unwrap();
        let spec =
            assemble_panel(&doc, panels::panel("BankrupsyChart").unwrap(), &labels).unwrap();

        assert_eq!(spec.series[0].values, vec![2.1, 2.6, 3.4]);
        for (idx, level) in [(1, RiskLevel::High), (2, RiskLevel::Mid), (3, RiskLevel::Low)] {
            assert_eq!(spec.series[idx].values, vec![level.value(); 3]);
        }
    }

    #[test]
    fn test_bankruptcy_thresholds_empty_when_no_labels() {
        let doc = full_doc(&[]);
        let labels = year_labels(&doc).unwrap();
        let spec =
            assemble_panel(&doc, panels::panel("BankrupsyChart").unwrap(), &labels).unwrap();
        for s in &spec.series {
            assert!(s.values.is_empty());
        }
    }

    #[test]
    fn test_cross_panel_reuse_reads_source_element() {
        let doc = full_doc(&[
            ("SaleChart", YEARS),
            ("DebtChart", &[("data-total-debt", "[1000,1160,1390]")]),
        ]);
        let labels = year_labels(&doc).unwrap();
        let equity = assemble_panel(&doc, panels::panel("EquityChart").unwrap(), &labels).unwrap();

        let total_debt = equity
            .series
            .iter()
            .find(|s| s.label == "جمع بدهی‌های جاری و غیرجاری")
            .expect("equity panel re-plots total debt");
        assert_eq!(total_debt.values, vec![1000.0, 1160.0, 1390.0]);
    }
}
