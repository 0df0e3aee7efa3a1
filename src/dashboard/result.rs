//! Rendered chart results and the dashboard index page
//!
//! The pipeline writes one PNG per panel as soon as it renders; on a fully
//! successful pass an index page is written that embeds every chart as a
//! base64 data URI, so the whole dashboard travels as a single file.

use super::error::{DashboardError, Result};
use std::path::{Path, PathBuf};

/// One rendered panel
#[derive(Debug, Clone)]
pub struct ChartResult {
    /// Placeholder element id
    pub panel_id: String,
    /// Chart title as drawn
    pub title: String,
    /// Where the PNG was written
    pub path: PathBuf,
    /// PNG size in bytes
    pub png_bytes: usize,
    pub width: u32,
    pub height: u32,
}

/// Write a rendered PNG to `<out_dir>/<panel_id>.png`
pub fn write_png(out_dir: &Path, panel_id: &str, png: &[u8]) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.png", panel_id));
    std::fs::write(&path, png)?;
    Ok(path)
}

/// Write `dashboard.html` embedding every rendered chart as a data URI
pub fn write_index_html(out_dir: &Path, results: &[ChartResult]) -> Result<PathBuf> {
    use base64::Engine;

    let mut figures = String::new();
    for result in results {
        let png = std::fs::read(&result.path)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        figures.push_str(&format!(
            "  <figure>\n    <img src=\"data:image/png;base64,{}\" \
             alt=\"{}\" width=\"{}\" height=\"{}\">\n    <figcaption>{}</figcaption>\n  </figure>\n",
            encoded, result.panel_id, result.width, result.height, result.title
        ));
    }

    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"fa\" dir=\"rtl\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>داشبورد مالی</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; background: #f5f5f5; margin: 0; padding: 20px; }}\n\
         figure {{ display: inline-block; background: #fff; border-radius: 8px;\n\
                   box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 12px; margin: 10px; }}\n\
         img {{ max-width: 100%; height: auto; }}\n\
         </style>\n</head>\n<body>\n{}</body>\n</html>\n",
        figures
    );

    let path = out_dir.join("dashboard.html");
    std::fs::write(&path, html.as_bytes())
        .map_err(|e| DashboardError::Render(format!("writing index page: {}", e)))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_png_and_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_png(dir.path(), "SaleChart", b"not-really-a-png").unwrap();
        assert!(path.ends_with("SaleChart.png"));

        let results = vec![ChartResult {
            panel_id: "SaleChart".to_string(),
            title: "نمودار فروش".to_string(),
            path,
            png_bytes: 16,
            width: 800,
            height: 600,
        }];
        let index = write_index_html(dir.path(), &results).unwrap();
        let html = std::fs::read_to_string(index).unwrap();
        assert!(html.contains("data:image/png;base64,"));
        assert!(html.contains("alt=\"SaleChart\""));
    }

    #[test]
    fn test_index_with_no_results_is_still_a_page() {
        let dir = tempfile::tempdir().expect("temp dir");
        let index = write_index_html(dir.path(), &[]).unwrap();
        let html = std::fs::read_to_string(index).unwrap();
        assert!(html.contains("</html>"));
    }
}
