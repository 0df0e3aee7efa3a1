//! findash-charts - Main entry point
//!
//! Loads a page document, renders every registered dashboard panel to PNG,
//! and writes an index page embedding the results.
//!
//! Usage:
//! ```bash
//! findash-charts --document page_document.json --out dashboard_out
//! ```

use anyhow::Context;
use findash_charts::config::RendererConfig;
use findash_charts::dashboard::{result, PageDocument};
use findash_charts::pipeline;
use std::path::Path;

#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() {
    println!("findash-charts v{}\n", env!("CARGO_PKG_VERSION"));

    // Parse command-line arguments into environment variables
    let args: Vec<String> = std::env::args().collect();
    parse_args(&args);

    print_env_info();

    match run().await {
        Ok((count, total_bytes)) => {
            println!("\n✓ Dashboard rendered ({} charts, {} bytes)", count, total_bytes);
        }
        Err(e) => {
            eprintln!("\n✗ Dashboard rendering failed: {:#}", e);
            eprintln!("\nNote: the renderer expects:");
            eprintln!("  --document <path>   page document JSON (or DASHBOARD_DOCUMENT)");
            eprintln!("  --out <dir>         output directory (or DASHBOARD_OUT)");
            std::process::exit(1);
        }
    }
}

/// Parse command-line arguments and set environment variables
fn parse_args(args: &[String]) {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--document" if i + 1 < args.len() => {
                std::env::set_var("DASHBOARD_DOCUMENT", &args[i + 1]);
                i += 2;
            }
            "--out" if i + 1 < args.len() => {
                std::env::set_var("DASHBOARD_OUT", &args[i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }
}

/// Print environment info for debugging
fn print_env_info() {
    if let Ok(doc) = std::env::var("DASHBOARD_DOCUMENT") {
        println!("DASHBOARD_DOCUMENT: {}", doc);
    } else {
        println!("DASHBOARD_DOCUMENT not set");
    }

    if let Ok(out) = std::env::var("DASHBOARD_OUT") {
        println!("DASHBOARD_OUT: {}", out);
    } else {
        println!("DASHBOARD_OUT not set (defaults to dashboard_out/)");
    }
    println!();
}

async fn run() -> anyhow::Result<(usize, usize)> {
    let doc_path =
        std::env::var("DASHBOARD_DOCUMENT").context("no page document given (--document <path>)")?;
    let out_dir = std::env::var("DASHBOARD_OUT").unwrap_or_else(|_| "dashboard_out".to_string());

    let doc = PageDocument::from_file(&doc_path)
        .with_context(|| format!("reading page document '{}'", doc_path))?;
    println!("✓ Page document loaded: {} placeholder(s)\n", doc.placeholders.len());

    let config = RendererConfig::from_settings(&doc.settings_reader());
    let out = Path::new(&out_dir);

    let results = pipeline::generate_charts(&doc, &config, out).await?;

    if config.index_page {
        let index = result::write_index_html(out, &results)?;
        println!("✓ Index page: {}", index.display());
    }

    let total_bytes = results.iter().map(|r| r.png_bytes).sum();
    Ok((results.len(), total_bytes))
}
