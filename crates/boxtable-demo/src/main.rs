//! Renders a sample table of pointer values.
//!
//! ```text
//! boxtable-demo --bold-headers --padding-right 2
//! boxtable-demo --ascii --config table.yaml
//! ```
//!
//! Set `RUST_LOG=boxtable=debug` to see layout diagnostics on stderr.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxtable::{Table, TableOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print a box-drawn table to stdout.
#[derive(Parser, Debug)]
#[command(name = "boxtable-demo", version, about)]
struct Cli {
    /// YAML file with table options; flags below take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render the header row in bold
    #[arg(long)]
    bold_headers: bool,

    /// Use ASCII glyphs instead of box-drawing characters
    #[arg(long)]
    ascii: bool,

    /// Spaces before each value
    #[arg(long, value_name = "N")]
    padding_left: Option<usize>,

    /// Spaces after each value
    #[arg(long, value_name = "N")]
    padding_right: Option<usize>,
}

impl Cli {
    fn options(&self) -> Result<TableOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let yaml = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                TableOptions::from_yaml(&yaml)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => TableOptions::default(),
        };

        options.bold_headers |= self.bold_headers;
        options.ascii |= self.ascii;
        if let Some(n) = self.padding_left {
            options.padding_left = n;
        }
        if let Some(n) = self.padding_right {
            options.padding_right = n;
        }
        Ok(options)
    }
}

fn sample_table() -> Result<Table> {
    let values = vec![
        vec!["88", "0x7ffee784e96c", "0x7ffee784e960", "0x7ffee784e96c", "88"],
        vec!["89", "0x7ffee784e96c", "0x7ffee784e960", "0x7ffee784e96c", "89"],
    ];
    let headers = vec![
        "Value",
        "Value address",
        "Pointer address",
        "Pointer contents",
        "Dereferenced pointer",
    ];
    Ok(Table::new(values, headers)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options()?;
    tracing::debug!(?options, "resolved table options");

    let table = sample_table()?.with_options(options);
    table
        .write_to(io::stdout().lock())
        .context("failed to write table")?;
    Ok(())
}
