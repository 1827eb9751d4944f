use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use std::collections::BTreeMap;
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

use wynne::{config::DatasetConfig, dataset, medium::Medium};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = DatasetConfig::from_env();
    if let Some(path) = env::args().nth(1) {
        config.csv_path = path.into();
    }
    tracing::info!(path = %config.csv_path.display(), "Collecting medium statistics.");

    let text = std::fs::read_to_string(&config.csv_path)
        .with_context(|| format!("Failed to read dataset {:?}", config.csv_path))?;
    let records = dataset::read_records(&text).context("Failed to parse dataset")?;

    // category -> rows, and raw text -> rows for anything that fell through
    let mut per_category: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut unrecognised: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        match Medium::classify(&record.medium) {
            Some(m) => *per_category.entry(m.as_str()).or_default() += 1,
            None => *unrecognised.entry(record.medium.trim().to_string()).or_default() += 1,
        }
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("Medium").style_spec("bFg"),
        Cell::new("Rows").style_spec("bFg"),
    ]));
    for medium in Medium::ALL {
        let count = per_category.get(medium.as_str()).copied().unwrap_or(0);
        table.add_row(Row::new(vec![
            Cell::new(medium.as_str()),
            Cell::new(&count.to_string()).style_spec("r"),
        ]));
    }
    println!("\n--- Medium Categories ({} rows) ---", records.len());
    table.printstd();

    if unrecognised.is_empty() {
        println!("\nEvery medium text matched a category.");
    } else {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("Unrecognised medium").style_spec("bFy"),
            Cell::new("Rows").style_spec("bFy"),
        ]));
        for (raw, count) in &unrecognised {
            let shown = if raw.is_empty() { "<empty>" } else { raw.as_str() };
            table.add_row(Row::new(vec![
                Cell::new(shown),
                Cell::new(&count.to_string()).style_spec("r"),
            ]));
        }
        println!("\n--- Unrecognised ({} distinct) ---", unrecognised.len());
        table.printstd();
    }

    tracing::info!("Medium statistics finished.");
    Ok(())
}
