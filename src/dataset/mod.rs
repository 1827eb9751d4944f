// src/dataset/mod.rs
mod model;
mod record;

pub use model::{Artwork, Gallery, YearGroup};
pub use record::FinalistRecord;

use anyhow::{anyhow, bail, Context, Result};
use csv::ReaderBuilder;
use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};
use tracing::{debug, info};

use crate::config::{DatasetConfig, DEFAULT_IMAGE_BASE};
use crate::medium::Medium;

/// `<base><percent-encoded image_stem + ".webp">`.
pub fn image_path_with_base(base: &str, image_stem: &str) -> String {
    let filename = format!("{}.webp", image_stem);
    format!("{}{}", base, urlencoding::encode(&filename))
}

/// Served path of a finalist's image under `/images/`.
pub fn image_path(image_stem: &str) -> String {
    image_path_with_base(DEFAULT_IMAGE_BASE, image_stem)
}

/// Read the dataset named by `config` and build the gallery.
/// Any I/O, CSV or year error fails the whole load.
#[tracing::instrument(level = "info", skip(config), fields(path = %config.csv_path.display()))]
pub fn load_gallery(config: &DatasetConfig) -> Result<Gallery> {
    let text = fs::read_to_string(&config.csv_path)
        .with_context(|| format!("Failed to read dataset {:?}", config.csv_path))?;
    let gallery = parse_gallery(&text, &config.image_base)
        .with_context(|| format!("Failed to load dataset {:?}", config.csv_path))?;
    info!(
        artworks = gallery.artwork_count(),
        years = gallery.years.len(),
        mediums = gallery.mediums.len(),
        "gallery loaded"
    );
    Ok(gallery)
}

/// [`load_gallery`] for a CSV at `path` with the default image base.
pub fn load_gallery_from_path<P: AsRef<Path>>(path: P) -> Result<Gallery> {
    load_gallery(&DatasetConfig::new(path.as_ref()))
}

/// Parse CSV text and build the gallery in one go.
pub fn parse_gallery(text: &str, image_base: &str) -> Result<Gallery> {
    let records = read_records(text)?;
    build_gallery(records, image_base)
}

/// Parse CSV text into records, using the header row for field names.
/// Blank lines are skipped; rows with a missing or non-numeric `year` are
/// rejected with the offending line number.
pub fn read_records(text: &str) -> Result<Vec<FinalistRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.context("Malformed CSV")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record: FinalistRecord = row
            .deserialize(Some(&headers))
            .with_context(|| format!("Failed to decode CSV row at line {}", line))?;

        if record.year.trim().is_empty() {
            bail!("Row at line {} has no year", line);
        }
        if record.year_number().is_none() {
            bail!("Row at line {} has non-numeric year {:?}", line, record.year);
        }
        records.push(record);
    }
    debug!(rows = records.len(), "parsed CSV records");
    Ok(records)
}

/// Group records by year (newest first), winners first within a year with
/// input order kept otherwise, and collect the distinct recognised mediums.
pub fn build_gallery<I>(records: I, image_base: &str) -> Result<Gallery>
where
    I: IntoIterator<Item = FinalistRecord>,
{
    let mut by_year: BTreeMap<Reverse<u32>, Vec<Artwork>> = BTreeMap::new();
    let mut mediums: HashSet<Medium> = HashSet::new();

    for (idx, record) in records.into_iter().enumerate() {
        let year = record
            .year_number()
            .ok_or_else(|| anyhow!("Record #{} has invalid year {:?}", idx, record.year))?;

        let medium = Medium::classify(&record.medium);
        match medium {
            Some(m) => {
                mediums.insert(m);
            }
            None if !record.medium.is_empty() => {
                debug!(medium = %record.medium, "unrecognised medium");
            }
            None => {}
        }

        let winner = record.is_winner();
        by_year.entry(Reverse(year)).or_default().push(Artwork {
            image_path: image_path_with_base(image_base, &record.image_stem),
            artist: record.artist,
            title: record.title,
            winner,
            url: record.url,
            medium,
        });
    }

    let years = by_year
        .into_iter()
        .map(|(Reverse(year), mut artworks)| {
            // stable: winners and non-winners each keep CSV order
            artworks.sort_by_key(|a| !a.winner);
            debug!(year, artworks = artworks.len(), "year group");
            YearGroup {
                year: year.to_string(),
                artworks,
            }
        })
        .collect();

    let mut mediums: Vec<Medium> = mediums.into_iter().collect();
    mediums.sort_by_key(|m| m.as_str());

    Ok(Gallery { years, mediums })
}
