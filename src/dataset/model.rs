// src/dataset/model.rs
use serde::{Serialize, Serializer};

use crate::medium::Medium;

/// Display entry for a single finalist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub artist: String,
    pub title: String,
    pub winner: bool,
    pub url: String,
    pub image_path: String,
    #[serde(serialize_with = "medium_or_empty")]
    pub medium: Option<Medium>,
}

impl Artwork {
    /// Category name, `""` when the medium text was not recognised.
    pub fn medium_name(&self) -> &'static str {
        self.medium.map(|m| m.as_str()).unwrap_or("")
    }
}

fn medium_or_empty<S: Serializer>(medium: &Option<Medium>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(medium.map(|m| m.as_str()).unwrap_or(""))
}

/// All finalists of one competition year, winners first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup {
    pub year: String,
    pub artworks: Vec<Artwork>,
}

/// Everything the gallery page renders: year groups newest first, plus the
/// sorted set of mediums available for filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub years: Vec<YearGroup>,
    pub mediums: Vec<Medium>,
}

impl Gallery {
    pub fn artwork_count(&self) -> usize {
        self.years.iter().map(|g| g.artworks.len()).sum()
    }

    pub fn year(&self, year: &str) -> Option<&YearGroup> {
        self.years.iter().find(|g| g.year == year)
    }

    pub fn winners(&self) -> impl Iterator<Item = &Artwork> {
        self.years
            .iter()
            .flat_map(|g| g.artworks.iter())
            .filter(|a| a.winner)
    }
}
