// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "data/wynne_finalists.csv";
pub const DEFAULT_IMAGE_BASE: &str = "/images/";

pub const CSV_PATH_VAR: &str = "WYNNE_CSV_PATH";
pub const IMAGE_BASE_VAR: &str = "WYNNE_IMAGE_BASE";

/// Where the finalists dataset lives and how image paths are served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub csv_path: PathBuf,
    /// Prefix joined with the encoded `<image_stem>.webp`.
    pub image_base: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }
}

impl DatasetConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            ..Self::default()
        }
    }

    /// Defaults, overridden by `WYNNE_CSV_PATH` / `WYNNE_IMAGE_BASE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    /// Unset and empty values both fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();
        if let Some(path) = get(CSV_PATH_VAR) {
            cfg.csv_path = PathBuf::from(path);
        }
        if let Some(base) = get(IMAGE_BASE_VAR) {
            cfg.image_base = base;
        }
        cfg
    }
}
