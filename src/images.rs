// src/images.rs
use anyhow::{Context, Result};
use glob::glob;
use image::{imageops::FilterType, DynamicImage, ImageFormat};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{error, info};

pub const DEFAULT_SRC_DIR: &str = "data/images";
pub const DEFAULT_DST_DIR: &str = "static/images";
/// Longest edge of a served image.
pub const MAX_EDGE: u32 = 1400;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    pub total: usize,
    pub converted: usize,
    pub failed: Vec<PathBuf>,
}

/// `<dst_dir>/<stem>.webp` for a source image.
pub fn webp_target(src: &Path, dst_dir: &Path) -> Option<PathBuf> {
    let stem = src.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(".webp");
    Some(dst_dir.join(name))
}

/// Shrink `img` to fit within `max_edge` square, keeping aspect ratio.
/// Images already inside the bound are returned untouched.
pub fn fit_within(img: DynamicImage, max_edge: u32) -> DynamicImage {
    if img.width() <= max_edge && img.height() <= max_edge {
        return img;
    }
    img.resize(max_edge, max_edge, FilterType::Lanczos3)
}

fn convert_one(src: &Path, dst: &Path, max_edge: u32) -> Result<()> {
    let img = image::open(src).with_context(|| format!("decoding {:?}", src))?;
    let img = fit_within(img, max_edge);
    // the WebP encoder only takes 8-bit RGB(A)
    let img = DynamicImage::ImageRgb8(img.to_rgb8());
    img.save_with_format(dst, ImageFormat::WebP)
        .with_context(|| format!("writing {:?}", dst))?;
    Ok(())
}

/// Convert every `*.jpg` in `src_dir` to `<stem>.webp` in `dst_dir`.
/// A bad image is logged and recorded in the report; it does not stop the run.
#[tracing::instrument(level = "info", skip_all, fields(src = %src_dir.display(), dst = %dst_dir.display()))]
pub fn prepare_images(src_dir: &Path, dst_dir: &Path, max_edge: u32) -> Result<PrepareReport> {
    fs::create_dir_all(dst_dir)
        .with_context(|| format!("creating image directory {:?}", dst_dir))?;

    let pattern = format!("{}/*.jpg", src_dir.display());
    let mut sources: Vec<PathBuf> = glob(&pattern)
        .with_context(|| format!("bad glob pattern {}", pattern))?
        .filter_map(Result::ok)
        .collect();
    sources.sort();
    let total = sources.len();
    info!(total, "images to convert");

    let failed: Vec<PathBuf> = sources
        .par_iter()
        .filter_map(|src| {
            let Some(dst) = webp_target(src, dst_dir) else {
                error!(path = %src.display(), "no file stem");
                return Some(src.clone());
            };
            match convert_one(src, &dst, max_edge) {
                Ok(()) => {
                    info!(name = %dst.display(), "converted");
                    None
                }
                Err(e) => {
                    error!(path = %src.display(), "FAILED: {:#}", e);
                    Some(src.clone())
                }
            }
        })
        .collect();

    let report = PrepareReport {
        total,
        converted: total - failed.len(),
        failed,
    };
    info!(
        converted = report.converted,
        failed = report.failed.len(),
        "done"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::tempdir;

    fn write_jpg(path: &Path, w: u32, h: u32) {
        let buf = ImageBuffer::from_fn(w, h, |x, y| Rgb([(x % 255) as u8, (y % 255) as u8, 90]));
        DynamicImage::ImageRgb8(buf)
            .save_with_format(path, ImageFormat::Jpeg)
            .unwrap();
    }

    #[test]
    fn test_webp_target() {
        let dst = Path::new("static/images");
        assert_eq!(
            webp_target(Path::new("data/images/2020_A B_T.jpg"), dst),
            Some(PathBuf::from("static/images/2020_A B_T.webp"))
        );
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        let img = DynamicImage::new_rgb8(2800, 1400);
        let out = fit_within(img, 1400);
        assert_eq!((out.width(), out.height()), (1400, 700));

        let small = DynamicImage::new_rgb8(300, 200);
        let out = fit_within(small, 1400);
        assert_eq!((out.width(), out.height()), (300, 200));
    }

    #[test]
    fn test_prepare_converts_and_reports_failures() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("out").join("images");
        fs::create_dir_all(&src).unwrap();

        write_jpg(&src.join("big.jpg"), 64, 32);
        write_jpg(&src.join("small.jpg"), 8, 8);
        fs::write(src.join("broken.jpg"), b"not an image").unwrap();
        fs::write(src.join("notes.txt"), b"ignored").unwrap();

        let report = prepare_images(&src, &dst, 16).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.converted, 2);
        assert_eq!(report.failed, vec![src.join("broken.jpg")]);

        let big = image::open(dst.join("big.webp")).unwrap();
        assert_eq!((big.width(), big.height()), (16, 8));
        assert!(dst.join("small.webp").exists());
        assert!(!dst.join("notes.webp").exists());
    }
}
