use anyhow::Result;
use std::{env, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use wynne::images::{prepare_images, DEFAULT_DST_DIR, DEFAULT_SRC_DIR, MAX_EDGE};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Usage: prepare_images [SRC_DIR] [DST_DIR]
    let mut args = env::args().skip(1);
    let src = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_SRC_DIR.to_string()));
    let dst = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_DST_DIR.to_string()));

    let report = prepare_images(&src, &dst, MAX_EDGE)?;
    println!(
        "\nDone. Resized {} of {} images to {}/",
        report.converted,
        report.total,
        dst.display()
    );
    for path in &report.failed {
        println!("  FAILED {}", path.display());
    }
    Ok(())
}
