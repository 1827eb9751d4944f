use anyhow::{bail, Context, Result};
use std::{env, fs, io::Write, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wynne::{config::DatasetConfig, dataset};

struct Args {
    csv_path: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        csv_path: None,
        out: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let Some(path) = iter.next() else {
                    bail!("--out needs a file path");
                };
                args.out = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                eprintln!("Usage: wynne [CSV_PATH] [--out FILE]");
                std::process::exit(0);
            }
            _ if args.csv_path.is_none() && !arg.starts_with('-') => {
                args.csv_path = Some(PathBuf::from(arg));
            }
            _ => bail!("Unexpected argument {:?}", arg),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the JSON) ───────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let args = parse_args()?;
    let mut config = DatasetConfig::from_env();
    if let Some(path) = args.csv_path {
        config.csv_path = path;
    }
    info!(path = %config.csv_path.display(), image_base = %config.image_base, "startup");

    // ─── 3) load + emit ──────────────────────────────────────────────
    let gallery = dataset::load_gallery(&config)?;
    let json = serde_json::to_string_pretty(&gallery).context("Failed to serialize gallery")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output directory {:?}", parent))?;
            }
            fs::write(&out, json).with_context(|| format!("Failed to write {:?}", out))?;
            info!(out = %out.display(), "wrote gallery");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
