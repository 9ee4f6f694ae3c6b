use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::time::Instant;

use fgen_core::clock::SystemClock;
use fgen_core::content::LoremSource;
use fgen_core::format::{human_bytes, human_duration};
use fgen_core::generate::generate;
use fgen_core::report::{ReportOptions, SizeFormat};
use fgen_core::request::{parse_size, GenerationRequest};

#[derive(Parser)]
#[command(name = "fgen", version, about = "Generate fake text files with checksum manifests")]
struct Cli {
    /// Number of files to generate per pattern
    #[arg(short = 'n', long = "num_files", value_parser = clap::value_parser!(u32).range(1..))]
    num_files: u32,
    /// Size of each file, e.g. 500, 10KB, 2MB, 1GB
    #[arg(short = 's', long = "size")]
    size: String,
    /// Output directory name and filename prefix; each pattern is a full
    /// independent run
    #[arg(short = 'p', long = "pattern", num_args = 1.., required = true)]
    pattern: Vec<String>,
    /// Legacy report shape: header rows and full relative paths
    #[arg(long, default_value_t = false)]
    legacy: bool,
    /// Human-readable sizes in the manifest column instead of raw bytes
    #[arg(long = "human_sizes", default_value_t = false)]
    human_sizes: bool,
}

fn banner() {
    eprintln!("fgen {} - synthetic test-data generator", env!("CARGO_PKG_VERSION"));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    banner();

    let file_size_bytes = parse_size(&cli.size)?;
    let mut opts = if cli.legacy { ReportOptions::legacy() } else { ReportOptions::default() };
    if cli.human_sizes {
        opts.size_format = SizeFormat::Human;
    }

    let mut source = LoremSource::new();
    let clock = SystemClock;
    let t0 = Instant::now();
    let mut grand_total = 0u64;

    for pattern in &cli.pattern {
        let req = GenerationRequest {
            file_count: cli.num_files as usize,
            file_size_bytes,
            pattern: pattern.clone(),
        };
        let t = Instant::now();
        let summary = generate(Path::new(""), &req, &opts, &mut source, &clock)?;
        grand_total += summary.total_bytes;
        eprintln!(
            "{}: {} file(s), {} in {}",
            pattern,
            summary.files.len(),
            human_bytes(summary.total_bytes),
            human_duration(t.elapsed().as_millis())
        );
    }

    eprintln!(
        "Done: {} pattern(s), {} total in {}",
        cli.pattern.len(),
        human_bytes(grand_total),
        human_duration(t0.elapsed().as_millis())
    );
    Ok(())
}
