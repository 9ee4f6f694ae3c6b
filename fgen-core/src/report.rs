use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::checksum::ChecksumRecord;
use crate::format::human_bytes;

#[derive(Clone, Debug)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub created_utc: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeFormat {
    Raw,
    Human,
}

/// Shape of the two report files. The original tool shipped two hard-coded
/// variants; this collapses them into one writer with presets.
#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    pub include_headers: bool,
    pub basename_only: bool,
    pub size_format: SizeFormat,
}

impl ReportOptions {
    /// Output shape of the original baseline generator: header rows, paths as
    /// written, raw byte counts.
    pub fn legacy() -> Self {
        Self { include_headers: true, basename_only: false, size_format: SizeFormat::Raw }
    }
}

impl Default for ReportOptions {
    // Raw sizes even in basename mode: the manifest stays machine-readable,
    // human formatting belongs to console output.
    fn default() -> Self {
        Self { include_headers: false, basename_only: true, size_format: SizeFormat::Raw }
    }
}

fn display_name(path: &Path, opts: &ReportOptions) -> String {
    if opts.basename_only {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    } else {
        path.to_string_lossy().replace('\\', "/")
    }
}

fn timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Write `{pattern}_manifest.txt` into `dir`: one row per generated file, in
/// generation order.
pub fn write_manifest(
    dir: &Path,
    pattern: &str,
    files: &[GeneratedFile],
    opts: &ReportOptions,
) -> Result<PathBuf> {
    let path = dir.join(format!("{pattern}_manifest.txt"));
    let mut w = BufWriter::new(
        File::create(&path).with_context(|| format!("create {}", path.display()))?,
    );
    if opts.include_headers {
        writeln!(w, "FileName,FileSize,CreationDate")?;
    }
    for f in files {
        let size = match opts.size_format {
            SizeFormat::Raw => f.size_bytes.to_string(),
            SizeFormat::Human => human_bytes(f.size_bytes),
        };
        writeln!(w, "{},{},{}", display_name(&f.path, opts), size, timestamp(&f.created_utc))?;
    }
    w.flush()?;
    Ok(path)
}

/// Write `{pattern}_checksums.txt` into `dir`: one row per generated file,
/// MD5 and SHA-256 in hex and base64, in generation order.
pub fn write_checksums(
    dir: &Path,
    pattern: &str,
    records: &[ChecksumRecord],
    opts: &ReportOptions,
) -> Result<PathBuf> {
    let path = dir.join(format!("{pattern}_checksums.txt"));
    let mut w = BufWriter::new(
        File::create(&path).with_context(|| format!("create {}", path.display()))?,
    );
    if opts.include_headers {
        writeln!(w, "FileName,MD5,MD5_Base64,SHA256,SHA256_Base64")?;
    }
    for r in records {
        writeln!(
            w,
            "{},{},{},{},{}",
            display_name(&r.path, opts),
            r.md5_hex,
            r.md5_b64,
            r.sha256_hex,
            r.sha256_b64
        )?;
    }
    w.flush()?;
    Ok(path)
}
