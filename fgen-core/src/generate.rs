use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checksum::{self, ChecksumRecord};
use crate::clock::Clock;
use crate::content::{self, TextSource};
use crate::prepare;
use crate::report::{self, GeneratedFile, ReportOptions};
use crate::request::GenerationRequest;

#[derive(Debug)]
pub struct RunSummary {
    pub files: Vec<GeneratedFile>,
    pub checksums: Vec<ChecksumRecord>,
    pub total_bytes: u64,
    pub manifest_path: PathBuf,
    pub checksum_path: PathBuf,
}

/// Run one full generation pass under `root`: reset `{root}/{pattern}`, write
/// `file_count` files of filler text, checksum each, then write the manifest
/// and checksum reports. The output directory is cleared first — prior
/// contents are gone after this call.
///
/// `root` is joined with the pattern; the CLI passes an empty root so paths
/// come out relative to the working directory.
pub fn generate(
    root: &Path,
    req: &GenerationRequest,
    opts: &ReportOptions,
    source: &mut dyn TextSource,
    clock: &dyn Clock,
) -> Result<RunSummary> {
    let dir = root.join(&req.pattern);
    prepare::prepare_dir(&dir)?;

    let want = req.file_size_bytes as usize;
    let mut files = Vec::with_capacity(req.file_count);
    let mut checksums = Vec::with_capacity(req.file_count);
    let mut total_bytes = 0u64;

    for i in 1..=req.file_count {
        let path = dir.join(format!("{}-{:03}.txt", req.pattern, i));
        // Under-producing sources leave the file short; never pad.
        let body = content::truncate_to_bytes(source.text(want), want);
        {
            let mut f =
                File::create(&path).with_context(|| format!("create {}", path.display()))?;
            f.write_all(body.as_bytes())?;
        }
        // File is closed; both digest passes re-read it from disk.
        let record = checksum::checksum_record(&path)?;
        total_bytes += body.len() as u64;
        files.push(GeneratedFile {
            path: path.clone(),
            size_bytes: body.len() as u64,
            created_utc: clock.now_utc(),
        });
        checksums.push(record);
    }

    let manifest_path = report::write_manifest(&dir, &req.pattern, &files, opts)?;
    let checksum_path = report::write_checksums(&dir, &req.pattern, &checksums, opts)?;

    Ok(RunSummary { files, checksums, total_bytes, manifest_path, checksum_path })
}
