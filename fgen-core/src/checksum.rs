use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const CHUNK: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecksumAlgo {
    Md5,
    Sha256,
}

#[derive(Clone, Debug)]
pub struct ChecksumRecord {
    pub path: PathBuf,
    pub md5_hex: String,
    pub md5_b64: String,
    pub sha256_hex: String,
    pub sha256_b64: String,
}

/// Stream `path` in 4096-byte chunks and return the digest as
/// (lowercase hex, standard base64). Never loads the whole file.
pub fn file_checksum(path: &Path, algo: ChecksumAlgo) -> Result<(String, String)> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut buf = [0u8; CHUNK];
    let digest: Vec<u8> = match algo {
        ChecksumAlgo::Md5 => {
            let mut ctx = md5::Context::new();
            loop {
                let n = f.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                ctx.consume(&buf[..n]);
            }
            ctx.compute().0.to_vec()
        }
        ChecksumAlgo::Sha256 => {
            let mut hasher = Sha256::new();
            loop {
                let n = f.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
            }
            hasher.finalize().to_vec()
        }
    };
    Ok((hex::encode(&digest), B64.encode(&digest)))
}

/// Both digests for one file, each as an independent full read.
pub fn checksum_record(path: &Path) -> Result<ChecksumRecord> {
    let (md5_hex, md5_b64) = file_checksum(path, ChecksumAlgo::Md5)?;
    let (sha256_hex, sha256_b64) = file_checksum(path, ChecksumAlgo::Sha256)?;
    Ok(ChecksumRecord {
        path: path.to_path_buf(),
        md5_hex,
        md5_b64,
        sha256_hex,
        sha256_b64,
    })
}
