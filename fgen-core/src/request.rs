use anyhow::{anyhow, Result};

/// One generation run: `pattern` doubles as the output directory name and the
/// filename prefix for every file written into it.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub file_count: usize,
    pub file_size_bytes: u64,
    pub pattern: String,
}

/// Parse a size string like `500`, `10KB`, `2MB`, `1GB` into bytes.
/// Suffixes are case-insensitive binary multipliers; no suffix means bytes.
pub fn parse_size(spec: &str) -> Result<u64> {
    let s = spec.trim().to_uppercase();
    for (suffix, mul) in [("KB", 1u64 << 10), ("MB", 1 << 20), ("GB", 1 << 30)] {
        if let Some(num) = s.strip_suffix(suffix) {
            let v: u64 = num.trim().parse().map_err(|_| anyhow!("bad size {}", spec))?;
            return Ok(v * mul);
        }
    }
    s.parse().map_err(|_| anyhow!("bad size {}", spec))
}
