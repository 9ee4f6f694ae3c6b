/// Decimal byte formatter for console output: one decimal place, units
/// selected by repeated division by 1000.
pub fn human_bytes(n: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1000.0 && unit < UNITS.len() - 1 {
        v /= 1000.0;
        unit += 1;
    }
    format!("{:.1} {}", v, UNITS[unit])
}

/// Coarse elapsed-time formatter: truncated integer in the largest unit the
/// span reaches. Display only, never parsed back.
pub fn human_duration(ms: u128) -> String {
    const SEC: u128 = 1000;
    const MIN: u128 = 60 * SEC;
    const HOUR: u128 = 60 * MIN;
    const DAY: u128 = 24 * HOUR;
    if ms < SEC {
        format!("{} ms", ms)
    } else if ms < 5 * MIN {
        format!("{} s", ms / SEC)
    } else if ms < HOUR {
        format!("{} min", ms / MIN)
    } else if ms < DAY {
        format!("{} h", ms / HOUR)
    } else {
        format!("{} d", ms / DAY)
    }
}
