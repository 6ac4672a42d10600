//! Human-readable byte counts for the file list.

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Base-1024 size with up to two decimals, trailing zeros trimmed.
///
/// `500` -> `"500 B"`, `1500` -> `"1.46 KB"`, `2097152` -> `"2 MB"`.
pub fn readable_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut size = bytes as f64;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    // 1023.999 KB prints as 1024 KB; show it as 1 MB instead.
    if (size * 100.0).round() >= 102_400.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{size:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
