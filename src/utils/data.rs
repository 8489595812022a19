//! Byte size conversions

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size in megabytes rounded to 3 decimals.
///
/// Both the pre-upload size check and the `size` parameter of the signing
/// request use this value.
///
/// # Examples
/// ```
/// use signed_upload::utils::data::size_in_mb;
/// assert_eq!(size_in_mb(1024 * 1024), 1.0);
/// assert_eq!(size_in_mb(0), 0.0);
/// ```
pub fn size_in_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / BYTES_PER_MB;
    (mb * 1000.0).round() / 1000.0
}

/// Format bytes into a human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_mb_rounds_to_three_decimals() {
        // 1 KB = 0.0009765625 MB
        assert_eq!(size_in_mb(1024), 0.001);
        assert_eq!(size_in_mb(15 * 1024 * 1024), 15.0);
        // Just over 15 MB, still rounds to 15.0
        assert_eq!(size_in_mb(15 * 1024 * 1024 + 100), 15.0);
        assert_eq!(size_in_mb(15 * 1024 * 1024 + 2048), 15.002);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
