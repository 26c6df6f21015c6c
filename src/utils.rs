use std::path::PathBuf;

/// The invoking user's home directory, if the OS can tell us.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Format byte count as human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1_024 {
        return format!("{bytes} B");
    }
    let kb = bytes as f64 / 1_024.0;
    if kb < 1_024.0 {
        return format!("{kb:.1} KB");
    }
    let mb = kb / 1_024.0;
    if mb < 1_024.0 {
        return format!("{mb:.1} MB");
    }
    format!("{:.1} GB", mb / 1_024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_unit() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1_023), "1023 B");
        assert_eq!(format_size(1_024), "1.0 KB");
        assert_eq!(format_size(4_096), "4.0 KB");
        assert_eq!(format_size(1_536), "1.5 KB");
        assert_eq!(format_size(5 * 1_048_576), "5.0 MB");
        assert_eq!(format_size(3 * 1_073_741_824 / 2), "1.5 GB");
    }
}
