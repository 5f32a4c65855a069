use std::path::{Path, PathBuf};

/// true if the file path ends in the gzip suffix.
pub fn is_gzip<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// locates an input file that may be stored gzip-compressed: the exact
/// path wins, then the same path with a `.gz` suffix appended.
pub fn find_with_gz<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let exact = path.as_ref().to_path_buf();
    if exact.is_file() {
        return Some(exact);
    }
    let mut gz = exact.into_os_string();
    gz.push(".gz");
    let gz = PathBuf::from(gz);
    if gz.is_file() {
        Some(gz)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip("USA-road-d.NY.gr.gz"));
        assert!(!is_gzip("USA-road-d.NY.gr"));
        assert!(!is_gzip("plain"));
    }

    #[test]
    fn test_find_with_gz_prefers_exact() {
        let dir = tempfile::tempdir().unwrap();
        let exact = dir.path().join("net.gr");
        File::create(&exact).unwrap();
        File::create(dir.path().join("net.gr.gz")).unwrap();
        assert_eq!(find_with_gz(&exact), Some(exact));
    }

    #[test]
    fn test_find_with_gz_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let gz = dir.path().join("net.gr.gz");
        File::create(&gz).unwrap();
        assert_eq!(find_with_gz(dir.path().join("net.gr")), Some(gz));
    }

    #[test]
    fn test_find_with_gz_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_with_gz(dir.path().join("absent.gr")), None);
    }
}
