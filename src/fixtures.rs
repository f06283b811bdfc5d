#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::keyset::{KeySet, WriteSet};

    /// A file with a shadowed key in a comment.
    pub const SAMPLE: &str = "a=1\n#a=99\nb=2\n";

    pub fn keys(list: &[&str]) -> KeySet {
        list.iter().copied().collect()
    }

    pub fn pairs(list: &[(&str, &str)]) -> WriteSet {
        list.iter().copied().collect()
    }

    /// Write `content` to `opts.cfg` in a fresh temp dir. Keep the `TempDir`
    /// alive for as long as the path is used.
    pub fn option_file(content: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("opts.cfg");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn sample_has_three_lines() {
        assert_eq!(SAMPLE.lines().count(), 3);
    }
}
