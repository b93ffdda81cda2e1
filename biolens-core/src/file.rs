use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path under the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the raw file content (normalized on write)
    fn render(&self) -> String;

    /// Write the file to disk, replacing whatever is there
    fn write(&self, base: &Path) -> Result<WrittenFile> {
        write_file(&self.path(base), &self.render())
    }
}

/// Trim surrounding whitespace and terminate with exactly one newline.
///
/// This is the exact byte content every emitted file ends up with.
pub fn normalize(content: &str) -> String {
    let mut normalized = content.trim().to_owned();
    normalized.push('\n');
    normalized
}

/// Write `content` (normalized) to `path`, creating missing parent directories.
///
/// Existing files are overwritten unconditionally.
pub fn write_file(path: &Path, content: &str) -> Result<WrittenFile> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let normalized = normalize(content);
    std::fs::write(path, &normalized)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    Ok(WrittenFile {
        bytes: normalized.len(),
    })
}

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Number of bytes written
    pub bytes: usize,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Readme;

    impl GeneratedFile for Readme {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("docs").join("README.md")
        }

        fn render(&self) -> String {
            "\n\n# BioLens\n\n".to_string()
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("hello"), "hello\n");
        assert_eq!(normalize("  hello\n\n\n"), "hello\n");
        assert_eq!(normalize("\t\na\n  b  \n"), "a\n  b\n");
        assert_eq!(normalize(""), "\n");
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let written = write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        assert_eq!(written.bytes, 6);
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested\n");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_file_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("child.txt"), "content").unwrap_err();

        assert!(format!("{:?}", err).contains("blocker"));
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let written = Readme.write(temp.path()).unwrap();

        let path = temp.path().join("docs/README.md");
        assert_eq!(fs::read_to_string(&path).unwrap(), "# BioLens\n");
        assert_eq!(written.bytes, "# BioLens\n".len());
    }
}
