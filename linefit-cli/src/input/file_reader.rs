//! Script file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A script loaded from disk
#[derive(Debug, Clone)]
pub struct ScriptFile {
    /// Where the script was read from
    pub path: PathBuf,
    /// Script text
    pub text: String,
}

impl ScriptFile {
    /// Name used in progress and log messages
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Reads script files as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a script file, rejecting content that is not UTF-8
    pub fn read_script(path: &Path) -> Result<ScriptFile> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        let text = String::from_utf8(bytes)
            .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

        Ok(ScriptFile {
            path: path.to_path_buf(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_script() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("script.txt");

        let content = "H1:\nMereu am crezut că nu merit mai multe și muncesc tot mai mult.";
        fs::write(&file_path, content).unwrap();

        let script = FileReader::read_script(&file_path).unwrap();
        assert_eq!(script.text, content);
        assert_eq!(script.display_name(), "script.txt");
    }

    #[test]
    fn test_read_missing_file() {
        let result = FileReader::read_script(Path::new("/nonexistent/script.txt"));

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, b"A\xbaB").unwrap();

        let err_msg = FileReader::read_script(&file_path).unwrap_err().to_string();
        assert!(err_msg.contains("not valid UTF-8"));
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let script = FileReader::read_script(&file_path).unwrap();
        assert!(script.text.is_empty());
    }
}
