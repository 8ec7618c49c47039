use std::fs;
use std::path::Path;

use crate::types::TargetFault;

/// Write `content` to `path`, replacing any existing file, and report the
/// size of the written file.
pub fn dump_content_into_file(content: &str, path: &Path) -> Result<u64, TargetFault> {
    fs::write(path, content)?;
    Ok(fs::metadata(path)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_bytes_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        assert_eq!(dump_content_into_file("hello", &path).unwrap(), 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(dump_content_into_file("", &path).unwrap(), 0);
    }

    #[test]
    fn missing_directory_is_an_io_fault() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let fault = dump_content_into_file("x", &path).unwrap_err();
        assert_eq!(fault.kind, crate::types::FaultKind::Io);
    }
}
