use crate::error::{Error, Result};
use crate::presentation::ConsoleRenderer;
use crate::types::ResourceKind;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read the whole response body. `None` or `-` means stdin.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).map_err(|source| Error::Read {
                path: Some(path.to_path_buf()),
                source,
            })
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|source| Error::Read { path: None, source })?;
            Ok(buf)
        }
    }
}

pub fn handle(renderer: &ConsoleRenderer, kind: ResourceKind, file: Option<PathBuf>) -> Result<()> {
    let bytes = read_input(file.as_deref())?;
    info!(%kind, bytes = bytes.len(), "rendering response");
    if bytes.is_empty() {
        debug!("response body is empty");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.render(kind, &bytes, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("clock.json");
        std::fs::write(&path, br#"{"clock":{}}"#)?;

        assert_eq!(read_input(Some(path.as_path()))?, br#"{"clock":{}}"#.to_vec());
        Ok(())
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_input(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, Error::Read { path: Some(_), .. }));
        assert!(err.to_string().starts_with("Failed to read /definitely/not/here.json"));
    }
}
