// CV asset download.
// Fetches the asset and writes it atomically into the user's download
// directory. Runs independently of the password email.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use reqwest::Client;

use crate::error::{FolioError, Result};

/// Where downloaded assets land: the platform download directory, or the
/// application cache directory when none exists (headless sessions).
pub fn download_dir() -> PathBuf {
    if let Some(dirs) = UserDirs::new() {
        if let Some(dir) = dirs.download_dir() {
            return dir.to_path_buf();
        }
    }
    ProjectDirs::from("", "", "folio")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Derive a local file name from the asset URL. A URL with no path
/// beyond the host falls back to a generic name.
pub fn file_name_from_url(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .trim_end_matches('/')
        .split_once('/')
        .and_then(|(_, path)| path.rsplit('/').next())
        .map(|name| name.split('?').next().unwrap_or(name))
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .unwrap_or_else(|| "cv.pdf".to_string())
}

/// Download the CV and return the path it was saved to.
pub async fn download_cv(client: &Client, url: &str, dest_dir: &Path) -> Result<PathBuf> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FolioError::Connection)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FolioError::FetchFailed(status));
    }

    let bytes = response.bytes().await.map_err(FolioError::Connection)?;
    let path = dest_dir.join(file_name_from_url(url));
    write_atomic(&path, &bytes)?;
    Ok(path)
}

/// Write via temp file and rename so a failed download never leaves a
/// truncated asset behind.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://example.com/assets/cv-2026.pdf"),
            "cv-2026.pdf"
        );
        assert_eq!(
            file_name_from_url("https://example.com/cv.pdf?dl=1"),
            "cv.pdf"
        );
        assert_eq!(file_name_from_url("https://example.com/"), "cv.pdf");
        assert_eq!(file_name_from_url("https://example.com"), "cv.pdf");
    }

    #[test]
    fn test_file_name_hostless_paths() {
        assert_eq!(file_name_from_url("assets/cv.pdf"), "cv.pdf");
        assert_eq!(file_name_from_url("cv.pdf"), "cv.pdf");
    }

    #[test]
    fn test_write_atomic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("cv.pdf");

        write_atomic(&path, b"%PDF-1.7").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cv.pdf");

        write_atomic(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }
}
