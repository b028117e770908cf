//! Retrieval of the yield-curve workbook
//!
//! Downloads the Bank of England archive and pulls the OIS workbook out of
//! it. Local archives and bare workbooks are accepted too, for offline runs.

use crate::error::{OisError, OisResult};
use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

/// Latest yield curve data published by the Bank of England
pub const BOE_YIELD_CURVE_URL: &str =
    "https://www.bankofengland.co.uk/-/media/boe/files/statistics/yield-curves/latest-yield-curve-data.zip";

/// The BoE site rejects requests without a browser-like agent
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Download timeout, in seconds
const FETCH_TIMEOUT_SECS: u32 = 30;

/// Where the workbook comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Zip archive downloaded from a URL
    Remote { url: String },
    /// Zip archive already on disk
    Archive(PathBuf),
    /// The .xlsx workbook itself
    Workbook(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote {
            url: BOE_YIELD_CURVE_URL.to_string(),
        }
    }
}

impl Source {
    /// Load the workbook bytes, unzipping `entry` where the source is an archive
    pub fn load_workbook(&self, entry: &str) -> OisResult<Vec<u8>> {
        match self {
            Source::Remote { url } => {
                let archive = download(url)?;
                extract_entry(&archive, entry)
            }
            Source::Archive(path) => {
                debug!(path = %path.display(), "reading local archive");
                let archive = fs::read(path)?;
                extract_entry(&archive, entry)
            }
            Source::Workbook(path) => {
                debug!(path = %path.display(), "reading local workbook");
                Ok(fs::read(path)?)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Remote { url } => url.clone(),
            Source::Archive(path) | Source::Workbook(path) => path.display().to_string(),
        }
    }
}

/// Fetch a URL's body with curl
fn download(url: &str) -> OisResult<Vec<u8>> {
    info!(url, "downloading yield curve archive");

    let timeout = FETCH_TIMEOUT_SECS.to_string();
    let output = Command::new("curl")
        .args(["-fsSL", "--max-time", &timeout, "-A", USER_AGENT, url])
        .output()
        .map_err(|e| OisError::Fetch(format!("Failed to run curl: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OisError::Fetch(format!(
            "Download of {} failed ({}): {}",
            url,
            output.status,
            stderr.trim()
        )));
    }

    debug!(bytes = output.stdout.len(), "archive downloaded");
    Ok(output.stdout)
}

/// Read one named entry out of zip archive bytes
pub fn extract_entry(archive: &[u8], entry: &str) -> OisResult<Vec<u8>> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))
        .map_err(|e| OisError::Archive(format!("Not a valid zip archive: {}", e)))?;

    let mut file = zip
        .by_name(entry)
        .map_err(|e| OisError::Archive(format!("Entry '{}' not found: {}", entry, e)))?;

    // Declared sizes are untrusted, so no preallocation
    let mut bytes = Vec::new();
    file
        .read_to_end(&mut bytes)
        .map_err(|e| OisError::Archive(format!("Failed to read '{}': {}", entry, e)))?;

    debug!(entry, bytes = bytes.len(), "extracted archive entry");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (name, body) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_extract_named_entry() {
        let archive = archive_with(&[
            ("GLC Nominal daily data current month.xlsx", b"nominal"),
            ("OIS daily data current month.xlsx", b"ois"),
        ]);

        let bytes = extract_entry(&archive, "OIS daily data current month.xlsx").unwrap();
        assert_eq!(bytes, b"ois");
    }

    #[test]
    fn test_missing_entry() {
        let archive = archive_with(&[("other.xlsx", b"x")]);
        let result = extract_entry(&archive, "OIS daily data current month.xlsx");
        assert!(matches!(result, Err(OisError::Archive(msg)) if msg.contains("OIS daily")));
    }

    /// Overwrite the zip64 uncompressed size of every central directory entry
    fn inflate_declared_size(archive: &mut [u8], size: u64) {
        let mut pos = 0;
        while pos + 46 <= archive.len() {
            if archive[pos..pos + 4] != [0x50, 0x4b, 0x01, 0x02] {
                pos += 1;
                continue;
            }
            let name_len = u16::from_le_bytes([archive[pos + 28], archive[pos + 29]]) as usize;
            let extra_len = u16::from_le_bytes([archive[pos + 30], archive[pos + 31]]) as usize;
            let mut field = pos + 46 + name_len;
            let extra_end = field + extra_len;
            while field + 4 <= extra_end {
                let id = u16::from_le_bytes([archive[field], archive[field + 1]]);
                let len = u16::from_le_bytes([archive[field + 2], archive[field + 3]]) as usize;
                if id == 0x0001 && len >= 8 {
                    archive[field + 4..field + 12].copy_from_slice(&size.to_le_bytes());
                }
                field += 4 + len;
            }
            pos = extra_end;
        }
    }

    #[test]
    fn test_lying_entry_size_is_not_trusted() {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .large_file(true);
        zip.start_file("e.xlsx", options).unwrap();
        zip.write_all(b"abc").unwrap();
        zip.finish().unwrap();
        inflate_declared_size(&mut buffer, u64::MAX);

        match extract_entry(&buffer, "e.xlsx") {
            Ok(bytes) => assert_eq!(bytes, b"abc"),
            Err(e) => assert!(matches!(e, OisError::Archive(_)), "got {:?}", e),
        }
    }

    #[test]
    fn test_not_a_zip() {
        let result = extract_entry(b"<html>Access denied</html>", "x.xlsx");
        assert!(matches!(result, Err(OisError::Archive(_))));
    }

    #[test]
    fn test_local_archive_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("latest-yield-curve-data.zip");
        fs::write(&path, archive_with(&[("book.xlsx", b"workbook")])).unwrap();

        let source = Source::Archive(path);
        assert_eq!(source.load_workbook("book.xlsx").unwrap(), b"workbook");
    }

    #[test]
    fn test_missing_local_file_is_io_error() {
        let source = Source::Workbook(PathBuf::from("does/not/exist.xlsx"));
        assert!(matches!(source.load_workbook("ignored"), Err(OisError::Io(_))));
    }

    #[test]
    fn test_default_source_is_boe() {
        assert_eq!(Source::default().describe(), BOE_YIELD_CURVE_URL);
    }
}
