use std::fs;
use std::io;
use std::path::Path;

use gdlists_core::ReportSink;

/// Writes lists straight to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReportSink;

impl ReportSink for FsReportSink {
    type Error = io::Error;

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), Self::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::debug!("writing {}", path.display());
        fs::write(path, contents)
    }
}
