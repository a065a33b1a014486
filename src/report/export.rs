use crate::error::{CoverScoutError, Result};
use crate::report::OutputFormat;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Writes a rendered report to `<dir>/assessment-<stamp>.<ext>`. An existing
/// file is never replaced: a clashing name gets a `-<n>` suffix.
pub fn write_report(dir: &Path, rendered: &str, format: OutputFormat) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(CoverScoutError::Io)?;
    let stem = format!("assessment-{}", Utc::now().format("%Y%m%dT%H%M%S%.3fZ"));
    let mut attempt = 0u32;
    loop {
        let name = match attempt {
            0 => format!("{stem}.{}", format.extension()),
            n => format!("{stem}-{n}.{}", format.extension()),
        };
        let out_path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&out_path) {
            Ok(mut file) => {
                file.write_all(rendered.as_bytes())
                    .map_err(CoverScoutError::Io)?;
                tracing::info!(path = %out_path.display(), "report exported");
                return Ok(out_path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(CoverScoutError::Io(e)),
        }
    }
}
