mod markdown;
mod response;

pub use markdown::render_markdown;
pub use response::PlanResponse;

use crate::error::OutputError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write rendered output to a file, or stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
            }
            fs::write(path, content).map_err(OutputError::Write)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(OutputError::Write)
        }
    }
}
