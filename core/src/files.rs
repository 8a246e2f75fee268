//! Local files as intake candidates (native driver).

use std::path::{Path, PathBuf};

use crate::error::CliResult;
use crate::intake::CandidateFile;

const OCTET_STREAM: &str = "application/octet-stream";

/// MIME type of a local file: magic bytes first, extension as fallback.
pub fn detect_mime(path: &Path) -> std::io::Result<String> {
    let sniffed = infer::get_from_path(path)?.map(|kind| kind.mime_type());

    let mime = match sniffed {
        Some(mime) if mime != OCTET_STREAM => mime,
        _ => mime_guess::from_path(path).first_raw().unwrap_or(OCTET_STREAM),
    };
    Ok(mime.to_string())
}

/// Turn paths into candidates. The handle is the path; bytes are read at
/// upload time.
pub fn load_candidates(paths: &[PathBuf]) -> CliResult<Vec<CandidateFile<PathBuf>>> {
    paths
        .iter()
        .map(|path| -> CliResult<CandidateFile<PathBuf>> {
            let mime = detect_mime(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(CandidateFile::new(path.clone(), name, mime))
        })
        .collect()
}
