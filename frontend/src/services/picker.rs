//! Turning picker and drop selections into upload candidates.

use dashboard_core::CandidateFile;
use web_sys::{File, FileList};

/// Candidates in selection order.
pub fn candidates_from_list(files: &FileList) -> Vec<CandidateFile<File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| {
            let name = file.name();
            let mime_type = file.type_();
            CandidateFile::new(file, name, mime_type)
        })
        .collect()
}
