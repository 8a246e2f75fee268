//! Image thumbnails as object URLs.
//!
//! Every URL handed out here is owned by the staged file it belongs to and
//! revoked through [`PreviewAllocator::revoke`] when that file leaves the
//! intake.

use dashboard_core::{CandidateFile, PreviewAllocator};
use web_sys::{File, Url};

#[derive(Debug, Default)]
pub struct BlobPreviews;

impl PreviewAllocator<File> for BlobPreviews {
    fn allocate(&mut self, candidate: &CandidateFile<File>) -> Option<String> {
        match Url::create_object_url_with_blob(&candidate.handle) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("No preview for {}: {:?}", candidate.name, e);
                None
            }
        }
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}
