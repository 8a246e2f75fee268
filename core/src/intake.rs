//! File intake: MIME filtering, preview allocation and the staged-file set.
//!
//! The intake owns every preview reference it hands out. Previews are freed
//! when a file is replaced, removed, when the set is cleared, and when the
//! intake itself is dropped.

/// MIME type accepted besides `image/*`.
pub const PDF_MIME: &str = "application/pdf";

/// A file offered by a drop or picker event, before filtering.
#[derive(Debug, Clone)]
pub struct CandidateFile<H> {
    /// Platform file reference (a browser `File`, a path, ...).
    pub handle: H,
    pub name: String,
    pub mime_type: String,
}

impl<H> CandidateFile<H> {
    pub fn new(handle: H, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// A file accepted by the intake, pending upload.
#[derive(Debug, Clone)]
pub struct StagedFile<H> {
    pub handle: H,
    pub name: String,
    pub mime_type: String,
    /// Local preview reference, only ever set for images.
    pub preview_url: Option<String>,
}

impl<H> StagedFile<H> {
    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }
}

/// Allocates and frees revocable preview references.
pub trait PreviewAllocator<H> {
    /// Create a preview for `file`. `None` when the platform has nothing to offer.
    fn allocate(&mut self, file: &CandidateFile<H>) -> Option<String>;

    /// Free a reference returned by [`PreviewAllocator::allocate`].
    fn revoke(&mut self, url: &str);
}

/// Allocator for headless drivers that never render previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreviews;

impl<H> PreviewAllocator<H> for NoPreviews {
    fn allocate(&mut self, _file: &CandidateFile<H>) -> Option<String> {
        None
    }

    fn revoke(&mut self, _url: &str) {}
}

/// What one [`FileIntake::accept`] call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeSummary {
    /// Names newly added to the staged set.
    pub accepted: Vec<String>,
    /// Names that replaced an already staged file.
    pub replaced: Vec<String>,
    /// Names dropped by the MIME filter.
    pub rejected: Vec<String>,
}

impl IntakeSummary {
    /// Number of files that entered the staged set.
    pub fn staged_count(&self) -> usize {
        self.accepted.len() + self.replaced.len()
    }
}

/// `type/subtype` without parameters, lowercased.
fn essence(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// `image/*`.
pub fn is_image_mime(mime: &str) -> bool {
    essence(mime)
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}

/// `image/*` or `application/pdf`.
pub fn is_accepted_mime(mime: &str) -> bool {
    is_image_mime(mime) || essence(mime) == PDF_MIME
}

/// The staged-file set.
pub struct FileIntake<H, P: PreviewAllocator<H>> {
    staged: Vec<StagedFile<H>>,
    previews: P,
}

impl<H, P: PreviewAllocator<H>> FileIntake<H, P> {
    pub fn new(previews: P) -> Self {
        Self {
            staged: Vec::new(),
            previews,
        }
    }

    /// Filter `candidates` and merge them into the staged set.
    ///
    /// Earlier files are kept. A file whose name is already staged replaces
    /// the old entry in place and the old preview is revoked.
    pub fn accept(
        &mut self,
        candidates: impl IntoIterator<Item = CandidateFile<H>>,
    ) -> IntakeSummary {
        let mut summary = IntakeSummary::default();

        for candidate in candidates {
            if !is_accepted_mime(&candidate.mime_type) {
                log::debug!(
                    "Dropping '{}' ({}): unsupported type",
                    candidate.name,
                    candidate.mime_type
                );
                summary.rejected.push(candidate.name);
                continue;
            }

            let preview_url = if is_image_mime(&candidate.mime_type) {
                self.previews.allocate(&candidate)
            } else {
                None
            };

            let staged = StagedFile {
                handle: candidate.handle,
                name: candidate.name,
                mime_type: candidate.mime_type,
                preview_url,
            };

            match self.staged.iter().position(|f| f.name == staged.name) {
                Some(index) => {
                    let old = std::mem::replace(&mut self.staged[index], staged);
                    if let Some(url) = old.preview_url {
                        self.previews.revoke(&url);
                    }
                    summary.replaced.push(old.name);
                }
                None => {
                    summary.accepted.push(staged.name.clone());
                    self.staged.push(staged);
                }
            }
        }

        summary
    }

    /// Staged files in staging order.
    pub fn staged(&self) -> &[StagedFile<H>] {
        &self.staged
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Free the preview of the staged file called `name`.
    ///
    /// Returns `false` when no such file is staged or it had no preview.
    pub fn release(&mut self, name: &str) -> bool {
        let Some(file) = self.staged.iter_mut().find(|f| f.name == name) else {
            return false;
        };
        match file.preview_url.take() {
            Some(url) => {
                self.previews.revoke(&url);
                true
            }
            None => false,
        }
    }

    /// Remove a staged file, freeing its preview.
    pub fn remove(&mut self, name: &str) -> Option<StagedFile<H>> {
        let index = self.staged.iter().position(|f| f.name == name)?;
        let mut file = self.staged.remove(index);
        if let Some(url) = file.preview_url.take() {
            self.previews.revoke(&url);
        }
        Some(file)
    }

    /// Empty the staged set, freeing every preview.
    pub fn clear(&mut self) {
        for file in self.staged.drain(..) {
            if let Some(url) = file.preview_url {
                self.previews.revoke(&url);
            }
        }
    }

    pub fn previews(&self) -> &P {
        &self.previews
    }
}

impl<H, P: PreviewAllocator<H>> Drop for FileIntake<H, P> {
    fn drop(&mut self) {
        self.clear();
    }
}
