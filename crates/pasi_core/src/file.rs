use std::path::PathBuf;

/// Opaque reference to an uploaded file as reported by the host.
///
/// The core only looks at `name` and `byte_size`; `location` is carried through
/// to the engine, which reads the content from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub byte_size: u64,
    pub location: PathBuf,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, byte_size: u64, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            byte_size,
            location: location.into(),
        }
    }

    /// A file passes the sanity check when it has a name and some content.
    pub fn is_acceptable(&self) -> bool {
        !self.name.is_empty() && self.byte_size > 0
    }
}

/// Reconcile the file-picker list and the drag-and-drop list into one candidate.
///
/// A non-empty picker list always wins, even when none of its entries are
/// acceptable. Within the chosen list the first acceptable file is returned.
pub fn resolve_selection(picker: &[FileHandle], dropped: &[FileHandle]) -> Option<FileHandle> {
    let candidates = if picker.is_empty() { dropped } else { picker };
    candidates.iter().find(|file| file.is_acceptable()).cloned()
}
