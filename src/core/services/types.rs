use std::path::PathBuf;

/// What `before_upload` inspects
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate {
    pub name: String,
    /// Bytes
    pub size: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeType {
    Original,
    Compressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Album,
    Camera,
}

/// A file handed back by a picker
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub kind: MediaKind,
}

/// Media picker parameters
#[derive(Debug, Clone, Default)]
pub struct MediaOptions {
    pub count: Option<u32>,
    pub size_type: Vec<SizeType>,
    pub source_type: Vec<SourceType>,
    /// Empty means any kind
    pub media_type: Vec<MediaKind>,
}

/// Document picker parameters
#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    pub count: Option<u32>,
    /// Empty means any extension
    pub extension: Vec<String>,
}

/// Pickers return one file unless asked for more
pub fn effective_count(count: Option<u32>) -> usize {
    count.filter(|c| *c > 0).unwrap_or(1) as usize
}

impl MediaOptions {
    pub fn effective_count(&self) -> usize {
        effective_count(self.count)
    }
}

impl FileOptions {
    pub fn effective_count(&self) -> usize {
        effective_count(self.count)
    }
}
