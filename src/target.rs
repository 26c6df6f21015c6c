use std::path::{Path, PathBuf};

/// Accessible bytes under a directory plus the entries that could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirSize {
    pub bytes: u64,
    pub skipped: usize,
}

/// Where a target stands after the most recent scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    Unscanned,
    NotFound,
    ScanError(String),
    /// The clear went ahead but the directory could not be sized afterwards.
    RescanError(String),
    Scanned(DirSize),
}

/// One configured directory to be scanned and optionally cleared.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub path: PathBuf,
    pub display_name: String,
    pub category: String,
    pub warning: Option<String>,
    pub status: TargetStatus,
}

impl ScanTarget {
    pub fn new(
        path: impl Into<PathBuf>,
        display_name: impl Into<String>,
        category: impl Into<String>,
        warning: Option<&str>,
    ) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
            category: category.into(),
            warning: warning.map(str::to_string),
            status: TargetStatus::Unscanned,
        }
    }

    /// Missing or unscannable on the first pass. Such targets are never prompted.
    pub fn is_critical(&self) -> bool {
        matches!(
            self.status,
            TargetStatus::NotFound | TargetStatus::ScanError(_)
        )
    }

    pub fn critical_message(&self) -> Option<String> {
        match &self.status {
            TargetStatus::NotFound => Some(format!("Not found: {}. Skip.", self.path.display())),
            TargetStatus::ScanError(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn dir_size(&self) -> Option<DirSize> {
        match self.status {
            TargetStatus::Scanned(size) => Some(size),
            _ => None,
        }
    }
}

/// The trait every configured target implements.
pub trait Category {
    /// Machine-readable name used in log lines (e.g. "system-caches").
    fn name(&self) -> &'static str;

    /// Human-readable label for display (e.g. "System Caches").
    fn label(&self) -> &'static str;

    /// Short category tag shown next to the label.
    fn kind(&self) -> &'static str;

    fn warning(&self) -> Option<&'static str> {
        None
    }

    /// Directory this category covers, relative to the user's home.
    fn path(&self, home: &Path) -> PathBuf;

    fn target(&self, home: &Path) -> ScanTarget {
        ScanTarget::new(self.path(home), self.label(), self.kind(), self.warning())
    }
}
