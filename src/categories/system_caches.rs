use std::path::{Path, PathBuf};

use crate::target::Category;

pub struct SystemCaches;

impl Category for SystemCaches {
    fn name(&self) -> &'static str {
        "system-caches"
    }

    fn label(&self) -> &'static str {
        "System Caches"
    }

    fn kind(&self) -> &'static str {
        "Cache"
    }

    fn warning(&self) -> Option<&'static str> {
        Some("Some cache subfolders might be system-protected & skipped.")
    }

    fn path(&self, home: &Path) -> PathBuf {
        home.join("Library/Caches")
    }
}
