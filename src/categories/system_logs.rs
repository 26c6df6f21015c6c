use std::path::{Path, PathBuf};

use crate::target::Category;

pub struct SystemLogs;

impl Category for SystemLogs {
    fn name(&self) -> &'static str {
        "system-logs"
    }

    fn label(&self) -> &'static str {
        "System Logs"
    }

    fn kind(&self) -> &'static str {
        "Logs"
    }

    fn path(&self, home: &Path) -> PathBuf {
        home.join("Library/Logs")
    }
}
