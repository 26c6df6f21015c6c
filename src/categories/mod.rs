mod system_caches;
mod system_logs;

use std::path::Path;

use log::debug;

use crate::target::{Category, ScanTarget};

pub fn all_categories() -> Vec<Box<dyn Category>> {
    vec![
        Box::new(system_caches::SystemCaches),
        Box::new(system_logs::SystemLogs),
    ]
}

/// Build the ordered list of targets for a run.
pub fn all_targets(home: &Path) -> Vec<ScanTarget> {
    all_categories()
        .iter()
        .map(|c| {
            let target = c.target(home);
            debug!("configured {} at {}", c.name(), target.path.display());
            target
        })
        .collect()
}
