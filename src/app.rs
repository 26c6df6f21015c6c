use std::fs;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::clearer::clear_dir_contents;
use crate::confirm::confirm;
use crate::output::Console;
use crate::scanner::dir_size;
use crate::target::{ScanTarget, TargetStatus};

/// Byte totals of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Accessible bytes before anything was cleared.
    pub initial_bytes: u64,
    /// Accessible bytes across targets that ended in a normal state.
    pub final_bytes: u64,
}

/// One interactive pass over the configured targets.
pub struct Session<'a, W> {
    targets: Vec<ScanTarget>,
    input: &'a mut dyn BufRead,
    console: Console<W>,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(
        targets: Vec<ScanTarget>,
        input: &'a mut dyn BufRead,
        console: Console<W>,
    ) -> Self {
        Self {
            targets,
            input,
            console,
        }
    }

    pub fn targets(&self) -> &[ScanTarget] {
        &self.targets
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Scan everything, walk the operator through each target, then print
    /// the final state. Only an I/O failure on stdin or stdout ends the run
    /// early.
    pub fn run(&mut self) -> io::Result<Summary> {
        let initial_bytes = self.scan_all();
        self.console.print_banner(initial_bytes)?;
        self.review_all()?;
        let final_bytes = self.summarize()?;
        Ok(Summary {
            initial_bytes,
            final_bytes,
        })
    }

    /// First pass. Returns the accessible total for the banner.
    fn scan_all(&mut self) -> u64 {
        let mut total = 0;
        for target in &mut self.targets {
            scan_initial(target);
            if let Some(size) = target.dir_size() {
                total += size.bytes;
            }
        }
        total
    }

    fn review_all(&mut self) -> io::Result<()> {
        let Session {
            targets,
            input,
            console,
        } = self;

        for target in targets.iter_mut() {
            console.print_target_header(target)?;

            if target.is_critical() {
                let msg = target.critical_message().unwrap_or_default();
                console.print_status_error(&msg)?;
                console.print_separator()?;
                continue;
            }
            let Some(size) = target.dir_size() else {
                console.print_separator()?;
                continue;
            };

            console.print_size(size)?;
            if size.bytes == 0 {
                if size.skipped == 0 {
                    console.print_empty()?;
                } else {
                    console.print_all_inaccessible()?;
                }
                console.print_separator()?;
                continue;
            }

            let question = format!("   🗑️  Clear {}?", target.display_name);
            if confirm(&mut **input, console, &question)? {
                clear_and_rescan(target, console)?;
            } else {
                info!("operator declined clearing {}", target.path.display());
                console.print_skipped_clear()?;
            }
            console.print_separator()?;
        }
        Ok(())
    }

    /// Final pass. Returns the accessible total across non-error targets.
    fn summarize(&mut self) -> io::Result<u64> {
        self.console.print_summary_header()?;
        let mut total = 0;
        for target in &self.targets {
            match &target.status {
                TargetStatus::Scanned(size) => {
                    self.console.print_summary_size(target, *size)?;
                    total += size.bytes;
                }
                TargetStatus::RescanError(_) => {
                    self.console.print_summary_error(target, "Error post-clear")?
                }
                TargetStatus::NotFound | TargetStatus::ScanError(_) => {
                    let msg = target.critical_message().unwrap_or_default();
                    self.console.print_summary_error(target, &msg)?
                }
                TargetStatus::Unscanned => {
                    self.console.print_summary_error(target, "Not scanned")?
                }
            }
        }
        self.console.print_grand_total(total)?;
        self.console.print_reboot_hint()?;
        Ok(total)
    }
}

fn scan_initial(target: &mut ScanTarget) {
    if let Err(err) = fs::metadata(&target.path) {
        if err.kind() == io::ErrorKind::NotFound {
            info!("{} does not exist", target.path.display());
            target.status = TargetStatus::NotFound;
            return;
        }
    }

    info!("scanning {}", target.path.display());
    target.status = match dir_size(&target.path) {
        Ok(size) => TargetStatus::Scanned(size),
        Err(err) => {
            warn!("scan of {} failed: {err}", target.path.display());
            TargetStatus::ScanError(format!("Scan {}: {err}", target.display_name))
        }
    };
}

fn clear_and_rescan<W: Write>(
    target: &mut ScanTarget,
    console: &mut Console<W>,
) -> io::Result<()> {
    let mut write_err = None;
    let cleared = clear_dir_contents(&target.path, &mut |event| {
        if write_err.is_none() {
            write_err = console.print_clear_event(&event).err();
        }
    });
    if let Some(err) = write_err {
        return Err(err);
    }

    match cleared {
        Ok(tally) => {
            info!(
                "cleared {}: {} deleted, {} skipped",
                target.path.display(),
                tally.deleted,
                tally.skipped
            );
            console.print_clear_tally(&tally)?;
        }
        Err(err) => {
            warn!("clearing {} failed: {err}", target.path.display());
            console.print_clear_error(target, &err)?;
        }
    }

    target.status = match dir_size(&target.path) {
        Ok(size) => TargetStatus::Scanned(size),
        Err(err) => {
            warn!("rescan of {} failed: {err}", target.path.display());
            console.print_rescan_error(target, &err)?;
            TargetStatus::RescanError(err.to_string())
        }
    };
    console.print_new_size(target)
}
