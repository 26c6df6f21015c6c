use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::clearer::{ClearEvent, ClearTally};
use crate::render::{Render, Style};
use crate::target::{DirSize, ScanTarget};
use crate::utils::format_size;

const SEPARATOR_WIDTH: usize = 30;

/// Operator-facing report. Every line goes through the injected renderer.
pub struct Console<W> {
    out: W,
    style: Box<dyn Render>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, style: Box<dyn Render>) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        self.style.render(text, style)
    }

    fn line(&mut self, text: &str, style: Style) -> io::Result<()> {
        let painted = self.paint(text, style);
        writeln!(self.out, "{painted}")
    }

    fn size(&self, bytes: Option<u64>) -> String {
        match bytes {
            Some(bytes) => self.paint(&format_size(bytes), Style::Size),
            None => self.paint("N/A", Style::Error),
        }
    }

    fn name(&self, target: &ScanTarget) -> String {
        self.paint(&target.display_name, Style::Name)
    }

    fn path(&self, path: &Path) -> String {
        self.paint(&path.display().to_string(), Style::Path)
    }

    fn sized(&self, text: String, skipped: usize, suffix: &str) -> String {
        if skipped == 0 {
            return text;
        }
        let note = self.paint(&format!("({skipped} {suffix})"), Style::Skipped);
        format!("{text} {note}")
    }

    pub fn print_banner(&mut self, total_bytes: u64) -> io::Result<()> {
        let title = self.paint("🌸 Clir:", Style::Title);
        let size = self.size(Some(total_bytes));
        let rule = self.paint(&"═".repeat(SEPARATOR_WIDTH), Style::Separator);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "  {title} {size}")?;
        writeln!(self.out, "{rule}")
    }

    pub fn print_target_header(&mut self, target: &ScanTarget) -> io::Result<()> {
        let heading = format!("📁 Dir: {} [{}]", target.display_name, target.category);
        self.line(&heading, Style::Name)?;
        let path = self.path(&target.path);
        self.line(&format!("   Path: {path}"), Style::Info)?;
        if let Some(warning) = &target.warning {
            self.line(&format!("   ⚠️  {warning}"), Style::Warning)?;
        }
        Ok(())
    }

    pub fn print_status_error(&mut self, msg: &str) -> io::Result<()> {
        self.line(&format!("   Status: {msg}"), Style::Error)
    }

    pub fn print_size(&mut self, size: DirSize) -> io::Result<()> {
        let text = format!("   Size: {}", self.size(Some(size.bytes)));
        let text = self.sized(text, size.skipped, "inaccessible");
        self.line(&text, Style::Info)
    }

    pub fn print_empty(&mut self) -> io::Result<()> {
        self.line("   💨 Empty.", Style::Info)
    }

    pub fn print_all_inaccessible(&mut self) -> io::Result<()> {
        self.line("   💨 All contents inaccessible.", Style::Info)
    }

    pub fn print_prompt(&mut self, question: &str) -> io::Result<()> {
        let prompt = self.paint(&format!("{question} [y/N]: "), Style::Prompt);
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }

    pub fn print_invalid_answer(&mut self) -> io::Result<()> {
        self.line("   Invalid input. Please enter 'y' or 'n'.", Style::Warning)
    }

    pub fn print_clear_event(&mut self, event: &ClearEvent<'_>) -> io::Result<()> {
        match event {
            ClearEvent::Empty => self.line("   💨 Empty or all inaccessible.", Style::Info),
            ClearEvent::Started { path, children } => {
                let path = self.path(path);
                self.line(&format!("   ✨ Clearing {path} ({children} items)..."), Style::Info)
            }
            ClearEvent::Deleted { path } => {
                let path = self.path(path);
                self.line(&format!("      🗑️  {path}"), Style::Info)
            }
            ClearEvent::Skipped { path, error } => {
                let path = self.path(path);
                self.line(&format!("      ⚠️  Del {path}: {error}"), Style::Warning)
            }
        }
    }

    pub fn print_clear_tally(&mut self, tally: &ClearTally) -> io::Result<()> {
        if tally.deleted > 0 {
            self.line(
                &format!("   ✅ Deleted {} items.", tally.deleted),
                Style::Success,
            )?;
        }
        if tally.skipped > 0 {
            self.line(
                &format!("   ⚠️  Skipped {} items.", tally.skipped),
                Style::Warning,
            )?;
        }
        Ok(())
    }

    pub fn print_clear_error(
        &mut self,
        target: &ScanTarget,
        err: &dyn fmt::Display,
    ) -> io::Result<()> {
        let name = self.name(target);
        self.line(&format!("   ❌ Clear {name}: {err}"), Style::Error)
    }

    pub fn print_rescan_error(
        &mut self,
        target: &ScanTarget,
        err: &dyn fmt::Display,
    ) -> io::Result<()> {
        let name = self.name(target);
        self.line(&format!("   ⚠️  Size recalc {name}: {err}"), Style::Warning)
    }

    pub fn print_new_size(&mut self, target: &ScanTarget) -> io::Result<()> {
        let size = target.dir_size();
        let name = self.name(target);
        let text = format!("   📊 New Size {name}: {}", self.size(size.map(|s| s.bytes)));
        self.line(&text, Style::Info)?;
        match size {
            Some(size) if size.skipped > 0 => {
                let note = format!("      ({} still inaccessible)", size.skipped);
                self.line(&note, Style::Skipped)
            }
            _ => Ok(()),
        }
    }

    pub fn print_skipped_clear(&mut self) -> io::Result<()> {
        self.line("   👍 Skipped clearing.", Style::Success)
    }

    pub fn print_separator(&mut self) -> io::Result<()> {
        self.line(&"-".repeat(SEPARATOR_WIDTH), Style::Separator)
    }

    pub fn print_summary_header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.line("🎉 Final Summary:", Style::Header)
    }

    pub fn print_summary_error(&mut self, target: &ScanTarget, msg: &str) -> io::Result<()> {
        let name = self.name(target);
        self.line(&format!("   {name}: {msg}"), Style::Error)
    }

    pub fn print_summary_size(&mut self, target: &ScanTarget, size: DirSize) -> io::Result<()> {
        let text = format!("   {}: {}", self.name(target), self.size(Some(size.bytes)));
        let text = self.sized(text, size.skipped, "inaccessible");
        self.line(&text, Style::Info)
    }

    pub fn print_grand_total(&mut self, total_bytes: u64) -> io::Result<()> {
        let size = self.size(Some(total_bytes));
        let label = self.paint("Total accessible:", Style::Header);
        writeln!(self.out, "   {label} {size}")
    }

    pub fn print_reboot_hint(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.line(
            "To trigger macOS to recalculate your disk space, reboot your Mac",
            Style::Name,
        )
    }
}
