use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use env_logger::Env;

use clir::app::Session;
use clir::categories;
use clir::output::Console;
use clir::render::{ColoredRender, PlainRender, Render, Style};
use clir::utils;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();

    let style: Box<dyn Render> = if io::stdout().is_terminal() {
        Box::new(ColoredRender)
    } else {
        Box::new(PlainRender)
    };

    let Some(home) = utils::home_dir() else {
        let msg = style.render("❌ Error getting home directory", Style::Error);
        println!("{msg}");
        return Ok(());
    };

    let targets = categories::all_targets(&home);
    let mut stdin = io::stdin().lock();
    let console = Console::new(io::stdout().lock(), style);
    let mut session = Session::new(targets, &mut stdin, console);
    session.run().context("interactive session failed")?;
    Ok(())
}
