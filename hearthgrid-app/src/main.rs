mod cli;
mod display;
mod logging;
pub mod tui;
pub mod api;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use hearthgrid_core::{CatalogSession, SetTable};
use std::sync::Arc;
use tokio::runtime::Runtime;

use cli::opts::{Cli, Command};
use cli::commands::{run_cli, open_source};
use tui::app::TuiApp;

fn main() -> Result<()> {
    let args = Cli::parse();

    match &args.cmd {
        // Run TUI on its own thread/runtime (no nested Tokio); logs would
        // corrupt the alternate screen, so none are installed.
        Command::Tui => {
            let rt = Arc::new(Runtime::new()?);
            let source = open_source(&args)?;
            let cards = rt.block_on(source.fetch_cards())?;
            let session = CatalogSession::new(cards, SetTable::standard());
            let mut app = TuiApp::new(source, rt, session);
            app.run()
        }
        Command::Api(_) => {
            logging::init("info");
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args))
        }
        _ => {
            logging::init("warn");
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args))
        }
    }
}
