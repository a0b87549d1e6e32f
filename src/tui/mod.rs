// Interactive brainstorming interface
mod app;
mod events;
mod layout;
mod palette;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::{App, AppEvent, AppOptions, Command};
pub use events::Action;
pub use palette::Palette;
pub use rendering::{RenderState, diff_lines, render_ui};
use terminal::TerminalManager;
use tracing::info;

use crate::client::BackendClient;

/// Run the interactive TUI until the user quits.
///
/// Must be called from inside a tokio runtime; backend calls and reveal timers run as
/// tasks on it while this thread drives the UI loop.
pub fn run_interactive(client: BackendClient, options: AppOptions) -> Result<()> {
    info!(api_url = client.base_url(), provider = %options.provider, "starting interactive session");

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(client, options);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
