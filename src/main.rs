// folio: a terminal portfolio browser.
// Loads the bundled content document, reads env configuration, then
// hands the terminal to the app event loop.

mod app;
mod config;
mod content;
mod download;
mod email;
mod error;
mod github;
mod state;
mod theme;
mod ui;

use app::App;
use config::Config;
use content::ContentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let content = ContentStore::load()?;
    let config = Config::from_env();
    let mut app = App::new(content, config)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result?;
    Ok(())
}
