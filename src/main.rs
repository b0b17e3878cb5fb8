mod api;
mod app;
mod cli;
mod codec;
mod config;
mod dispatch;
mod forms;
mod handlers;
mod input;
mod logging;
mod models;
mod router;
mod session;
mod theme;
mod ui;
mod validate;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use crate::api::ReqwestTransport;
use crate::app::App;
use crate::config::Config;
use crate::dispatch::{Completed, Dispatcher, Request};

fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();
    let config = Config::load(&args).context("failed to load configuration")?;
    logging::init(&config)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let (dispatcher, completed) = Dispatcher::new(runtime.handle().clone());
    let mut app = App::new(&config.api_url, Arc::new(ReqwestTransport::new()));

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, &dispatcher, completed);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    info!("exiting");
    result.map_err(Into::into)
}

fn dispatch_all(dispatcher: &Dispatcher, requests: Vec<Request>) {
    for request in requests {
        dispatcher.dispatch(request);
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut completed: UnboundedReceiver<Completed>,
) -> io::Result<()> {
    while !app.should_quit {
        let follow_ups = app.drain_completed(&mut completed);
        dispatch_all(dispatcher, follow_ups);

        terminal.draw(|frame| ui::render_app(app, frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let requests = input::handle_key(app, key);
                app.mark_in_flight(&requests);
                dispatch_all(dispatcher, requests);
            }
        }
    }

    Ok(())
}
