use crate::config::Config;
use crate::nav::{NavOptions, NavigationController, RouteTable};
use crate::store::HttpCollectionsSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::views::StockViews;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the console until the operator quits.
///
/// The UI loop owns the calling thread; `runtime` only executes fetches.
pub fn run(config: &Config, runtime: Handle) -> anyhow::Result<()> {
    let source = HttpCollectionsSource::new(&config.server)
        .context("building collections client")?;
    let tick_rate = config.tick_rate();

    let (mut terminal, guard) = setup_terminal().context("setting up terminal")?;
    let events = EventHandler::new(tick_rate);
    let controller = NavigationController::new(
        Arc::new(source),
        Box::new(StockViews),
        runtime,
        events.nav_sink(),
        NavOptions {
            routes: RouteTable::standard(),
            fetch_timeout: config.fetch_timeout(),
        },
    );
    let mut app = App::new(controller);
    app.navigate(&config.ui.start_path);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Nav(event)) => app.on_nav_event(event),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("console closed");
    drop(guard);
    Ok(())
}
