mod app;
mod constants;
mod errors;
mod generation;
mod logging;
mod providers;
mod screens;
mod shapes;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    logging::logger::{init_logger, log_info},
    providers::{
        fs::{
            path::{get_base_path, get_log_file_path},
            roster_reader::FileSystemRosterReader,
            roster_writer::FileSystemRosterWriter,
            settings_reader::FileSystemSettingsReader,
            settings_writer::FileSystemSettingsWriter,
        },
        roster_reader::RosterReader,
        settings_reader::load_settings,
    },
    screens::screen::AppAction,
    shapes::settings::init_settings,
};
use crokey::crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let base_dir = get_base_path().expect("cannot get app directory");

    // init logger
    init_logger(get_log_file_path(&base_dir));

    let settings_reader = FileSystemSettingsReader::new(&base_dir);
    let settings_writer = FileSystemSettingsWriter::new(&base_dir);
    let roster_reader = FileSystemRosterReader::new(&base_dir);
    let roster_writer = FileSystemRosterWriter::new(&base_dir);
    init_settings(load_settings(&settings_reader, &settings_writer).await);
    let roster = roster_reader.read().await?;
    log_info(format!("loaded roster with {} players", roster.len()).as_str());
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(
        &mut terminal,
        App::new(roster, Arc::new(roster_reader), Arc::new(roster_writer)),
    )
    .await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |           body             |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(container[2]);
            let header =
                Paragraph::new("⚽ teams4all").style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            if let Some(screen) = app.current_screen() {
                screen.render(f, container[1], footer[0], footer[1]);
            }
        })?;
        // short poll so generation progress keeps redrawing without key presses
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.kind, app.current_screen()) {
                    (_, KeyEventKind::Release, _) => continue,
                    (_, _, Some(screen)) => match screen.handle_key(key).await {
                        AppAction::None => {}
                        AppAction::SwitchScreen(new_screen) => app.push_screen(new_screen),
                        AppAction::Back(refresh, count) => app.pop_screen(refresh, count).await,
                        AppAction::Quit(result) => return result,
                    },
                    _ => {}
                }
            }
        }
    }
}
