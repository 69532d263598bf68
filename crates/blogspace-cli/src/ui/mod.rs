//! Interactive terminal UI.
//!
//! Single-threaded event loop: draw, poll for a key, translate the key
//! into a [`Command`] for the controller, react to the [`Outcome`].
//! Network requests run inline in the handler; the busy label is drawn
//! once before a request starts so the submit hint reads as disabled.

mod app;
mod draw;

use anyhow::Result;
use blogspace_app::{Command, Controller, Outcome, TokenStore, View};
use blogspace_client::BlogApi;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;

use app::{AuthMode, ComposeField, UiState};

enum Flow {
    Continue,
    Quit,
}

/// Leave raw mode and the alternate screen, ignoring failures. Safe to
/// call when neither is active.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Restores the terminal when dropped, so a panic inside the event
/// loop never strands the user on the raw alternate screen.
struct TerminalRestore;

impl Drop for TerminalRestore {
    fn drop(&mut self) {
        restore_terminal();
    }
}

pub(crate) fn run<A: BlogApi, S: TokenStore>(controller: &mut Controller<A, S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _restore = TerminalRestore;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // process::exit skips drops, so the handler restores directly.
    ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(0);
    })?;

    let mut ui = UiState::new();
    ui.clamp_selection(controller.state.posts.len());

    let result = event_loop(controller, &mut ui, &mut terminal);

    terminal.show_cursor()?;
    result
}

fn event_loop<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw::draw(f, &controller.state, ui))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match handle_key(controller, ui, terminal, key)? {
                    Flow::Quit => return Ok(()),
                    Flow::Continue => {}
                }
            }
        }
    }
}

/// Run one command against the controller, drawing the busy label
/// first so the frame on screen shows the request in flight.
fn submit<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
    command: Command,
    busy_label: &'static str,
) -> Result<Outcome> {
    ui.busy = Some(busy_label);
    terminal.draw(|f| draw::draw(f, &controller.state, ui))?;

    let outcome = controller.execute(command);
    ui.busy = None;
    Ok(outcome)
}

fn handle_key<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
    key: KeyEvent,
) -> Result<Flow> {
    if !controller.state.is_authenticated() {
        return handle_auth_key(controller, ui, terminal, key);
    }

    if ui.pending_delete.is_some() {
        return handle_confirm_key(controller, ui, terminal, key);
    }

    match controller.state.view {
        View::Compose => handle_compose_key(controller, ui, terminal, key),
        View::Posts | View::Profile => handle_main_key(controller, ui, terminal, key),
    }
}

fn handle_auth_key<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
    key: KeyEvent,
) -> Result<Flow> {
    match key.code {
        KeyCode::Esc => return Ok(Flow::Quit),
        KeyCode::Tab | KeyCode::Down => ui.auth.focus_next(),
        KeyCode::BackTab | KeyCode::Up => ui.auth.focus_previous(),
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ui.auth.toggle_mode();
        }
        KeyCode::Enter => {
            if !ui.auth.is_complete() {
                ui.auth.message = Some("All fields are required".to_string());
                return Ok(Flow::Continue);
            }

            let command = match ui.auth.mode {
                AuthMode::Login => Command::Login {
                    email: ui.auth.email.clone(),
                    password: ui.auth.password.clone(),
                },
                AuthMode::Signup => Command::Signup {
                    email: ui.auth.email.clone(),
                    password: ui.auth.password.clone(),
                    name: ui.auth.name.clone(),
                },
            };

            match submit(controller, ui, terminal, command, "Please wait...")? {
                Outcome::LoggedIn => {
                    ui.reset_session_state();
                    ui.clamp_selection(controller.state.posts.len());
                }
                Outcome::LoginFailed(message) | Outcome::SignupFailed(message) => {
                    ui.auth.message = Some(message);
                }
                Outcome::SignupAccepted(message) => {
                    ui.auth.mode = AuthMode::Login;
                    ui.auth.clear_fields();
                    ui.auth.focus = app::AuthField::Email;
                    ui.auth.message = Some(message);
                }
                _ => {}
            }
        }
        KeyCode::Backspace => {
            ui.auth.focused_mut().pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ui.auth.focused_mut().push(c);
        }
        _ => {}
    }

    Ok(Flow::Continue)
}

fn handle_confirm_key<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
    key: KeyEvent,
) -> Result<Flow> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(id) = ui.pending_delete.take() {
                // Failure stays silent; the post simply remains listed.
                let _ = submit(controller, ui, terminal, Command::DeletePost { id }, "Deleting...")?;
                ui.clamp_selection(controller.state.posts.len());
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            ui.pending_delete = None;
        }
        _ => {}
    }

    Ok(Flow::Continue)
}

fn handle_main_key<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
    key: KeyEvent,
) -> Result<Flow> {
    match key.code {
        KeyCode::Char('q') => return Ok(Flow::Quit),
        KeyCode::Char('1') => {
            controller.execute(Command::Navigate(View::Posts));
            ui.status = None;
        }
        KeyCode::Char('2') => {
            controller.execute(Command::Navigate(View::Compose));
            ui.status = None;
        }
        KeyCode::Char('3') => {
            controller.execute(Command::Navigate(View::Profile));
            ui.status = None;
        }
        KeyCode::Char('l') => {
            if let Outcome::LoggedOut = controller.execute(Command::Logout) {
                ui.reset_session_state();
            }
        }
        KeyCode::Down | KeyCode::Char('j') if controller.state.view == View::Posts => {
            ui.select_next(controller.state.posts.len());
        }
        KeyCode::Up | KeyCode::Char('k') if controller.state.view == View::Posts => {
            ui.select_previous();
        }
        KeyCode::Char('r') if controller.state.view == View::Posts => {
            let _ = submit(controller, ui, terminal, Command::RefreshPosts, "Refreshing...")?;
            ui.clamp_selection(controller.state.posts.len());
        }
        KeyCode::Char('d') if controller.state.view == View::Posts => {
            if let Some(post) = controller.state.posts.get(ui.selected)
                && controller.state.can_delete(post)
            {
                ui.pending_delete = Some(post.id);
            }
        }
        _ => {}
    }

    Ok(Flow::Continue)
}

fn handle_compose_key<A: BlogApi, S: TokenStore, B: Backend>(
    controller: &mut Controller<A, S>,
    ui: &mut UiState,
    terminal: &mut Terminal<B>,
    key: KeyEvent,
) -> Result<Flow> {
    match key.code {
        KeyCode::Esc => {
            ui.compose.clear();
            ui.status = None;
            controller.execute(Command::Navigate(View::Posts));
        }
        KeyCode::Tab => ui.compose.focus_next(),
        KeyCode::Enter => match ui.compose.focus {
            ComposeField::Title => ui.compose.focus = ComposeField::Content,
            ComposeField::Content => ui.compose.content.push('\n'),
        },
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !ui.compose.is_complete() {
                ui.status = Some("Title and content are required".to_string());
                return Ok(Flow::Continue);
            }

            let command = Command::CreatePost {
                title: ui.compose.title.clone(),
                content: ui.compose.content.clone(),
            };

            match submit(controller, ui, terminal, command, "Publishing...")? {
                Outcome::PostPublished => {
                    ui.compose.clear();
                    ui.status = None;
                    ui.clamp_selection(controller.state.posts.len());
                }
                // Failure was logged by the controller; the form stays.
                _ => {}
            }
        }
        KeyCode::Backspace => {
            ui.compose.focused_mut().pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ui.compose.focused_mut().push(c);
        }
        _ => {}
    }

    Ok(Flow::Continue)
}
