use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use engine_logging::engine_info;
use estimator_core::{update, AppState, Msg};
use estimator_engine::ConnectorSettings;
use ratatui::{backend::CrosstermBackend, Terminal};

use super::effects::EffectRunner;
use super::ui::input::{UiAction, UiState};
use super::ui::render::render;

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Input poll interval; engine completions are picked up at this cadence.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app(settings: ConnectorSettings) -> Result<()> {
    engine_info!("Starting estimator against {}", settings.api_base);

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = App::new(settings).run(&mut terminal);

    engine_info!("Estimator exited");
    result
}

/// Puts the terminal into raw/alternate-screen mode and restores it on drop,
/// including when entering fails halfway or the UI loop unwinds.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best effort; every step is attempted even if an earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        Show
    );
}

/// Restores the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

struct App {
    state: AppState,
    ui: UiState,
    effects: EffectRunner,
    needs_render: bool,
}

impl App {
    fn new(settings: ConnectorSettings) -> Self {
        Self {
            state: AppState::new(),
            ui: UiState::default(),
            effects: EffectRunner::new(settings),
            needs_render: true,
        }
    }

    fn run(&mut self, terminal: &mut AppTerminal) -> Result<()> {
        loop {
            if self.needs_render {
                let view = self.state.view();
                self.ui.sync_focus(&view);
                let focus = self.ui.focus;
                terminal.draw(|frame| render(frame, &view, focus))?;
                self.needs_render = false;
            }

            if event::poll(TICK)? {
                let action = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.ui.handle_key(key, &self.state.view())
                    }
                    Event::Paste(text) => self.ui.handle_paste(&text),
                    Event::Resize(_, _) => UiAction::Redraw,
                    _ => UiAction::Ignored,
                };
                match action {
                    UiAction::Dispatch(msg) => self.dispatch_msg(msg),
                    UiAction::Redraw => self.needs_render = true,
                    UiAction::Quit => return Ok(()),
                    UiAction::Ignored => {}
                }
            }

            self.process_pending_messages();
        }
    }

    fn process_pending_messages(&mut self) {
        for msg in self.effects.drain_messages() {
            self.dispatch_msg(msg);
        }
        self.dispatch_msg(Msg::Tick);
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let mut inbox = vec![msg];
        while let Some(msg) = inbox.pop() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            if state.consume_dirty() {
                self.needs_render = true;
            }
            self.state = state;
            inbox.extend(self.effects.run(effects));
        }
    }
}
