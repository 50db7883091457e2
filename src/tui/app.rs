use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store::{Store, StoreError};
use crate::model::TaskList;

use super::draft::Draft;
use super::help::HelpState;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode. Widget state lives inside the mode that owns
/// it, so a draft only exists while editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Editing(Draft),
    HelpOverlay(HelpState),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Browsing => "BROWSE",
            Mode::Editing(_) => "NEW",
            Mode::HelpOverlay(_) => "HELP",
        }
    }
}

/// Error type for a TUI session
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl RunError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Store(_) => 2,
            RunError::Terminal(_) => 1,
        }
    }
}

/// Main application state
pub struct App {
    pub list: TaskList,
    pub mode: Mode,
    pub should_quit: bool,
    /// List changed since the last load or save
    pub dirty: bool,
    /// One-line notice for the status row
    pub status: Option<String>,
    pub theme: Theme,
    store: Store,
}

impl App {
    pub fn new(list: TaskList, store: Store) -> Self {
        App {
            list,
            mode: Mode::Browsing,
            should_quit: false,
            dirty: false,
            status: None,
            theme: Theme::default(),
            store,
        }
    }

    /// Load the task file and build the app around it
    pub fn load(store: Store) -> Result<Self, StoreError> {
        let loaded = store.load()?;
        let mut app = App::new(TaskList::new(loaded.tasks), store);
        app.status = loaded.notice;
        Ok(app)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Write the current list to the task file
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(self.list.tasks())?;
        self.dirty = false;
        self.status = Some(format!(
            "Saved {} task{} to {}",
            self.list.len(),
            if self.list.len() == 1 { "" } else { "s" },
            self.store.path().display()
        ));
        Ok(())
    }
}

/// Run the TUI application against `store`
pub fn run(store: Store) -> Result<(), RunError> {
    // Load before touching the terminal so warnings land on a normal screen
    let mut app = App::load(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal. Unsaved changes are dropped on purpose: quitting never saves.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), RunError> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key)?;
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
