//! # quiz-drills
//!
//! Small list-processing drills over numbers, strings and quiz questions,
//! plus two toy terminal widgets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_drills::{QuizError, load_questions_from_json, nested};
//!
//! fn main() -> Result<(), QuizError> {
//!     let questions = load_questions_from_json("questions.json")?;
//!     println!("{}", nested::to_csv(&questions));
//!
//!     // Run the widgets in the terminal
//!     quiz_drills::run_widgets()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod arrays;
mod data;
mod error;
pub mod logging;
mod models;
pub mod nested;
mod report;
pub mod terminal;
mod ui;
pub mod widgets;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;

pub use app::App;
pub use data::load_questions_from_json;
pub use error::{LoadError, QuizError};
pub use models::{Answer, Question, QuestionType, Screen};
pub use report::Summary;

/// Take over the terminal and show the widgets until the user quits.
pub fn run_widgets() -> Result<(), QuizError> {
    let mut app = App::new();
    let mut term = terminal::init()?;
    info!("Widget UI started");
    let result = run_event_loop(&mut term, &mut app);
    terminal::restore()?;
    info!("Widget UI stopped");
    result
}

fn run_event_loop(terminal: &mut terminal::WidgetTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Tab | KeyCode::BackTab => {
            app.switch_screen();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => {
            match app.screen {
                Screen::ColoredBox => handle_colored_box_input(app, key),
                Screen::DoubleHalf => handle_double_half_input(app, key),
            }
            false
        }
    }
}

fn handle_colored_box_input(app: &mut App, key: KeyCode) {
    if let KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') = key {
        app.next_color();
    }
}

fn handle_double_half_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('d') | KeyCode::Right => app.double_value(),
        KeyCode::Char('h') | KeyCode::Left => app.halve_value(),
        _ => {}
    }
}
