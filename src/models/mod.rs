mod answer;
mod question;

pub use answer::Answer;
pub use question::{Question, QuestionType};

/// Which widget currently has focus in the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ColoredBox,
    DoubleHalf,
}
