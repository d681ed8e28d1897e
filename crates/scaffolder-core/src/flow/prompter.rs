//! Questions and the capability that asks them

use std::io;

/// Submission check for text questions; the error is shown before re-asking
pub type Validator = fn(&str) -> Result<(), &'static str>;

#[derive(Debug, Clone)]
pub struct TextQuestion {
    pub message: String,
    /// Pre-filled value, also used when the user submits nothing
    pub initial: String,
    pub validate: Option<Validator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value reported back when selected
    pub value: String,
    /// Rendered label, may contain ANSI colors
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SelectQuestion {
    pub message: String,
    pub choices: Vec<Choice>,
    /// Index of the pre-selected choice
    pub initial: usize,
}

#[derive(Debug, Clone)]
pub enum Question {
    Text(TextQuestion),
    Select(SelectQuestion),
}

impl Question {
    pub fn message(&self) -> &str {
        match self {
            Question::Text(q) => &q.message,
            Question::Select(q) => &q.message,
        }
    }
}

/// Terminal capability used by the flow engine.
///
/// Cancellation (Esc, Ctrl-C) is reported as an `io::Error` of kind
/// `Interrupted`.
pub trait Prompter {
    fn text(&mut self, question: &TextQuestion) -> io::Result<String>;

    /// Returns the `value` of the chosen [`Choice`]
    fn select(&mut self, question: &SelectQuestion) -> io::Result<String>;

    /// A text submission failed validation and will be asked again
    fn invalid(&mut self, message: &str) -> io::Result<()>;

    /// Progress line outside of any question
    fn step(&mut self, message: &str) -> io::Result<()>;
}
