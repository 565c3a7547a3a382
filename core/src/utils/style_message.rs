use crate::utils::path::PathExtension;
use ansi_term::{Colour, Style};
use lazy_static::lazy_static;
use std::fmt::{Display, Formatter};
use std::path::Path;

lazy_static! {
    pub static ref RED: Style = Style::new().fg(Colour::Red);
    pub static ref GREEN: Style = Style::new().fg(Colour::Green);
    pub static ref BLUE: Style = Style::new().fg(Colour::Blue);
    pub static ref YELLOW: Style = Style::new().fg(Colour::Yellow);
    pub static ref GREY: Style = Style::new().fg(Colour::Fixed(245));
    pub static ref RED_BOLD: Style = Style::new().fg(Colour::Red).bold();
    pub static ref GREEN_BOLD: Style = Style::new().fg(Colour::Green).bold();
    pub static ref PURPLE_BOLD: Style = Style::new().fg(Colour::Purple).bold();
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleText {
    pub content: String,
    pub style: Option<&'static ansi_term::Style>,
}

impl StyleText {
    pub fn to_plain_text(&self) -> &str {
        self.content.as_str()
    }
}

impl Display for StyleText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &self
                .style
                .map(|style| style.paint(&self.content).to_string())
                .unwrap_or(self.content.clone()),
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleMessage(pub Vec<StyleText>);

impl StyleMessage {
    pub fn new() -> Self {
        StyleMessage::default()
    }

    pub fn plain_text(mut self, content: impl AsRef<str>) -> Self {
        self.0.push(StyleText {
            content: content.as_ref().to_string(),
            style: None,
        });
        self
    }

    pub fn styled_text(mut self, content: impl AsRef<str>, style: &'static ansi_term::Style) -> Self {
        self.0.push(StyleText {
            content: content.as_ref().to_string(),
            style: Some(style),
        });
        self
    }

    pub fn contains(&self, pattern: impl AsRef<str>) -> bool {
        self.0.iter().any(|st| st.content == pattern.as_ref())
    }

    pub fn join(mut self, other: StyleMessage) -> Self {
        other.0.into_iter().for_each(|m| self.0.push(m));
        self
    }

    pub fn to_plain_text(&self) -> String {
        self.0
            .iter()
            .map(|st| st.to_plain_text())
            .collect::<Vec<_>>()
            .join("")
    }
}

// format message
impl StyleMessage {
    pub(crate) fn dir_not_found(path: impl AsRef<Path>) -> Self {
        StyleMessage::new()
            .plain_text("Directory ")
            .styled_text(path.display_path(), &PURPLE_BOLD)
            .plain_text(" not found!")
    }

    pub(crate) fn not_repository(path: impl AsRef<Path>) -> Self {
        StyleMessage::new()
            .styled_text(path.display_path(), &PURPLE_BOLD)
            .plain_text(" is not inside a git work tree!")
    }

    pub(crate) fn config_file_not_found(path: impl AsRef<Path>) -> Self {
        StyleMessage::new()
            .styled_text(path.display_path(), &PURPLE_BOLD)
            .plain_text(" not found!")
    }

    pub(crate) fn ops_start(ops: impl AsRef<str>, path: impl AsRef<Path>) -> Self {
        StyleMessage::new()
            .plain_text(format!("{} in ", ops.as_ref()))
            .styled_text(path.display_path(), &PURPLE_BOLD)
    }

    pub(crate) fn git_command(command: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("$ ", &GREY)
            .styled_text(command.as_ref(), &GREY)
    }

    pub(crate) fn stash_ref(index: usize) -> Self {
        StyleMessage::new().styled_text(format!("stash@{{{}}}", index), &BLUE)
    }

    pub(crate) fn stash_saved(message: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("saved", &GREEN)
            .plain_text(" stash ")
            .join(StyleMessage::quoted_message(message))
    }

    pub(crate) fn stash_dropped(index: Option<usize>) -> Self {
        StyleMessage::new()
            .styled_text("dropped", &GREEN)
            .plain_text(" ")
            .join(StyleMessage::stash_ref(index.unwrap_or(0)))
    }

    pub(crate) fn stash_applied(index: usize, popped: bool) -> Self {
        let verb = match popped {
            true => "popped",
            false => "applied",
        };
        StyleMessage::new()
            .styled_text(verb, &GREEN)
            .plain_text(" ")
            .join(StyleMessage::stash_ref(index))
    }

    pub(crate) fn stash_renamed(index: usize, message: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("renamed", &GREEN)
            .plain_text(" ")
            .join(StyleMessage::stash_ref(index))
            .plain_text(" to ")
            .join(StyleMessage::quoted_message(message))
            .plain_text(", now at ")
            .join(StyleMessage::stash_ref(0))
    }

    pub fn step_start(number: usize, name: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text(format!("[{}]", number), &GREY)
            .plain_text(" ")
            .plain_text(name.as_ref())
    }

    pub fn step_end(number: usize, name: impl AsRef<str>, is_success: bool) -> Self {
        let (sign, style): (&str, &'static Style) = match is_success {
            true => ("√", &GREEN_BOLD),
            false => ("x", &RED_BOLD),
        };
        StyleMessage::new()
            .styled_text(sign, style)
            .plain_text(" ")
            .join(StyleMessage::step_start(number, name))
    }

    pub(crate) fn transaction_succ(operation: impl AsRef<str>, steps: usize) -> Self {
        StyleMessage::new()
            .plain_text(format!("{} finished! ", operation.as_ref()))
            .styled_text(steps.to_string(), &GREEN_BOLD)
            .plain_text(" step(s).")
    }

    pub(crate) fn partial_state(steps: &[String]) -> Self {
        StyleMessage::new()
            .styled_text("repository left partially modified", &YELLOW)
            .plain_text(" by: ")
            .plain_text(steps.join(", "))
    }

    fn quoted_message(message: impl AsRef<str>) -> Self {
        StyleMessage::new().styled_text(format!("\"{}\"", message.as_ref()), &BLUE)
    }
}

impl Display for StyleMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &self
                .0
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

impl<T> From<T> for StyleMessage
where
    T: AsRef<str>,
{
    fn from(value: T) -> Self {
        StyleMessage::new().plain_text(value.as_ref())
    }
}
