use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Error,
    Warning,
    Information,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Error => "ERR ",
            MessageKind::Warning => "WARN",
            MessageKind::Information => "INFO",
        }
    }
}

/// A diagnostic reported by the engine.
///
/// `row` and `col` are 1-based; `col` points into the declaration text when
/// the message is about a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub section: String,
    pub row: u32,
    pub col: u32,
    pub kind: MessageKind,
    pub text: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) : {} : {}",
            self.section,
            self.row,
            self.col,
            self.kind.tag(),
            self.text
        )
    }
}

/// Receives every message the engine emits.
pub type MessageCallback = Box<dyn FnMut(&Message)>;
