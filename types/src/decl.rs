//! Parser for type declarations such as `array<string>` or `int[][]`.
//!
//! Grammar (whitespace is allowed between tokens):
//!
//! ```text
//! decl := name ('<' decl '>')? ('[' ']')*
//! name := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! Arrays may nest at most [`MAX_DEPTH`] levels deep.

use alloc::format;
use alloc::string::{String, ToString};
use core::ops::Range;

use crate::kind::TyKind;
use crate::registry::TypeRegistry;
use crate::ty::Ty;

/// Deepest array nesting a declaration may spell out.
pub const MAX_DEPTH: usize = 64;

/// Failure to resolve a type declaration.
///
/// `span` is the byte range of the offending part of the declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct DeclError {
    pub kind: DeclErrorKind,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclErrorKind {
    #[error("empty type declaration")]
    Empty,

    #[error("identifier '{0}' is not a data type")]
    UnknownType(String),

    #[error("type '{0}' is not a template type")]
    NotATemplate(String),

    #[error("template '{0}' requires a subtype")]
    MissingSubtype(String),

    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },

    #[error("unexpected input after type declaration")]
    TrailingInput,

    #[error("arrays nested more than {limit} levels deep")]
    TooDeep { limit: usize },
}

pub(crate) struct Parser<'s, 'r> {
    src: &'s str,
    pos: usize,
    registry: &'r TypeRegistry,
}

impl<'s, 'r> Parser<'s, 'r> {
    pub(crate) fn new(src: &'s str, registry: &'r TypeRegistry) -> Self {
        Self {
            src,
            pos: 0,
            registry,
        }
    }

    /// Parse a complete declaration, rejecting trailing input.
    pub(crate) fn parse(mut self) -> Result<Ty, DeclError> {
        self.skip_ws();
        if self.pos == self.src.len() {
            return Err(self.error(DeclErrorKind::Empty, self.pos..self.pos));
        }
        let (ty, _) = self.decl(0)?;
        self.skip_ws();
        if self.pos != self.src.len() {
            return Err(self.error(DeclErrorKind::TrailingInput, self.pos..self.src.len()));
        }
        Ok(ty)
    }

    /// Parse one declaration inside `open` unclosed `<`. Returns the type
    /// and its array nesting depth.
    fn decl(&mut self, open: usize) -> Result<(Ty, usize), DeclError> {
        self.skip_ws();
        let start = self.pos;
        let name = self.name()?;
        let name_span = start..self.pos;
        self.skip_ws();

        let lt = self.pos;
        let (mut ty, mut depth) = if self.eat('<') {
            if !self.registry.is_template(name) {
                return Err(self.error(DeclErrorKind::NotATemplate(name.to_string()), name_span));
            }
            if open >= MAX_DEPTH {
                return Err(self.too_deep(lt));
            }
            let (inner, depth) = self.decl(open + 1)?;
            if depth >= MAX_DEPTH {
                return Err(self.too_deep(lt));
            }
            self.skip_ws();
            self.expect('>', "'>'")?;
            (TyKind::Array(inner).alloc(), depth + 1)
        } else if self.registry.is_template(name) {
            return Err(self.error(DeclErrorKind::MissingSubtype(name.to_string()), name_span));
        } else {
            let Some(ty) = self.registry.lookup(name) else {
                return Err(self.error(DeclErrorKind::UnknownType(name.to_string()), name_span));
            };
            let depth = nesting(&ty);
            (ty, depth)
        };

        loop {
            self.skip_ws();
            let bracket = self.pos;
            if !self.eat('[') {
                break;
            }
            if open + depth >= MAX_DEPTH {
                return Err(self.too_deep(bracket));
            }
            self.skip_ws();
            self.expect(']', "']'")?;
            ty = TyKind::Array(ty).alloc();
            depth += 1;
        }
        Ok((ty, depth))
    }

    fn name(&mut self) -> Result<&'s str, DeclError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            found => return Err(self.expected("a type name", found)),
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(&self.src[start..self.pos])
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char, what: &'static str) -> Result<(), DeclError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.expected(what, self.peek()))
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expected(&self, expected: &'static str, found: Option<char>) -> DeclError {
        let (found, end) = match found {
            Some(c) => (format!("'{c}'"), self.pos + c.len_utf8()),
            None => ("end of input".to_string(), self.pos),
        };
        self.error(DeclErrorKind::Expected { expected, found }, self.pos..end)
    }

    /// Nesting limit crossed by the one-byte token at `at`.
    fn too_deep(&self, at: usize) -> DeclError {
        self.error(DeclErrorKind::TooDeep { limit: MAX_DEPTH }, at..at + 1)
    }

    fn error(&self, kind: DeclErrorKind, span: Range<usize>) -> DeclError {
        DeclError { kind, span }
    }
}

/// Array nesting depth of a registered type.
fn nesting(ty: &Ty) -> usize {
    let mut depth = 0;
    let mut ty = ty;
    while let Some(elem) = ty.element() {
        depth += 1;
        ty = elem;
    }
    depth
}
