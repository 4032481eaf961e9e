use core::ops::Range;

use scriptvec_types::{DeclError, Ty};
use scriptvec_values::GlobalError;

/// Failure to bind an adapter to a new array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("cannot resolve type declaration '{decl}'")]
    UnknownType {
        decl: String,
        #[source]
        source: DeclError,
    },

    #[error("'{decl}' declares '{found}', which is not an array type")]
    NotAnArray { decl: String, found: Ty },

    #[error("'{decl}' holds '{found}' elements, expected '{expected}'")]
    ElementMismatch {
        decl: String,
        expected: Ty,
        found: Ty,
    },

    #[error("the engine cannot create arrays of type '{decl}'")]
    Unsupported { decl: String },
}

impl InitError {
    /// The declaration that failed.
    pub fn decl(&self) -> &str {
        match self {
            InitError::UnknownType { decl, .. }
            | InitError::NotAnArray { decl, .. }
            | InitError::ElementMismatch { decl, .. }
            | InitError::Unsupported { decl } => decl,
        }
    }

    /// Byte range of the offending part of the declaration.
    pub fn span(&self) -> Range<usize> {
        match self {
            InitError::UnknownType { source, .. } => source.span.clone(),
            _ => 0..self.decl().len(),
        }
    }
}

/// Checked element access past the end of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of range for an array of length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error(transparent)]
    Global(#[from] GlobalError),
}
