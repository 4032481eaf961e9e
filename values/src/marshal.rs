//! Marshalling between Rust element types and engine storage.
//!
//! # Implemented for
//!
//! - `bool` (`bool`)
//! - `i64` (`int`)
//! - `f64` (`double`)
//! - `String` (`string`)

use scriptvec_types::{Scalar, Ty, TyKind};

use crate::raw::Raw;

/// Mapping between a Rust type and the engine's [`Raw`] storage.
///
/// Each implementation defines how to:
/// - Construct the `Ty` for this Rust type
/// - Check if a `TyKind` matches (allocation-free)
/// - Borrow a value out of raw storage
/// - Move a value into raw storage
pub trait Marshal: Sized + 'static {
    /// Construct the `Ty` for this type (e.g., `Scalar::Int` for `i64`).
    fn ty() -> Ty {
        TyKind::Scalar(Self::SCALAR).alloc()
    }

    /// The scalar this type marshals to.
    const SCALAR: Scalar;

    /// Allocation-free structural type check.
    fn matches_ty_kind(kind: &TyKind) -> bool {
        matches!(kind, TyKind::Scalar(s) if *s == Self::SCALAR)
    }

    /// Borrow the value, or `None` if the storage holds another scalar.
    fn from_raw(raw: &Raw) -> Option<&Self>;

    fn from_raw_mut(raw: &mut Raw) -> Option<&mut Self>;

    fn into_raw(self) -> Raw;
}

impl Marshal for bool {
    const SCALAR: Scalar = Scalar::Bool;

    fn from_raw(raw: &Raw) -> Option<&Self> {
        match raw {
            Raw::Bool(b) => Some(b),
            _ => None,
        }
    }

    fn from_raw_mut(raw: &mut Raw) -> Option<&mut Self> {
        match raw {
            Raw::Bool(b) => Some(b),
            _ => None,
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Bool(self)
    }
}

impl Marshal for i64 {
    const SCALAR: Scalar = Scalar::Int;

    fn from_raw(raw: &Raw) -> Option<&Self> {
        match raw {
            Raw::Int(i) => Some(i),
            _ => None,
        }
    }

    fn from_raw_mut(raw: &mut Raw) -> Option<&mut Self> {
        match raw {
            Raw::Int(i) => Some(i),
            _ => None,
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Int(self)
    }
}

impl Marshal for f64 {
    const SCALAR: Scalar = Scalar::Float;

    fn from_raw(raw: &Raw) -> Option<&Self> {
        match raw {
            Raw::Float(x) => Some(x),
            _ => None,
        }
    }

    fn from_raw_mut(raw: &mut Raw) -> Option<&mut Self> {
        match raw {
            Raw::Float(x) => Some(x),
            _ => None,
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Float(self)
    }
}

impl Marshal for String {
    const SCALAR: Scalar = Scalar::Str;

    fn from_raw(raw: &Raw) -> Option<&Self> {
        match raw {
            Raw::Str(s) => Some(s),
            _ => None,
        }
    }

    fn from_raw_mut(raw: &mut Raw) -> Option<&mut Self> {
        match raw {
            Raw::Str(s) => Some(s),
            _ => None,
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Str(self)
    }
}
