use core::fmt;

use crate::flags::TyFlags;
use crate::ty::{Ty, TyNode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TyKind {
    /// Scalar types (Bool, Int, Float, Str)
    Scalar(Scalar),

    /// Array type with element type
    Array(Ty),
}

impl TyKind {
    pub fn compute_flags(&self) -> TyFlags {
        match self {
            TyKind::Scalar(_) => TyFlags::empty(),
            TyKind::Array(elem) => {
                let inner = elem.flags();
                let nested = if inner.contains(TyFlags::HAS_ARRAY) {
                    TyFlags::NESTED_ARRAY
                } else {
                    TyFlags::empty()
                };
                TyFlags::HAS_ARRAY | nested | inner
            }
        }
    }

    pub fn alloc(self) -> Ty {
        Ty::new(TyNode::new(self))
    }
}

/// Scalar type variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// Boolean type
    Bool,

    /// 64-bit signed integer type
    Int,

    /// 64-bit floating-point type
    Float,

    /// String type
    Str,
}

impl Scalar {
    /// Canonical declaration name of this scalar.
    pub fn name(self) -> &'static str {
        match self {
            Scalar::Bool => "bool",
            Scalar::Int => "int",
            Scalar::Float => "double",
            Scalar::Str => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
