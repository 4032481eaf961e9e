//! Type construction macro.
//!
//! # Example
//!
//! ```
//! use scriptvec_types::{ty, Scalar, TyKind};
//!
//! let int_ty = ty!(Int);
//! assert_eq!(int_ty.kind(), &TyKind::Scalar(Scalar::Int));
//!
//! let strings = ty!(Array[Str]);
//! let grid = ty!(Array[Array[Float]]);
//! assert_eq!(grid.element(), Some(&ty!(Array[Float])));
//! # let _ = strings;
//! ```

/// Macro for constructing types with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Int`, `Str`, `Bool`, `Float` | Scalar types |
/// | `Array[T]` | Array type |
#[macro_export]
macro_rules! ty {
    // === Scalar types ===

    (Int) => {
        $crate::TyKind::Scalar($crate::Scalar::Int).alloc()
    };
    (Float) => {
        $crate::TyKind::Scalar($crate::Scalar::Float).alloc()
    };
    (Bool) => {
        $crate::TyKind::Scalar($crate::Scalar::Bool).alloc()
    };
    (Str) => {
        $crate::TyKind::Scalar($crate::Scalar::Str).alloc()
    };

    // === Array[T] ===

    (Array[$($inner:tt)+]) => {{
        let elem = $crate::ty!($($inner)+);
        $crate::TyKind::Array(elem).alloc()
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Scalar, TyKind};

    #[test]
    fn test_scalar_int() {
        assert_eq!(ty!(Int).kind(), &TyKind::Scalar(Scalar::Int));
    }

    #[test]
    fn test_scalar_str() {
        assert_eq!(ty!(Str).kind(), &TyKind::Scalar(Scalar::Str));
    }

    #[test]
    fn test_scalar_bool() {
        assert_eq!(ty!(Bool).kind(), &TyKind::Scalar(Scalar::Bool));
    }

    #[test]
    fn test_scalar_float() {
        assert_eq!(ty!(Float).kind(), &TyKind::Scalar(Scalar::Float));
    }

    #[test]
    fn test_array_simple() {
        let t = ty!(Array[Int]);
        match t.kind() {
            TyKind::Array(elem) => {
                assert_eq!(elem.kind(), &TyKind::Scalar(Scalar::Int));
            }
            _ => panic!("Expected Array"),
        }
    }

    #[test]
    fn test_array_nested() {
        let t = ty!(Array[Array[Str]]);
        match t.kind() {
            TyKind::Array(outer) => match outer.kind() {
                TyKind::Array(inner) => {
                    assert_eq!(inner.kind(), &TyKind::Scalar(Scalar::Str));
                }
                _ => panic!("Expected inner Array"),
            },
            _ => panic!("Expected Array"),
        }
    }
}
