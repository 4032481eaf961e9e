use core::fmt;

use scriptvec_types::Scalar;

/// Storage for one array element as the engine keeps it.
#[derive(Clone, PartialEq)]
pub enum Raw {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Raw {
    /// The zero value of a scalar: `false`, `0`, `0.0` or `""`.
    pub fn zeroed(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool => Raw::Bool(false),
            Scalar::Int => Raw::Int(0),
            Scalar::Float => Raw::Float(0.0),
            Scalar::Str => Raw::Str(String::new()),
        }
    }

    pub fn scalar(&self) -> Scalar {
        match self {
            Raw::Bool(_) => Scalar::Bool,
            Raw::Int(_) => Scalar::Int,
            Raw::Float(_) => Scalar::Float,
            Raw::Str(_) => Scalar::Str,
        }
    }
}

impl fmt::Debug for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raw::Bool(b) => write!(f, "{b}"),
            Raw::Int(i) => write!(f, "{i}"),
            Raw::Float(x) => write!(f, "{x:?}"),
            Raw::Str(s) => write!(f, "{s:?}"),
        }
    }
}
