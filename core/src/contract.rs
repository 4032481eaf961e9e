//! Precondition violations.
//!
//! A violated precondition is a bug in the caller, not a recoverable error.
//! It is logged and turned into a panic carrying the [`Violation`].

use core::fmt;

use scriptvec_types::Scalar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An operation other than `initialize` on an unbound adapter.
    Unbound { op: &'static str },
    /// `initialize` on an adapter that already holds an array.
    AlreadyBound,
    /// The adapter's handle no longer names a live array.
    StaleHandle { op: &'static str },
    IndexOutOfBounds {
        op: &'static str,
        index: isize,
        len: usize,
    },
    Empty { op: &'static str },
    /// The array holds elements of another scalar type.
    ElementType { op: &'static str, expected: Scalar },
    /// Distance between cursors of two different adapters.
    ForeignCursor,
    /// A bound adapter was dropped without `release()`.
    NotReleased,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unbound { op } => write!(f, "`{op}` called on an unbound array"),
            Violation::AlreadyBound => f.write_str("`initialize` called on a bound array"),
            Violation::StaleHandle { op } => {
                write!(f, "`{op}` called with a handle to a freed array")
            }
            Violation::IndexOutOfBounds { op, index, len } => {
                write!(f, "`{op}` index {index} out of bounds for length {len}")
            }
            Violation::Empty { op } => write!(f, "`{op}` called on an empty array"),
            Violation::ElementType { op, expected } => {
                write!(f, "`{op}` found an element that is not a {expected}")
            }
            Violation::ForeignCursor => {
                f.write_str("distance between cursors of different arrays")
            }
            Violation::NotReleased => f.write_str("array dropped without release()"),
        }
    }
}

#[cold]
#[track_caller]
pub(crate) fn violated(violation: Violation) -> ! {
    tracing::error!(%violation, "contract violated");
    panic!("contract violation: {violation}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn display() {
        expect!["`item` index 5 out of bounds for length 2"].assert_eq(
            &Violation::IndexOutOfBounds {
                op: "item",
                index: 5,
                len: 2,
            }
            .to_string(),
        );
        expect!["`push_back` called on an unbound array"]
            .assert_eq(&Violation::Unbound { op: "push_back" }.to_string());
        expect!["`front` found an element that is not a string"].assert_eq(
            &Violation::ElementType {
                op: "front",
                expected: Scalar::Str,
            }
            .to_string(),
        );
    }

    #[test]
    #[should_panic(expected = "contract violation: array dropped without release()")]
    fn violated_panics() {
        crate::test_utils::init_test_logging();
        violated(Violation::NotReleased);
    }
}
