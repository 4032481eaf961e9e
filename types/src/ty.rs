use alloc::rc::Rc;
use core::{fmt, hash};

use crate::flags::TyFlags;
use crate::kind::{Scalar, TyKind};

/// Shared handle to an allocated type.
///
/// Cloning is a reference-count bump. Equality and hashing are structural,
/// so two separately resolved `array<int>` types compare equal.
#[derive(Clone, Debug)]
pub struct Ty(Rc<TyNode>);

impl Ty {
    pub fn new(node: TyNode) -> Self {
        Self(Rc::new(node))
    }

    pub fn node(&self) -> &TyNode {
        &self.0
    }

    pub fn kind(&self) -> &TyKind {
        self.node().kind()
    }

    pub fn flags(&self) -> TyFlags {
        self.node().flags()
    }

    /// Element type if this is an array type.
    pub fn element(&self) -> Option<&Ty> {
        match self.kind() {
            TyKind::Array(elem) => Some(elem),
            TyKind::Scalar(_) => None,
        }
    }

    /// The scalar if this is a scalar type.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self.kind() {
            TyKind::Scalar(s) => Some(*s),
            TyKind::Array(_) => None,
        }
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.kind() == other.kind()
    }
}

impl Eq for Ty {}

impl hash::Hash for Ty {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.node().hash(state)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TyKind::Scalar(s) => write!(f, "{s}"),
            TyKind::Array(elem) => write!(f, "array<{elem}>"),
        }
    }
}

/// A type kind together with its cached flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TyNode(TyFlags, TyKind);

impl TyNode {
    pub fn new(kind: TyKind) -> Self {
        let flags = kind.compute_flags();
        Self(flags, kind)
    }

    pub fn flags(&self) -> TyFlags {
        self.0
    }

    pub fn kind(&self) -> &TyKind {
        &self.1
    }
}

impl hash::Hash for TyNode {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Flags are computed from the kind, so we don't need to hash them.
        self.kind().hash(state);
    }
}
