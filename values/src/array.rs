use core::cell::Cell;

use scriptvec_types::{Scalar, Ty, TyFlags};

use crate::raw::Raw;

/// A reference-counted, resizable sequence of one element type, owned by a
/// resource manager.
///
/// The reference count lives in a `Cell` so that holders of a shared borrow
/// can add and drop references; freeing at zero is the manager's business.
pub trait ManagedArray {
    fn element_ty(&self) -> &Ty;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grow with zero values or truncate to exactly `len` elements.
    fn resize(&mut self, len: usize);

    /// Ensure room for at least `capacity` elements without changing the length.
    fn reserve(&mut self, capacity: usize);

    fn at(&self, index: usize) -> Option<&Raw>;

    fn at_mut(&mut self, index: usize) -> Option<&mut Raw>;

    /// Append one element. Returns `false` if its scalar does not match.
    fn insert_last(&mut self, value: Raw) -> bool;

    /// Increment the reference count, returning the new count.
    fn add_ref(&self) -> u32;

    /// Decrement the reference count, returning the remaining count.
    fn release(&self) -> u32;

    fn ref_count(&self) -> u32;
}

/// The reference engine's array: a `Vec<Raw>` of one scalar type.
#[derive(Debug)]
pub struct ScriptArray {
    ty: Ty,
    scalar: Scalar,
    items: Vec<Raw>,
    refs: Cell<u32>,
}

impl ScriptArray {
    /// A new array of `len` zero values with a reference count of 1.
    ///
    /// Returns `None` unless `ty` is an array of a scalar.
    pub fn new(ty: &Ty, len: usize) -> Option<Self> {
        if ty.flags().contains(TyFlags::NESTED_ARRAY) {
            return None;
        }
        let elem = ty.element()?;
        let scalar = elem.as_scalar()?;
        Some(Self {
            ty: elem.clone(),
            scalar,
            items: vec![Raw::zeroed(scalar); len],
            refs: Cell::new(1),
        })
    }

    pub fn items(&self) -> &[Raw] {
        &self.items
    }
}

impl ManagedArray for ScriptArray {
    fn element_ty(&self) -> &Ty {
        &self.ty
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn resize(&mut self, len: usize) {
        self.items.resize(len, Raw::zeroed(self.scalar));
    }

    fn reserve(&mut self, capacity: usize) {
        self.items.reserve(capacity.saturating_sub(self.items.len()));
    }

    fn at(&self, index: usize) -> Option<&Raw> {
        self.items.get(index)
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut Raw> {
        self.items.get_mut(index)
    }

    fn insert_last(&mut self, value: Raw) -> bool {
        if value.scalar() != self.scalar {
            return false;
        }
        self.items.push(value);
        true
    }

    fn add_ref(&self) -> u32 {
        let n = self.refs.get() + 1;
        self.refs.set(n);
        n
    }

    fn release(&self) -> u32 {
        let n = self.refs.get().saturating_sub(1);
        self.refs.set(n);
        n
    }

    fn ref_count(&self) -> u32 {
        self.refs.get()
    }
}
