use core::any::type_name;
use core::cell::{Ref, RefMut};
use core::fmt;
use core::marker::PhantomData;

use scriptvec_values::{ArrayHandle, ContractMode, ManagedArray, Marshal, ResourceManager};
use tracing::{debug, trace, warn};

use crate::contract::{Violation, violated};
use crate::error::{InitError, OutOfRange};
use crate::iter::Iter;

struct Bound<'e, M> {
    manager: &'e M,
    handle: ArrayHandle,
}

impl<M> Clone for Bound<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Bound<'_, M> {}

/// Container view of an engine-managed array of `T`.
///
/// The adapter starts unbound. [`initialize`] creates a new array in the
/// manager and holds one reference to it; [`release`] gives that reference
/// back. Every other operation requires a bound adapter.
///
/// The array is shared with the engine, so element access returns `Ref` and
/// `RefMut` guards rather than plain references.
///
/// [`initialize`]: ScriptVec::initialize
/// [`release`]: ScriptVec::release
pub struct ScriptVec<'e, T: Marshal, M: ResourceManager> {
    bound: Option<Bound<'e, M>>,
    contracts: Option<ContractMode>,
    _marker: PhantomData<fn() -> T>,
}

impl<'e, T: Marshal, M: ResourceManager> ScriptVec<'e, T, M> {
    pub fn new() -> Self {
        Self {
            bound: None,
            contracts: None,
            _marker: PhantomData,
        }
    }

    /// Override the manager's contract mode for this adapter.
    pub fn with_contracts(mut self, mode: ContractMode) -> Self {
        self.contracts = Some(mode);
        self
    }

    pub fn contract_mode(&self) -> ContractMode {
        self.contracts
            .or_else(|| self.bound.map(|b| b.manager.contract_mode()))
            .unwrap_or_default()
    }

    fn checked(&self) -> bool {
        self.contract_mode().is_checked()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    fn bound(&self, op: &'static str) -> Bound<'e, M> {
        match self.bound {
            Some(bound) => bound,
            None => violated(Violation::Unbound { op }),
        }
    }

    fn array(&self, op: &'static str) -> Ref<'_, M::Array> {
        let bound = self.bound(op);
        match bound.manager.array(bound.handle) {
            Some(array) => array,
            None => violated(Violation::StaleHandle { op }),
        }
    }

    fn array_mut(&self, op: &'static str) -> RefMut<'_, M::Array> {
        let bound = self.bound(op);
        match bound.manager.array_mut(bound.handle) {
            Some(array) => array,
            None => violated(Violation::StaleHandle { op }),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Bind to a new array of `len` zero values declared by `decl`
    /// (e.g. `array<string>` or `string[]`).
    ///
    /// Initializing a bound adapter is a contract violation; in unchecked
    /// mode the previous array is released first.
    pub fn initialize(&mut self, manager: &'e M, decl: &str, len: usize) -> Result<(), InitError> {
        if self.bound.is_some() {
            let mode = self.contracts.unwrap_or_else(|| manager.contract_mode());
            if mode.is_checked() {
                violated(Violation::AlreadyBound);
            }
            self.release();
        }

        let ty = manager
            .resolve_type(decl)
            .map_err(|source| InitError::UnknownType {
                decl: decl.to_string(),
                source,
            })?;
        let Some(elem) = ty.element() else {
            return Err(InitError::NotAnArray {
                decl: decl.to_string(),
                found: ty.clone(),
            });
        };
        if !T::matches_ty_kind(elem.kind()) {
            return Err(InitError::ElementMismatch {
                decl: decl.to_string(),
                expected: T::ty(),
                found: elem.clone(),
            });
        }
        let handle = manager
            .create_array(len, &ty)
            .ok_or_else(|| InitError::Unsupported {
                decl: decl.to_string(),
            })?;

        debug!(decl, len, ?handle, "array bound");
        self.bound = Some(Bound { manager, handle });
        Ok(())
    }

    /// The array's handle.
    ///
    /// With `add_ref` the reference count is incremented on behalf of the
    /// caller, who becomes responsible for releasing it. With
    /// `release_ownership` the adapter unbinds and hands its own reference
    /// to the caller.
    pub fn get_handle(&mut self, add_ref: bool, release_ownership: bool) -> ArrayHandle {
        let handle = if add_ref {
            self.share_handle()
        } else {
            self.handle()
        };
        if release_ownership {
            self.bound = None;
            debug!(?handle, "array detached");
        }
        handle
    }

    pub fn handle(&self) -> ArrayHandle {
        self.bound("handle").handle
    }

    /// The handle, with one new reference owned by the caller.
    pub fn share_handle(&self) -> ArrayHandle {
        let refs = self.array("share_handle").add_ref();
        let handle = self.handle();
        debug!(?handle, refs, "array shared");
        handle
    }

    /// Unbind, transferring the adapter's reference to the caller.
    pub fn detach(&mut self) -> ArrayHandle {
        self.get_handle(false, true)
    }

    /// Drop the adapter's reference and unbind.
    pub fn release(&mut self) {
        let bound = self.bound("release");
        let checked = self.checked();
        self.bound = None;
        match bound.manager.release_array(bound.handle) {
            Some(refs) => debug!(handle = ?bound.handle, refs, "array released"),
            None if checked => violated(Violation::StaleHandle { op: "release" }),
            None => warn!(handle = ?bound.handle, "released a freed array"),
        }
    }

    // ------------------------------------------------------------------
    // Size
    // ------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.array("len").len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn capacity(&self) -> usize {
        self.array("capacity").capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.array("is_empty").is_empty()
    }

    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Grow with zero values or truncate to exactly `len` elements.
    pub fn resize(&mut self, len: usize) {
        trace!(len, "resize");
        self.array_mut("resize").resize(len);
    }

    pub fn reserve(&mut self, capacity: usize) {
        trace!(capacity, "reserve");
        self.array_mut("reserve").reserve(capacity);
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    pub(crate) fn lookup(&self, op: &'static str, index: usize) -> Option<Ref<'_, T>> {
        let raw = Ref::filter_map(self.array(op), |array| array.at(index)).ok()?;
        Some(Ref::map(raw, |raw| {
            T::from_raw(raw).unwrap_or_else(|| element_type::<T>(op))
        }))
    }

    pub(crate) fn lookup_mut(&self, op: &'static str, index: usize) -> Option<RefMut<'_, T>> {
        let raw = RefMut::filter_map(self.array_mut(op), |array| array.at_mut(index)).ok()?;
        Some(RefMut::map(raw, |raw| {
            T::from_raw_mut(raw).unwrap_or_else(|| element_type::<T>(op))
        }))
    }

    pub(crate) fn check_index(&self, op: &'static str, index: isize) {
        if self.checked() {
            let len = self.len();
            if index < 0 || index as usize >= len {
                violated(Violation::IndexOutOfBounds { op, index, len });
            }
        }
    }

    fn out_of_bounds(&self, op: &'static str, index: usize) -> ! {
        violated(Violation::IndexOutOfBounds {
            op,
            index: index as isize,
            len: self.len(),
        })
    }

    pub(crate) fn item_at(&self, op: &'static str, index: usize) -> Ref<'_, T> {
        self.check_index(op, index as isize);
        self.lookup(op, index).unwrap_or_else(|| self.out_of_bounds(op, index))
    }

    pub(crate) fn item_at_mut(&self, op: &'static str, index: usize) -> RefMut<'_, T> {
        self.check_index(op, index as isize);
        self.lookup_mut(op, index).unwrap_or_else(|| self.out_of_bounds(op, index))
    }

    /// Element `index`. An invalid index is a contract violation.
    pub fn item(&self, index: usize) -> Ref<'_, T> {
        self.item_at("item", index)
    }

    pub fn item_mut(&mut self, index: usize) -> RefMut<'_, T> {
        self.item_at_mut("item_mut", index)
    }

    /// Element `index`, or [`OutOfRange`] if the array has no such element.
    pub fn at(&self, index: usize) -> Result<Ref<'_, T>, OutOfRange> {
        self.lookup("at", index).ok_or_else(|| OutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<RefMut<'_, T>, OutOfRange> {
        match self.lookup_mut("at_mut", index) {
            Some(item) => Ok(item),
            None => Err(OutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    pub fn get(&self, index: usize) -> Option<Ref<'_, T>> {
        self.lookup("get", index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<RefMut<'_, T>> {
        self.lookup_mut("get_mut", index)
    }

    fn check_non_empty(&self, op: &'static str) {
        if self.checked() && self.is_empty() {
            violated(Violation::Empty { op });
        }
    }

    pub fn front(&self) -> Ref<'_, T> {
        self.check_non_empty("front");
        self.item_at("front", 0)
    }

    pub fn front_mut(&mut self) -> RefMut<'_, T> {
        self.check_non_empty("front_mut");
        self.item_at_mut("front_mut", 0)
    }

    pub fn back(&self) -> Ref<'_, T> {
        self.check_non_empty("back");
        self.item_at("back", self.len().wrapping_sub(1))
    }

    pub fn back_mut(&mut self) -> RefMut<'_, T> {
        self.check_non_empty("back_mut");
        self.item_at_mut("back_mut", self.len().wrapping_sub(1))
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    pub fn push_back(&mut self, value: T) {
        if !self.array_mut("push_back").insert_last(value.into_raw()) {
            element_type::<T>("push_back");
        }
    }

    /// Remove the last element. Popping an empty array is a contract
    /// violation, and a no-op in unchecked mode.
    pub fn pop_back(&mut self) {
        self.check_non_empty("pop_back");
        let len = self.len();
        if len > 0 {
            self.resize(len - 1);
        }
    }

    /// Replace the contents with the items of `iter`, in order.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
    }

    /// Replace the contents with `len` copies of `value`.
    pub fn assign_fill(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        let mut array = self.array_mut("assign_fill");
        array.resize(len);
        for index in 0..len {
            if let Some(slot) = array.at_mut(index) {
                *slot = value.clone().into_raw();
            }
        }
    }

    pub fn clear(&mut self) {
        self.resize(0);
    }

    // ------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------

    pub fn iter(&self) -> Iter<'_, 'e, T, M> {
        Iter::new(self)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().map(|item| item.clone()).collect()
    }

    /// Call `f` on every element in order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        let mut array = self.array_mut("for_each_mut");
        for index in 0..array.len() {
            if let Some(raw) = array.at_mut(index) {
                match T::from_raw_mut(raw) {
                    Some(item) => f(item),
                    None => element_type::<T>("for_each_mut"),
                }
            }
        }
    }
}

#[cold]
#[track_caller]
fn element_type<T: Marshal>(op: &'static str) -> ! {
    violated(Violation::ElementType {
        op,
        expected: T::SCALAR,
    })
}

impl<T: Marshal, M: ResourceManager> Default for ScriptVec<'_, T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Marshal, M: ResourceManager> Drop for ScriptVec<'_, T, M> {
    fn drop(&mut self) {
        let Some(bound) = self.bound else {
            return;
        };
        if self.checked() && !std::thread::panicking() {
            violated(Violation::NotReleased);
        }
        warn!(handle = ?bound.handle, "array dropped without release; reference leaked");
    }
}

impl<T: Marshal, M: ResourceManager> Extend<T> for ScriptVec<'_, T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'v, 'e, T: Marshal, M: ResourceManager> IntoIterator for &'v ScriptVec<'e, T, M> {
    type Item = Ref<'v, T>;
    type IntoIter = Iter<'v, 'e, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Marshal + fmt::Debug, M: ResourceManager> fmt::Debug for ScriptVec<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            None => write!(f, "ScriptVec<{}>(unbound)", type_name::<T>()),
            Some(bound) => {
                write!(f, "ScriptVec<{}>({:?}) ", type_name::<T>(), bound.handle)?;
                f.debug_list().entries(self.iter()).finish()
            }
        }
    }
}
