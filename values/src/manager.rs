use core::cell::{Ref, RefMut};

use scriptvec_types::{DeclError, Ty};

use crate::array::ManagedArray;
use crate::handle::ArrayHandle;
use crate::options::ContractMode;

/// The engine's side of the contract with an array adapter: resolve a type
/// declaration, create an array, hand out borrows of it and release it.
///
/// Methods take `&self`; implementations use interior mutability, so any
/// number of adapters may hold the same manager.
pub trait ResourceManager {
    type Array: ManagedArray;

    /// How strictly adapters bound to this manager check their preconditions.
    fn contract_mode(&self) -> ContractMode;

    fn resolve_type(&self, decl: &str) -> Result<Ty, DeclError>;

    /// Create an array of `len` zero values with a reference count of 1.
    ///
    /// Returns `None` if the manager cannot hold arrays of `ty`.
    fn create_array(&self, len: usize, ty: &Ty) -> Option<ArrayHandle>;

    /// `None` if the handle is stale.
    fn array(&self, handle: ArrayHandle) -> Option<Ref<'_, Self::Array>>;

    fn array_mut(&self, handle: ArrayHandle) -> Option<RefMut<'_, Self::Array>>;

    /// Drop one reference. The array is freed when the count reaches zero.
    ///
    /// Returns the remaining count, or `None` if the handle is stale.
    fn release_array(&self, handle: ArrayHandle) -> Option<u32>;
}
