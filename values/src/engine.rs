//! The reference resource manager.

use core::cell::{Ref, RefCell, RefMut};

use bumpalo::Bump;
use hashbrown::HashMap;
use scriptvec_types::{DeclError, Ty, TypeRegistry};
use string_cache::DefaultAtom;
use tracing::{debug, info, warn};

use crate::array::{ManagedArray, ScriptArray};
use crate::handle::{ArrayHandle, SlotTable};
use crate::manager::ResourceManager;
use crate::message::{Message, MessageCallback, MessageKind};
use crate::options::{ContractMode, EngineOptions};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobalError {
    #[error("global '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("global '{0}' is not registered")]
    NotRegistered(String),

    #[error("handle {0:?} does not name a live array")]
    StaleHandle(ArrayHandle),
}

/// What [`Engine::shutdown`] cleaned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShutdownReport {
    /// Globals whose reference was released.
    pub released_globals: usize,
    /// Arrays still referenced after the globals were released.
    pub leaked: usize,
}

/// A minimal engine that owns script arrays and a table of named globals.
///
/// Arrays live in slots allocated from `arena`, which must outlive the
/// engine. Adapters borrow the engine, so they are released before it goes
/// away.
pub struct Engine<'arena> {
    options: EngineOptions,
    registry: TypeRegistry,
    arrays: SlotTable<'arena, ScriptArray>,
    globals: RefCell<HashMap<DefaultAtom, ArrayHandle>>,
    callback: RefCell<Option<MessageCallback>>,
    torn_down: bool,
}

impl<'arena> Engine<'arena> {
    pub fn new(options: EngineOptions, arena: &'arena Bump) -> Self {
        debug!(contracts = ?options.contracts, "engine created");
        Self {
            options,
            registry: TypeRegistry::with_builtins(),
            arrays: SlotTable::new(arena),
            globals: RefCell::new(HashMap::new()),
            callback: RefCell::new(None),
            torn_down: false,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Register a type alias usable in declarations.
    pub fn register_type(&mut self, name: &str, ty: Ty) {
        self.registry.register(name, ty);
    }

    pub fn set_message_callback(&self, callback: impl FnMut(&Message) + 'static) {
        *self.callback.borrow_mut() = Some(Box::new(callback));
    }

    /// Deliver a message to the callback, or to the log when none is set.
    fn emit(&self, message: Message) {
        if let Some(callback) = self.callback.borrow_mut().as_mut() {
            debug!(%message, "delivered to callback");
            callback(&message);
            return;
        }
        match message.kind {
            MessageKind::Error | MessageKind::Warning => warn!(%message),
            MessageKind::Information => info!(%message),
        }
    }

    /// Report an error at byte `offset` of `section`.
    fn report(&self, section: &str, offset: usize, text: String) {
        let col = section.get(..offset).map_or(offset, |s| s.chars().count()) + 1;
        self.emit(Message {
            section: section.to_string(),
            row: 1,
            col: u32::try_from(col).unwrap_or(u32::MAX),
            kind: MessageKind::Error,
            text,
        });
    }

    /// Hand one reference of `handle` over to the engine under `name`.
    ///
    /// The caller must own the reference it gives away, e.g. one obtained
    /// with `share_handle`. It is released by [`unregister_global`] or at
    /// shutdown.
    ///
    /// [`unregister_global`]: Engine::unregister_global
    pub fn register_global(&self, name: &str, handle: ArrayHandle) -> Result<(), GlobalError> {
        if !self.arrays.contains(handle) {
            return Err(GlobalError::StaleHandle(handle));
        }
        let mut globals = self.globals.borrow_mut();
        let key = DefaultAtom::from(name);
        if globals.contains_key(&key) {
            return Err(GlobalError::AlreadyRegistered(name.to_string()));
        }
        debug!(name, ?handle, "global registered");
        globals.insert(key, handle);
        Ok(())
    }

    pub fn global(&self, name: &str) -> Option<ArrayHandle> {
        self.globals.borrow().get(&DefaultAtom::from(name)).copied()
    }

    /// Remove a global and release the reference it held.
    ///
    /// Returns the array's remaining reference count.
    pub fn unregister_global(&self, name: &str) -> Result<u32, GlobalError> {
        let handle = self
            .globals
            .borrow_mut()
            .remove(&DefaultAtom::from(name))
            .ok_or_else(|| GlobalError::NotRegistered(name.to_string()))?;
        debug!(name, ?handle, "global unregistered");
        self.release_array(handle).ok_or(GlobalError::StaleHandle(handle))
    }

    pub fn ref_count(&self, handle: ArrayHandle) -> Option<u32> {
        self.arrays.get(handle).map(|array| array.ref_count())
    }

    pub fn live_arrays(&self) -> usize {
        self.arrays.len()
    }

    /// Release all globals and free whatever arrays remain.
    pub fn shutdown(mut self) -> ShutdownReport {
        self.teardown()
    }

    fn teardown(&mut self) -> ShutdownReport {
        self.torn_down = true;

        let globals: Vec<_> = self.globals.get_mut().drain().collect();
        for (name, handle) in &globals {
            if self.release_array(*handle).is_none() {
                warn!(name = &**name, ?handle, "global named a freed array");
            }
        }

        let leaked = self.arrays.handles();
        if self.options.report_leaks && !leaked.is_empty() {
            warn!(count = leaked.len(), "arrays still referenced at shutdown");
        }
        for handle in &leaked {
            self.arrays.remove(*handle);
        }

        debug!(globals = globals.len(), leaked = leaked.len(), "engine shut down");
        ShutdownReport {
            released_globals: globals.len(),
            leaked: leaked.len(),
        }
    }
}

impl Drop for Engine<'_> {
    fn drop(&mut self) {
        if !self.torn_down {
            self.teardown();
        }
    }
}

impl ResourceManager for Engine<'_> {
    type Array = ScriptArray;

    fn contract_mode(&self) -> ContractMode {
        self.options.contracts
    }

    fn resolve_type(&self, decl: &str) -> Result<Ty, DeclError> {
        self.registry.resolve(decl).inspect_err(|err| {
            self.report(decl, err.span.start, err.to_string());
        })
    }

    fn create_array(&self, len: usize, ty: &Ty) -> Option<ArrayHandle> {
        let Some(elem) = ty.element() else {
            self.report(&ty.to_string(), 0, format!("type '{ty}' is not an array type"));
            return None;
        };
        let Some(array) = ScriptArray::new(ty, len) else {
            self.report(&ty.to_string(), 0, format!("arrays of '{elem}' are not supported"));
            return None;
        };
        let handle = self.arrays.insert(array);
        debug!(%ty, len, ?handle, "array created");
        Some(handle)
    }

    fn array(&self, handle: ArrayHandle) -> Option<Ref<'_, ScriptArray>> {
        self.arrays.get(handle)
    }

    fn array_mut(&self, handle: ArrayHandle) -> Option<RefMut<'_, ScriptArray>> {
        self.arrays.get_mut(handle)
    }

    fn release_array(&self, handle: ArrayHandle) -> Option<u32> {
        let remaining = self.arrays.get(handle)?.release();
        if remaining == 0 {
            self.arrays.remove(handle);
            debug!(?handle, "array freed");
        }
        Some(remaining)
    }
}
