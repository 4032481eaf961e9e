//! Slot+generation handle table for engine-owned arrays.
//!
//! Released handles have stale generation counters and resolve to `None`
//! instead of aliasing a newer array. Double release is a no-op.

use core::cell::{Cell, Ref, RefCell, RefMut};
use core::fmt;

use bumpalo::Bump;

/// Token naming one array inside a resource manager.
///
/// Upper 32 bits are the slot index, lower 32 bits the generation. A handle
/// does not own anything; copying it does not touch the reference count.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayHandle(u64);

static_assertions::assert_eq_size!(ArrayHandle, u64);

impl ArrayHandle {
    fn encode(slot: u32, generation: u32) -> Self {
        Self(((slot as u64) << 32) | (generation as u64))
    }

    pub fn slot(self) -> u32 {
        (self.0 >> 32) as u32
    }

    pub fn generation(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Debug for ArrayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayHandle({}:{})", self.slot(), self.generation())
    }
}

struct Slot<T> {
    generation: Cell<u32>,
    data: RefCell<Option<T>>,
}

impl<T> Slot<T> {
    // A mutably borrowed slot is occupied.
    fn is_occupied(&self) -> bool {
        self.data.try_borrow().map_or(true, |data| data.is_some())
    }
}

/// A slot table whose slots live in a bump arena.
///
/// Slots never move, and each has its own `RefCell`, so values behind two
/// different handles can be borrowed independently. Freed slots are reused
/// through a free list. Values still present when the table is dropped are
/// dropped with it (the arena itself never runs destructors).
pub struct SlotTable<'arena, T> {
    arena: &'arena Bump,
    slots: RefCell<Vec<&'arena Slot<T>>>,
    free_list: RefCell<Vec<u32>>,
}

impl<'arena, T> SlotTable<'arena, T> {
    pub fn new(arena: &'arena Bump) -> Self {
        Self {
            arena,
            slots: RefCell::new(Vec::new()),
            free_list: RefCell::new(Vec::new()),
        }
    }

    /// Insert a value and return its handle.
    pub fn insert(&self, value: T) -> ArrayHandle {
        let reused = self.free_list.borrow_mut().pop();
        if let Some(slot_idx) = reused {
            let slot = self.slots.borrow()[slot_idx as usize];
            *slot.data.borrow_mut() = Some(value);
            ArrayHandle::encode(slot_idx, slot.generation.get())
        } else {
            let mut slots = self.slots.borrow_mut();
            let slot_idx = slots.len() as u32;
            let slot: &'arena Slot<T> = self.arena.alloc(Slot {
                generation: Cell::new(0),
                data: RefCell::new(Some(value)),
            });
            slots.push(slot);
            ArrayHandle::encode(slot_idx, 0)
        }
    }

    fn slot(&self, handle: ArrayHandle) -> Option<&'arena Slot<T>> {
        let slot = *self.slots.borrow().get(handle.slot() as usize)?;
        (slot.generation.get() == handle.generation()).then_some(slot)
    }

    pub fn contains(&self, handle: ArrayHandle) -> bool {
        self.slot(handle).is_some_and(Slot::is_occupied)
    }

    /// Borrow the value behind a handle.
    ///
    /// Returns `None` if the handle is stale or was never valid. Panics if
    /// the value is currently borrowed mutably.
    pub fn get(&self, handle: ArrayHandle) -> Option<Ref<'_, T>> {
        let slot = self.slot(handle)?;
        Ref::filter_map(slot.data.borrow(), Option::as_ref).ok()
    }

    /// Mutably borrow the value behind a handle.
    ///
    /// Returns `None` if the handle is stale. Panics if the value is
    /// currently borrowed.
    pub fn get_mut(&self, handle: ArrayHandle) -> Option<RefMut<'_, T>> {
        let slot = self.slot(handle)?;
        RefMut::filter_map(slot.data.borrow_mut(), Option::as_mut).ok()
    }

    /// Remove the value behind a handle, returning it.
    ///
    /// Bumps the generation and recycles the slot. A slot whose generation
    /// wraps to 0 is retired instead, so that handles from its first epoch
    /// can never resolve again.
    pub fn remove(&self, handle: ArrayHandle) -> Option<T> {
        let slot = self.slot(handle)?;
        let value = slot.data.borrow_mut().take()?;
        let generation = slot.generation.get().wrapping_add(1);
        slot.generation.set(generation);
        if generation != 0 {
            self.free_list.borrow_mut().push(handle.slot());
        }
        Some(value)
    }

    /// Handles of all occupied slots, in slot order.
    pub fn handles(&self) -> Vec<ArrayHandle> {
        self.slots
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
            .map(|(idx, slot)| ArrayHandle::encode(idx as u32, slot.generation.get()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Drop for SlotTable<'_, T> {
    fn drop(&mut self) {
        for slot in self.slots.get_mut().iter() {
            if let Ok(mut data) = slot.data.try_borrow_mut() {
                data.take();
            }
        }
    }
}
