//! Random-access cursors over a [`ScriptVec`].
//!
//! A cursor is an adapter reference plus a signed position. Positions may
//! step outside the array (the end position, or one before the first
//! element); only dereferencing checks them.

use core::cell::{Ref, RefMut};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use scriptvec_values::{Marshal, ResourceManager};

use crate::contract::{Violation, violated};
use crate::vec::ScriptVec;

mod sealed {
    pub trait Sealed {}
}

/// Access marker for [`Cursor`]: [`Const`] or [`Mut`].
pub trait Access: sealed::Sealed {}

/// Read-only cursor access.
#[derive(Debug)]
pub enum Const {}

/// Read-write cursor access.
#[derive(Debug)]
pub enum Mut {}

impl sealed::Sealed for Const {}
impl sealed::Sealed for Mut {}
impl Access for Const {}
impl Access for Mut {}

pub struct Cursor<'v, 'e, T: Marshal, M: ResourceManager, A: Access = Const> {
    vec: &'v ScriptVec<'e, T, M>,
    pos: isize,
    _access: PhantomData<A>,
}

impl<'v, 'e, T: Marshal, M: ResourceManager, A: Access> Cursor<'v, 'e, T, M, A> {
    pub(crate) fn new(vec: &'v ScriptVec<'e, T, M>, pos: isize) -> Self {
        Self {
            vec,
            pos,
            _access: PhantomData,
        }
    }

    pub fn position(&self) -> isize {
        self.pos
    }

    fn index(&self) -> usize {
        self.vec.check_index("cursor", self.pos);
        match usize::try_from(self.pos) {
            Ok(index) => index,
            Err(_) => violated(Violation::IndexOutOfBounds {
                op: "cursor",
                index: self.pos,
                len: self.vec.len(),
            }),
        }
    }

    /// The element under the cursor.
    pub fn get(&self) -> Ref<'v, T> {
        self.vec.item_at("cursor", self.index())
    }

    /// Step forward and return the cursor (`++it`).
    pub fn inc(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Step back and return the cursor (`--it`).
    pub fn dec(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Step forward, returning the cursor as it was (`it++`).
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.pos += 1;
        old
    }

    /// Step back, returning the cursor as it was (`it--`).
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.pos -= 1;
        old
    }

    fn same_vec(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec)
    }

    /// Signed number of steps from `origin` to `self`.
    pub fn distance_from(&self, origin: &Self) -> isize {
        if !self.same_vec(origin) && self.vec.contract_mode().is_checked() {
            violated(Violation::ForeignCursor);
        }
        self.pos - origin.pos
    }

    pub fn as_const(&self) -> Cursor<'v, 'e, T, M, Const> {
        Cursor::new(self.vec, self.pos)
    }
}

impl<'v, T: Marshal, M: ResourceManager> Cursor<'v, '_, T, M, Mut> {
    /// The element under the cursor, for writing.
    pub fn get_mut(&self) -> RefMut<'v, T> {
        self.vec.item_at_mut("cursor", self.index())
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Clone for Cursor<'_, '_, T, M, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Copy for Cursor<'_, '_, T, M, A> {}

impl<T: Marshal, M: ResourceManager, A: Access> PartialEq for Cursor<'_, '_, T, M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_vec(other) && self.pos == other.pos
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Eq for Cursor<'_, '_, T, M, A> {}

impl<T: Marshal, M: ResourceManager, A: Access> PartialOrd for Cursor<'_, '_, T, M, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_vec(other).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Add<isize> for Cursor<'_, '_, T, M, A> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.pos += n;
        self
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Sub<isize> for Cursor<'_, '_, T, M, A> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.pos -= n;
        self
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> AddAssign<isize> for Cursor<'_, '_, T, M, A> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> SubAssign<isize> for Cursor<'_, '_, T, M, A> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Sub for Cursor<'_, '_, T, M, A> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> fmt::Debug for Cursor<'_, '_, T, M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("vec", &ptr::from_ref(self.vec))
            .field("pos", &self.pos)
            .finish()
    }
}

/// A cursor walking the array back to front.
///
/// It wraps a forward cursor one past the element it points at, so
/// `rbegin()` wraps `end()` and `rend()` wraps `begin()`.
pub struct RevCursor<'v, 'e, T: Marshal, M: ResourceManager, A: Access = Const> {
    base: Cursor<'v, 'e, T, M, A>,
}

impl<'v, 'e, T: Marshal, M: ResourceManager, A: Access> RevCursor<'v, 'e, T, M, A> {
    pub fn new(base: Cursor<'v, 'e, T, M, A>) -> Self {
        Self { base }
    }

    /// The underlying forward cursor.
    pub fn base(&self) -> Cursor<'v, 'e, T, M, A> {
        self.base
    }

    pub fn get(&self) -> Ref<'v, T> {
        (self.base - 1).get()
    }

    pub fn inc(&mut self) -> &mut Self {
        self.base.dec();
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.base.inc();
        self
    }

    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.base.dec();
        old
    }

    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.base.inc();
        old
    }
}

impl<'v, T: Marshal, M: ResourceManager> RevCursor<'v, '_, T, M, Mut> {
    pub fn get_mut(&self) -> RefMut<'v, T> {
        (self.base - 1).get_mut()
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Clone for RevCursor<'_, '_, T, M, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Copy for RevCursor<'_, '_, T, M, A> {}

impl<T: Marshal, M: ResourceManager, A: Access> PartialEq for RevCursor<'_, '_, T, M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Eq for RevCursor<'_, '_, T, M, A> {}

impl<T: Marshal, M: ResourceManager, A: Access> PartialOrd for RevCursor<'_, '_, T, M, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Add<isize> for RevCursor<'_, '_, T, M, A> {
    type Output = Self;

    fn add(self, n: isize) -> Self {
        Self::new(self.base - n)
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Sub<isize> for RevCursor<'_, '_, T, M, A> {
    type Output = Self;

    fn sub(self, n: isize) -> Self {
        Self::new(self.base + n)
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> AddAssign<isize> for RevCursor<'_, '_, T, M, A> {
    fn add_assign(&mut self, n: isize) {
        self.base -= n;
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> SubAssign<isize> for RevCursor<'_, '_, T, M, A> {
    fn sub_assign(&mut self, n: isize) {
        self.base += n;
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> Sub for RevCursor<'_, '_, T, M, A> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        origin.base.distance_from(&self.base)
    }
}

impl<T: Marshal, M: ResourceManager, A: Access> fmt::Debug for RevCursor<'_, '_, T, M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.base).finish()
    }
}

impl<'e, T: Marshal, M: ResourceManager> ScriptVec<'e, T, M> {
    fn end_pos(&self) -> isize {
        self.len() as isize
    }

    pub fn begin(&self) -> Cursor<'_, 'e, T, M> {
        Cursor::new(self, 0)
    }

    pub fn end(&self) -> Cursor<'_, 'e, T, M> {
        Cursor::new(self, self.end_pos())
    }

    pub fn begin_mut(&mut self) -> Cursor<'_, 'e, T, M, Mut> {
        Cursor::new(self, 0)
    }

    /// Writable `begin()` and `end()` cursors under one exclusive borrow.
    pub fn range_mut(&mut self) -> (Cursor<'_, 'e, T, M, Mut>, Cursor<'_, 'e, T, M, Mut>) {
        let end = self.end_pos();
        let this = &*self;
        (Cursor::new(this, 0), Cursor::new(this, end))
    }

    pub fn rbegin(&self) -> RevCursor<'_, 'e, T, M> {
        RevCursor::new(self.end())
    }

    pub fn rend(&self) -> RevCursor<'_, 'e, T, M> {
        RevCursor::new(self.begin())
    }

    pub fn rbegin_mut(&mut self) -> RevCursor<'_, 'e, T, M, Mut> {
        let end = self.end_pos();
        RevCursor::new(Cursor::new(self, end))
    }

    /// Writable `rbegin()` and `rend()` cursors under one exclusive borrow.
    pub fn rrange_mut(&mut self) -> (RevCursor<'_, 'e, T, M, Mut>, RevCursor<'_, 'e, T, M, Mut>) {
        let (begin, end) = self.range_mut();
        (RevCursor::new(end), RevCursor::new(begin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;
    use scriptvec_values::{ContractMode, Engine, EngineOptions};

    fn with_ints(f: impl FnOnce(&mut ScriptVec<'_, i64, Engine<'_>>)) {
        let arena = Bump::new();
        let engine = Engine::new(
            EngineOptions {
                contracts: ContractMode::Checked,
                ..EngineOptions::default()
            },
            &arena,
        );
        let mut v = ScriptVec::new();
        v.initialize(&engine, "int[]", 0).unwrap();
        v.extend([10, 20, 30, 40]);
        f(&mut v);
        v.release();
    }

    #[test]
    fn forward_walk() {
        with_ints(|v| {
            let mut seen = Vec::new();
            let mut it = v.begin();
            while it != v.end() {
                seen.push(*it.get());
                it.inc();
            }
            assert_eq!(seen, vec![10, 20, 30, 40]);
        });
    }

    #[test]
    fn post_increment_returns_old_position() {
        with_ints(|v| {
            let mut it = v.begin();
            let old = it.post_inc();
            assert_eq!(*old.get(), 10);
            assert_eq!(*it.get(), 20);
            let old = it.post_dec();
            assert_eq!(old.position(), 1);
            assert_eq!(it.position(), 0);
        });
    }

    #[test]
    fn arithmetic() {
        with_ints(|v| {
            let begin = v.begin();
            let end = v.end();
            assert_eq!(end - begin, 4);
            assert_eq!(begin - end, -4);
            assert_eq!(*(begin + 2).get(), 30);
            assert_eq!(*(end - 1).get(), 40);

            let mut it = begin;
            it += 3;
            it -= 1;
            assert_eq!(*it.get(), 30);
            assert!(begin < it && it < end);
            assert_eq!(begin.partial_cmp(&begin), Some(Ordering::Equal));
        });
    }

    #[test]
    fn write_through_mut_cursor() {
        with_ints(|v| {
            let (mut it, end) = v.range_mut();
            while it != end {
                *it.get_mut() += 1;
                it.inc();
            }
            assert_eq!(v.to_vec(), vec![11, 21, 31, 41]);

            let first = v.begin_mut();
            *first.get_mut() = 0;
            assert_eq!(*first.as_const().get(), 0);
        });
    }

    #[test]
    fn reverse_walk() {
        with_ints(|v| {
            let mut seen = Vec::new();
            let mut it = v.rbegin();
            while it != v.rend() {
                seen.push(*it.get());
                it.inc();
            }
            assert_eq!(seen, vec![40, 30, 20, 10]);

            let rb = v.rbegin();
            assert_eq!(v.rend() - rb, 4);
            assert_eq!(*(rb + 1).get(), 30);
            assert!(rb < v.rend());
            assert_eq!(rb.base(), v.end());
        });
    }

    #[test]
    fn reverse_write() {
        with_ints(|v| {
            let last = v.rbegin_mut();
            *last.get_mut() = -1;
            assert_eq!(*v.back(), -1);
        });
    }

    #[test]
    fn write_through_reverse_mut_range() {
        with_ints(|v| {
            let (mut it, rend) = v.rrange_mut();
            let mut next = 1;
            while it != rend {
                *it.get_mut() = next;
                next += 1;
                it.inc();
            }
            assert_eq!(v.to_vec(), vec![4, 3, 2, 1]);
            assert_eq!(v.rend() - v.rbegin(), 4);
        });
    }

    #[test]
    fn cursors_of_different_arrays_are_unordered() {
        let arena = Bump::new();
        let engine = Engine::new(EngineOptions::default(), &arena);
        let mut a = ScriptVec::<i64, _>::new();
        let mut b = ScriptVec::<i64, _>::new();
        a.initialize(&engine, "int[]", 1).unwrap();
        b.initialize(&engine, "int[]", 1).unwrap();

        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);

        a.release();
        b.release();
    }

    #[test]
    #[should_panic(expected = "`cursor` index 4 out of bounds for length 4")]
    fn deref_end_panics() {
        with_ints(|v| {
            v.end().get();
        });
    }

    #[test]
    #[should_panic(expected = "distance between cursors of different arrays")]
    fn foreign_distance_panics() {
        let arena = Bump::new();
        let engine = Engine::new(
            EngineOptions {
                contracts: ContractMode::Checked,
                ..EngineOptions::default()
            },
            &arena,
        );
        let mut a = ScriptVec::<i64, _>::new();
        let mut b = ScriptVec::<i64, _>::new();
        a.initialize(&engine, "int[]", 0).unwrap();
        b.initialize(&engine, "int[]", 0).unwrap();
        let _ = a.begin() - b.begin();
    }
}
