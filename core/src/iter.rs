use core::cell::Ref;
use core::iter::FusedIterator;

use scriptvec_values::{Marshal, ResourceManager};

use crate::vec::ScriptVec;

/// Iterator over the elements of a [`ScriptVec`], front to back.
///
/// The range is fixed when the iterator is created. If the engine shrinks
/// the array underneath it, iteration stops early.
pub struct Iter<'v, 'e, T: Marshal, M: ResourceManager> {
    vec: &'v ScriptVec<'e, T, M>,
    front: usize,
    back: usize,
}

impl<'v, 'e, T: Marshal, M: ResourceManager> Iter<'v, 'e, T, M> {
    pub(crate) fn new(vec: &'v ScriptVec<'e, T, M>) -> Self {
        Self {
            vec,
            front: 0,
            back: vec.len(),
        }
    }

    fn fetch(&mut self, index: usize) -> Option<Ref<'v, T>> {
        let item = self.vec.lookup("iter", index);
        if item.is_none() {
            self.front = self.back;
        }
        item
    }
}

impl<'v, T: Marshal, M: ResourceManager> Iterator for Iter<'v, '_, T, M> {
    type Item = Ref<'v, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        self.fetch(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T: Marshal, M: ResourceManager> DoubleEndedIterator for Iter<'_, '_, T, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let index = self.back;
        self.fetch(index)
    }
}

impl<T: Marshal, M: ResourceManager> ExactSizeIterator for Iter<'_, '_, T, M> {}

impl<T: Marshal, M: ResourceManager> FusedIterator for Iter<'_, '_, T, M> {}
