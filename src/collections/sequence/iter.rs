use std::iter::{Enumerate, FusedIterator};
use std::slice;
use std::vec;

use super::Sequence;

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A borrowed iterator over the `(index, &element)` pairs of a [`Sequence`], created by
/// [`Sequence::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: Enumerate<slice::Iter<'a, T>>,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(iter: slice::Iter<'a, T>) -> Entries<'a, T> {
        Entries {
            inner: iter.enumerate(),
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}
