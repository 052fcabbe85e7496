use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

use super::error::{CapacityOverflow, IndexOutOfBounds, RangeOutOfBounds};
use super::iter::Entries;
use crate::util::result::ResultExtension;

const MAX_STRING_LEN: usize = isize::MAX as usize;

/// An ordered, growable collection with the convenience methods of a JavaScript Array.
///
/// Sequence dereferences to `[T]`, so everything available on slices (`len`, `get`, `iter`,
/// indexing, `contains`, ...) is available here as well. The methods defined on Sequence itself are
/// split into two groups:
/// - In place: [`push`](Sequence::push), [`pop`](Sequence::pop), [`shift`](Sequence::shift),
///   [`filter`](Sequence::filter), [`sort_with`](Sequence::sort_with),
///   [`reverse`](Sequence::reverse), [`fill`](Sequence::fill) and [`splice`](Sequence::splice)
///   modify the Sequence they are called on.
/// - Copying: [`to_sorted`](Sequence::to_sorted), [`to_reversed`](Sequence::to_reversed),
///   [`to_spliced`](Sequence::to_spliced), [`slice`](Sequence::slice), [`with`](Sequence::with),
///   [`map`](Sequence::map) and [`flat_map`](Sequence::flat_map) leave the original untouched and
///   return a new Sequence.
///
/// # Error Handling
/// Reads that fall outside of the Sequence degrade silently: [`at`](Sequence::at),
/// [`pop`](Sequence::pop) and [`shift`](Sequence::shift) return [`T::default()`](Default) instead.
/// Operations that would produce a new Sequence or modify a range return a [`Result`] instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Sequence.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `shift` | `O(n)` |
/// | `unshift` | `O(n)` |
/// | `append` | `O(m)` |
/// | `index_of` | `O(n)` |
/// | `filter` | `O(n)` |
/// | `sort_with` | `O(n log n)` |
/// | `splice` | `O(n+m)` |
/// | `join` | `O(n)` |
///
/// \* Amortized, pushing may need to reallocate.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new, empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub const fn new() -> Sequence<T> {
        Sequence { items: Vec::new() }
    }

    /// Creates a new, empty Sequence with room for at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence {
            items: Vec::with_capacity(cap),
        }
    }

    /// Returns the element at the provided index, or [`T::default()`](Default) if there isn't one.
    /// Negative indices are never in range.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from([10, 20, 30]);
    /// assert_eq!(seq.at(1), 20);
    /// assert_eq!(seq.at(-1), 0);
    /// assert_eq!(seq.at(3), 0);
    /// ```
    pub fn at(&self, index: isize) -> T
    where
        T: Clone + Default,
    {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.items.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Pushes the provided value onto the end of the Sequence.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Pushes all of the provided values onto the end of the Sequence, in order.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from([1, 2]);
    /// seq.append([3, 4]);
    /// assert_eq!(&*seq, &[1, 2, 3, 4]);
    /// ```
    pub fn append<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// Appends the elements of every provided list to the end of the Sequence, in place.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from(['a']);
    /// seq.concat([vec!['b', 'c'], vec![], vec!['d']]);
    /// assert_eq!(&*seq, &['a', 'b', 'c', 'd']);
    /// ```
    pub fn concat<L, I>(&mut self, lists: L)
    where
        L: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        for list in lists {
            self.items.extend(list);
        }
    }

    /// Pops the last value off the end of the Sequence, returning it if the Sequence wasn't empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes the first value of the Sequence, returning it if the Sequence wasn't empty. All
    /// following values are moved to fill the gap.
    pub fn try_shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Inserts the provided value at the start of the Sequence.
    pub fn unshift(&mut self, value: T) {
        self.items.insert(0, value);
    }

    /// Inserts the provided value at the given index, moving all following values back.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
            .throw()
        }

        self.items.insert(index, value);
    }

    /// Removes and returns the element at the provided index, moving all following values forward.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index).throw();

        self.items.remove(index)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from(["x", "y", "x"]);
    /// assert_eq!(seq.index_of(&"x"), Some(0));
    /// assert_eq!(seq.index_of(&"z"), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: Eq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: Eq,
    {
        self.iter().rposition(|item| item == value)
    }

    /// Returns true if any element of the Sequence is equal to `value`.
    pub fn includes(&self, value: &T) -> bool
    where
        T: Eq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the first element for which `pred` returns true.
    pub fn find<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.iter().find(|&item| pred(item))
    }

    /// Returns the last element for which `pred` returns true.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from([1, 5, 10, 11, 5, 3]);
    /// assert_eq!(seq.find_last(|v| *v > 4), Some(&5));
    /// assert_eq!(seq.find_last(|v| *v > 100), None);
    /// ```
    pub fn find_last<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.iter().rev().find(|&item| pred(item))
    }

    /// Returns the index of the first element for which `pred` returns true.
    pub fn find_index<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.iter().position(pred)
    }

    /// Returns the index of the last element for which `pred` returns true.
    pub fn find_last_index<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.iter().rposition(pred)
    }

    /// Returns true if `pred` holds for every element. Evaluation stops at the first element that
    /// fails, and an empty Sequence always passes.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from([2, 4, 7]);
    /// assert!(!seq.every(|v| v % 2 == 0));
    /// assert!(seq.every(|v| *v > 0));
    /// ```
    pub fn every<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.iter().all(pred)
    }

    /// Returns true if `pred` holds for at least one element, stopping at the first one that does.
    pub fn some<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.iter().any(pred)
    }

    /// Calls `f` with each element of the Sequence, in order.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Retains only the elements for which `pred` returns true, returning the retained elements.
    /// The Sequence is modified in place and the relative order of the remaining elements is kept.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from(1..=6);
    /// assert_eq!(seq.filter(|v| v % 3 == 0), &[3, 6]);
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn filter<P: FnMut(&T) -> bool>(&mut self, pred: P) -> &[T] {
        self.items.retain(pred);
        &self.items
    }

    /// Creates a new Sequence containing the result of `f` for each element.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Sequence<U> {
        self.iter().map(f).collect()
    }

    /// Creates a new Sequence by concatenating every value produced by `f`, in the order that they
    /// are produced. `f` may produce any number of values per element.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// let repeated = seq.flat_map(|v| std::iter::repeat_n(*v, *v));
    /// assert_eq!(&*repeated, &[1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<U, I, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = U>,
    {
        self.iter().flat_map(f).collect()
    }

    /// Folds every element into an accumulator from left to right, starting with
    /// [`A::default()`](Default).
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(seq.reduce(|acc: i32, v| acc + v), 10);
    /// assert_eq!(Sequence::<i32>::new().reduce(|acc: i32, v| acc + v), 0);
    /// ```
    pub fn reduce<A: Default, F: FnMut(A, &T) -> A>(&self, f: F) -> A {
        self.reduce_with(A::default(), f)
    }

    /// Folds every element into an accumulator from left to right, starting with `init`.
    pub fn reduce_with<A, F: FnMut(A, &T) -> A>(&self, init: A, f: F) -> A {
        self.iter().fold(init, f)
    }

    /// Folds every element into an accumulator from right to left, starting with
    /// [`A::default()`](Default).
    pub fn reduce_right<A: Default, F: FnMut(A, &T) -> A>(&self, f: F) -> A {
        self.reduce_right_with(A::default(), f)
    }

    /// Folds every element into an accumulator from right to left, starting with `init`.
    pub fn reduce_right_with<A, F: FnMut(A, &T) -> A>(&self, init: A, f: F) -> A {
        self.iter().rev().fold(init, f)
    }

    /// Sorts the Sequence in place using `less` as a strict "less than" predicate. The sort is
    /// stable, equal elements keep their relative order.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from(["ccc", "a", "bb", "d"]);
    /// seq.sort_with(|a, b| a.len() < b.len());
    /// assert_eq!(&*seq, &["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_with<L: FnMut(&T, &T) -> bool>(&mut self, mut less: L) -> &mut Self {
        self.items.sort_by(|a, b| ordering_from_less(&mut less, a, b));
        self
    }

    /// Returns a sorted copy of the Sequence, see [`sort_with`](Sequence::sort_with).
    pub fn to_sorted_with<L: FnMut(&T, &T) -> bool>(&self, less: L) -> Sequence<T>
    where
        T: Clone,
    {
        let mut sorted = self.clone();
        sorted.sort_with(less);
        sorted
    }

    /// Returns a copy of the Sequence sorted in ascending order.
    pub fn to_sorted(&self) -> Sequence<T>
    where
        T: Clone + Ord,
    {
        let mut sorted = self.clone();
        sorted.items.sort();
        sorted
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Returns a copy of the Sequence with its elements in reverse order.
    pub fn to_reversed(&self) -> Sequence<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    /// Overwrites every element in `start..end` with a clone of `value`.
    ///
    /// If `start` isn't the index of an element or `end` lies outside of `start..=len`, nothing is
    /// changed and an error is returned instead.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3, 4]);
    /// seq.fill(0, 1, 3).unwrap();
    /// assert_eq!(&*seq, &[1, 0, 0, 4]);
    /// assert!(seq.fill(9, 4, 4).is_err());
    /// ```
    pub fn fill(&mut self, value: T, start: usize, end: usize) -> Result<&mut Self, RangeOutOfBounds>
    where
        T: Clone,
    {
        if start >= self.len() {
            return Err(RangeOutOfBounds {
                start,
                end,
                len: self.len(),
            });
        }
        self.check_range(start, end)?;

        self.items[start..end].fill(value);
        Ok(self)
    }

    /// Removes `delete_count` elements starting at `start` and puts `value` in their place.
    ///
    /// If the removed range wouldn't fit inside the Sequence, nothing is changed and an error is
    /// returned instead.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3, 4, 5]);
    /// seq.splice(1, 3, 99).unwrap();
    /// assert_eq!(&*seq, &[1, 99, 5]);
    /// ```
    pub fn splice(
        &mut self,
        start: usize,
        delete_count: usize,
        value: T,
    ) -> Result<&mut Self, RangeOutOfBounds> {
        let end = start.saturating_add(delete_count);
        self.check_range(start, end)?;

        self.items.splice(start..end, [value]).for_each(drop);
        Ok(self)
    }

    /// Returns a copy of the Sequence with `delete_count` elements removed at `start` and `items`
    /// inserted in their place.
    ///
    /// Unlike [`splice`](Sequence::splice), this never fails: a negative `start` counts back from
    /// the end, `start` is clamped to `0..=len` and `delete_count` is clamped to the number of
    /// elements after `start`.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from(['a', 'b', 'c', 'd']);
    /// assert_eq!(&*seq.to_spliced(1, 2, ['x']), &['a', 'x', 'd']);
    /// assert_eq!(&*seq.to_spliced(-1, 10, ['y', 'z']), &['a', 'b', 'c', 'y', 'z']);
    /// assert_eq!(&*seq, &['a', 'b', 'c', 'd']);
    /// ```
    pub fn to_spliced<I: IntoIterator<Item = T>>(
        &self,
        start: isize,
        delete_count: usize,
        items: I,
    ) -> Sequence<T>
    where
        T: Clone,
    {
        let start = self.clamped_index(start);
        let end = start.saturating_add(delete_count).min(self.len());

        self.items[..start]
            .iter()
            .cloned()
            .chain(items)
            .chain(self.items[end..].iter().cloned())
            .collect()
    }

    /// Returns a copy of the elements in `start..end`.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from(0..5);
    /// assert_eq!(&*seq.slice(1, 3).unwrap(), &[1, 2]);
    /// assert!(seq.slice(3, 6).is_err());
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Sequence<T>, RangeOutOfBounds>
    where
        T: Clone,
    {
        self.check_range(start, end)?;

        Ok(Sequence::from(&self.items[start..end]))
    }

    /// Returns a copy of the Sequence with the element at `index` replaced by `value`.
    pub fn with(&self, index: usize, value: T) -> Result<Sequence<T>, IndexOutOfBounds>
    where
        T: Clone,
    {
        self.check_index(index)?;

        let mut copy = self.clone();
        copy.items[index] = value;
        Ok(copy)
    }

    /// Renders every element and joins them with `separator`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the joined string would be longer than a [`String`] can be.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from(["a", "b", "c"]);
    /// assert_eq!(seq.join(",").unwrap(), "a,b,c");
    /// ```
    pub fn join(&self, separator: &str) -> Result<String, CapacityOverflow>
    where
        T: Display,
    {
        let parts: Vec<String> = self.iter().map(ToString::to_string).collect();
        let total = joined_len(parts.iter().map(String::len), separator.len())?;

        let mut joined = String::with_capacity(total);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                joined.push_str(separator);
            }
            joined.push_str(part);
        }

        Ok(joined)
    }

    /// Returns a Sequence of every valid index, `0..len`.
    pub fn keys(&self) -> Sequence<usize> {
        (0..self.len()).collect()
    }

    /// Returns an iterator over `(index, &element)` pairs.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(self.iter())
    }

    /// Returns a view of the elements of the Sequence. The Sequence can't be modified while the view
    /// is alive.
    pub fn values(&self) -> &[T] {
        &self.items
    }

    /// Returns a mutable view of the elements of the Sequence. Writing through the view writes to
    /// the Sequence itself.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Checks that `start..end` is a valid, possibly empty range within self.
    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<(), RangeOutOfBounds> {
        if start <= end && end <= self.items.len() {
            Ok(())
        } else {
            Err(RangeOutOfBounds {
                start,
                end,
                len: self.items.len(),
            })
        }
    }

    /// Resolves a possibly negative index, returning None if it points before the start.
    fn relative_index(&self, index: isize) -> Option<usize> {
        if index < 0 {
            self.len().checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        }
    }

    /// Resolves a possibly negative index, clamping it to `0..=len`.
    fn clamped_index(&self, index: isize) -> usize {
        self.relative_index(index).unwrap_or(0).min(self.len())
    }
}

impl<T: Default> Sequence<T> {
    /// Pops the last value off the end of the Sequence, returning [`T::default()`](Default) if the
    /// Sequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let mut seq = Sequence::from([1, 2]);
    /// assert_eq!(seq.pop(), 2);
    /// assert_eq!(seq.pop(), 1);
    /// assert_eq!(seq.pop(), 0);
    /// assert!(seq.is_empty());
    /// ```
    pub fn pop(&mut self) -> T {
        self.try_pop().unwrap_or_default()
    }

    /// Removes the first value of the Sequence, returning [`T::default()`](Default) if the Sequence
    /// is empty.
    pub fn shift(&mut self) -> T {
        self.try_shift().unwrap_or_default()
    }
}

impl Sequence<String> {
    /// Splits a string into a Sequence of its characters.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Sequence;
    /// let seq = Sequence::from_chars("héllo");
    /// assert_eq!(seq.len(), 5);
    /// assert_eq!(seq.at(1), "é");
    /// ```
    pub fn from_chars(value: &str) -> Sequence<String> {
        value.chars().map(String::from).collect()
    }
}

fn ordering_from_less<T, L: FnMut(&T, &T) -> bool>(less: &mut L, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Computes the length of `parts` joined by a separator of length `separator`.
pub(crate) fn joined_len<I>(mut parts: I, separator: usize) -> Result<usize, CapacityOverflow>
where
    I: ExactSizeIterator<Item = usize>,
{
    let separators = separator
        .checked_mul(parts.len().saturating_sub(1))
        .ok_or(CapacityOverflow)?;

    parts
        .try_fold(separators, usize::checked_add)
        .filter(|total| *total <= MAX_STRING_LEN)
        .ok_or(CapacityOverflow)
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        Sequence { items: value }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.items
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence {
            items: Vec::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        Sequence {
            items: value.to_vec(),
        }
    }
}

impl<T> From<std::ops::Range<T>> for Sequence<T>
where
    std::ops::Range<T>: Iterator<Item = T>,
{
    fn from(value: std::ops::Range<T>) -> Self {
        value.collect()
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Sequence<T>
where
    std::ops::RangeInclusive<T>: Iterator<Item = T>,
{
    fn from(value: std::ops::RangeInclusive<T>) -> Self {
        value.collect()
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("contents", &&**self)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
