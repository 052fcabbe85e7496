use super::Sequence;

/// A value that is either a single element or a list of further nested values.
///
/// Nesting is purely by value: every list is owned by its parent, so a Nested value is always a
/// finite tree without shared or cyclic parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Sequence<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates a leaf containing `value`.
    pub const fn leaf(value: T) -> Nested<T> {
        Nested::Leaf(value)
    }

    /// Creates a list from the provided nested values.
    pub fn list<I: IntoIterator<Item = Nested<T>>>(items: I) -> Nested<T> {
        Nested::List(items.into_iter().collect())
    }

    /// Creates a list of leaves, one for each of the provided values.
    pub fn leaves<I: IntoIterator<Item = T>>(values: I) -> Nested<T> {
        Nested::List(values.into_iter().map(Nested::Leaf).collect())
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Returns the number of list levels beneath this value. A leaf has depth 0 and a list has a
    /// depth one greater than its deepest item.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::Nested;
    /// let value = Nested::list([Nested::leaf(1), Nested::leaves([2, 3])]);
    /// assert_eq!(value.depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(items) => 1 + items.max_depth(),
        }
    }
}

impl<T> Sequence<Nested<T>> {
    /// Returns the deepest nesting of any item, so that [`flat`](Sequence::flat) with at least this
    /// depth leaves only leaves behind.
    pub fn max_depth(&self) -> usize {
        self.iter().map(Nested::depth).max().unwrap_or(0)
    }
}

impl<T: Clone> Sequence<Nested<T>> {
    /// Returns a copy of the Sequence with nested lists concatenated into it, up to `depth` levels
    /// deep. Lists nested deeper than `depth` are kept as single items.
    ///
    /// A depth of 0 returns an identical copy, while any depth of at least
    /// [`max_depth`](Sequence::max_depth) flattens everything.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::sequence::{Nested, Sequence};
    /// let seq = Sequence::from([
    ///     Nested::leaf(1),
    ///     Nested::list([Nested::leaf(2), Nested::leaves([3])]),
    /// ]);
    /// assert_eq!(
    ///     seq.flat(1),
    ///     Sequence::from([Nested::leaf(1), Nested::leaf(2), Nested::leaves([3])])
    /// );
    /// assert_eq!(seq.flat_all(), Sequence::from([1, 2, 3]));
    /// ```
    pub fn flat(&self, depth: usize) -> Sequence<Nested<T>> {
        let mut flattened = Sequence::with_cap(self.len());
        flatten_into(&mut flattened, self, depth);
        flattened
    }

    /// Flattens every level of nesting, returning only the leaves in order.
    pub fn flat_all(&self) -> Sequence<T> {
        let mut leaves = Sequence::with_cap(self.len());
        collect_leaves(&mut leaves, self);
        leaves
    }
}

fn flatten_into<T: Clone>(out: &mut Sequence<Nested<T>>, items: &[Nested<T>], depth: usize) {
    for item in items {
        match item {
            Nested::List(children) if depth > 0 => flatten_into(out, children, depth - 1),
            other => out.push(other.clone()),
        }
    }
}

fn collect_leaves<T: Clone>(out: &mut Sequence<T>, items: &[Nested<T>]) {
    for item in items {
        match item {
            Nested::Leaf(value) => out.push(value.clone()),
            Nested::List(children) => collect_leaves(out, children),
        }
    }
}
