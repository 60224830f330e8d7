use core::{fmt, iter::FusedIterator, marker::PhantomData, ops::Deref};

use crate::{Axis, Order, Shape};

/// One label per dimension, naming a single element.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Key<L>(Vec<L>);

impl<L> Key<L> {
    pub fn into_vec(self) -> Vec<L> {
        self.0
    }
}

impl<L> From<Vec<L>> for Key<L> {
    fn from(labels: Vec<L>) -> Self {
        Self(labels)
    }
}

impl<L> Deref for Key<L> {
    type Target = [L];

    fn deref(&self) -> &[L] {
        &self.0
    }
}

impl<L> AsRef<[L]> for Key<L> {
    fn as_ref(&self) -> &[L] {
        &self.0
    }
}

impl<L: fmt::Display> fmt::Display for Key<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, label) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", label)?;
        }
        f.write_str(")")
    }
}

/// Lazy cross product of the labels of every axis, visited in memory order
/// `O` so that the i-th key names the i-th stored element.
pub struct Keys<'a, L, O> {
    axes: &'a [Axis<L>],
    shape: Vec<usize>,
    strides: Vec<usize>,
    front: usize,
    back: usize,
    phantom: PhantomData<O>,
}

impl<'a, L, O> Keys<'a, L, O>
where
    L: Clone,
    O: Order,
{
    pub(crate) fn new(axes: &'a [Axis<L>]) -> Self {
        let shape = axes.iter().map(Axis::len).collect::<Vec<_>>();
        let strides = O::default_strides(&shape);
        Self {
            axes,
            back: shape.array_len(),
            shape,
            strides,
            front: 0,
            phantom: PhantomData,
        }
    }

    /// Key of the element stored at `offset`, regardless of how far the
    /// iterator has advanced.
    pub fn get(&self, offset: usize) -> Option<Key<L>> {
        if offset >= self.shape.array_len() {
            return None;
        }
        self.at(&O::unravel_index(offset, &self.shape, &self.strides))
    }

    /// Key of the element at the positional multi-index `indices`.
    pub fn at(&self, indices: &[usize]) -> Option<Key<L>> {
        if indices.len() != self.axes.len() {
            return None;
        }
        self.axes
            .iter()
            .zip(indices)
            .map(|(axis, &i)| axis.get(i).cloned())
            .collect::<Option<Vec<_>>>()
            .map(Key)
    }
}

impl<'a, L, O> Clone for Keys<'a, L, O> {
    fn clone(&self) -> Self {
        Self {
            axes: self.axes,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            front: self.front,
            back: self.back,
            phantom: PhantomData,
        }
    }
}

impl<'a, L: fmt::Debug, O> fmt::Debug for Keys<'a, L, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("axes", &self.axes)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, L, O> Iterator for Keys<'a, L, O>
where
    L: Clone,
    O: Order,
{
    type Item = Key<L>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let key = self.get(self.front);
        self.front += 1;
        key
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, L, O> DoubleEndedIterator for Keys<'a, L, O>
where
    L: Clone,
    O: Order,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.get(self.back)
    }
}

impl<'a, L, O> ExactSizeIterator for Keys<'a, L, O>
where
    L: Clone,
    O: Order,
{
}

impl<'a, L, O> FusedIterator for Keys<'a, L, O>
where
    L: Clone,
    O: Order,
{
}
