mod broadcast;
pub use broadcast::{broadcast, Deferred, Mapped, Operand, PendingMap};

mod fmt;

mod index;
pub use index::{Selection, Sliceable};

mod keys;
pub use keys::{Key, Keys};

mod ops;

use core::{fmt::Debug, hash::Hash, iter::Zip};

use num_traits::{One, Zero};

use crate::{Array, Axis, Label, NDArray, Order, Result, RowMajor, ShapeError};

/// Dense array whose dimensions are indexed by labels.
///
/// Each of the N dimensions owns an [`Axis`] of unique labels whose length
/// equals the extent of that dimension in the backing store.
#[derive(Clone, Eq, PartialEq)]
pub struct LabeledArray<T, L = Label, O = RowMajor> {
    axes: Vec<Axis<L>>,
    data: Array<T, O>,
}

impl<T, L, O> NDArray for LabeledArray<T, L, O>
where
    O: Order,
{
    #[inline]
    fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
}

fn build_axes<L>(axes: Vec<Vec<L>>) -> Result<Vec<Axis<L>>>
where
    L: Clone + Eq + Hash + Debug,
{
    axes.into_iter()
        .enumerate()
        .map(|(i, labels)| Axis::build(i, labels))
        .collect()
}

impl<T, L, O> LabeledArray<T, L, O>
where
    L: Clone + Eq + Hash + Debug,
    O: Order,
{
    /// Attaches `axes` to `data`.
    ///
    /// Fails when the number of axes differs from the number of dimensions,
    /// when an axis length differs from the extent of its dimension, or when
    /// an axis repeats a label.
    pub fn new(data: Array<T, O>, axes: Vec<Vec<L>>) -> Result<Self> {
        if data.ndims() != axes.len() {
            return Err(ShapeError::IncompatibleDimension(format!(
                "array is {}-dimensional, but {} axes were given",
                data.ndims(),
                axes.len()
            ))
            .into());
        }
        for (i, (labels, &dim)) in axes.iter().zip(data.shape()).enumerate() {
            if labels.len() != dim {
                return Err(ShapeError::IncompatibleShape(format!(
                    "axis {} has {} labels, but the dimension has length {}",
                    i,
                    labels.len(),
                    dim
                ))
                .into());
            }
        }

        Ok(Self {
            axes: build_axes(axes)?,
            data,
        })
    }

    /// Builds an array over `axes` with every element set to
    /// `T::default()`.
    pub fn from_default(axes: Vec<Vec<L>>) -> Result<Self>
    where
        T: Default,
    {
        let shape = axes.iter().map(Vec::len).collect::<Vec<_>>();
        Self::new(Array::from_default(shape), axes)
    }

    pub fn from_elem(axes: Vec<Vec<L>>, elem: T) -> Result<Self>
    where
        T: Clone,
    {
        let shape = axes.iter().map(Vec::len).collect::<Vec<_>>();
        Self::new(Array::from_elem(shape, elem), axes)
    }

    pub fn zeros(axes: Vec<Vec<L>>) -> Result<Self>
    where
        T: Clone + Zero,
    {
        Self::from_elem(axes, T::zero())
    }

    pub fn ones(axes: Vec<Vec<L>>) -> Result<Self>
    where
        T: Clone + One,
    {
        Self::from_elem(axes, T::one())
    }

    /// Builds an array by calling `f` with the key of every element, visited
    /// in memory order.
    pub fn from_fn<F>(axes: Vec<Vec<L>>, mut f: F) -> Result<Self>
    where
        F: FnMut(&Key<L>) -> T,
    {
        let axes = build_axes(axes)?;
        let shape = axes.iter().map(Axis::len).collect::<Vec<_>>();
        let storage = Keys::<L, O>::new(&axes).map(|key| f(&key)).collect();

        Ok(Self {
            data: Array::from_shape_vec(shape, storage)?,
            axes,
        })
    }

    pub fn keys(&self) -> Keys<'_, L, O> {
        Keys::new(&self.axes)
    }

    /// Iterates over key/element pairs in memory order.
    pub fn iter(&self) -> Zip<Keys<'_, L, O>, core::slice::Iter<'_, T>> {
        Keys::new(&self.axes).zip(self.data.iter())
    }

    pub fn iter_mut(&mut self) -> Zip<Keys<'_, L, O>, core::slice::IterMut<'_, T>> {
        Keys::new(&self.axes).zip(self.data.iter_mut())
    }
}

impl<T, L, O> LabeledArray<T, L, O>
where
    O: Order,
{
    pub(crate) fn from_parts(axes: Vec<Axis<L>>, data: Array<T, O>) -> Self {
        debug_assert!(axes.iter().map(Axis::len).eq(data.shape().iter().copied()));

        Self { axes, data }
    }

    #[inline]
    pub fn axes(&self) -> &[Axis<L>] {
        &self.axes
    }

    #[inline]
    pub fn axis(&self, dim: usize) -> Option<&Axis<L>> {
        self.axes.get(dim)
    }

    #[inline]
    pub fn data(&self) -> &Array<T, O> {
        &self.data
    }

    /// Backing store, for positional writes; its shape cannot change through
    /// this borrow.
    #[inline]
    pub fn data_mut(&mut self) -> &mut Array<T, O> {
        &mut self.data
    }

    pub fn into_parts(self) -> (Vec<Axis<L>>, Array<T, O>) {
        (self.axes, self.data)
    }

    /// Elements in memory order.
    #[inline]
    pub fn values(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}
