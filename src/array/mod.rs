mod fmt;
pub(crate) use fmt::FormatOption;

mod iter;
pub use iter::Indices;

mod ops;

use core::{iter::FromIterator, marker::PhantomData};

use log::trace;
use num_traits::{One, Zero};

use crate::{ArrayIndex, Error, NDArray, Order, Result, RowMajor, Shape, ShapeError};

/// Contiguous, rectangular backing store.
///
/// Elements are laid out in memory order `O` with default strides; the
/// shape is fixed once the array is built.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Array<T, O = RowMajor> {
    shape: Vec<usize>,
    strides: Vec<usize>,
    storage: Vec<T>,
    phantom: PhantomData<O>,
}

impl<T, O> From<Vec<T>> for Array<T, O>
where
    O: Order,
{
    fn from(data: Vec<T>) -> Self {
        Self::new_unchecked(vec![data.len()], data)
    }
}

impl<T, O> FromIterator<T> for Array<T, O>
where
    O: Order,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> NDArray for Array<T, O>
where
    O: Order,
{
    #[inline]
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<T, O> Array<T, O>
where
    O: Order,
{
    fn new_unchecked(shape: Vec<usize>, storage: Vec<T>) -> Self {
        debug_assert_eq!(shape.array_len(), storage.len());

        Self {
            strides: O::default_strides(&shape),
            shape,
            storage,
            phantom: PhantomData,
        }
    }

    /// Builds an array of `shape` from elements given in memory order.
    pub fn from_shape_vec<Sh>(shape: Sh, data: Vec<T>) -> Result<Self>
    where
        Sh: Shape,
    {
        if shape.array_len() != data.len() {
            return Err(ShapeError::IncompatibleShape(format!(
                "cannot build array of shape {:?} from {} elements",
                shape,
                data.len()
            ))
            .into());
        }
        Ok(Self::new_unchecked(shape.to_vec(), data))
    }

    /// Builds an array by calling `f` with the position of every element,
    /// visited in memory order.
    pub fn from_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: Shape,
        F: FnMut(&[usize]) -> T,
    {
        let storage = Indices::<O>::new(shape.as_ref())
            .map(|indices| f(&indices))
            .collect();
        Self::new_unchecked(shape.to_vec(), storage)
    }

    pub fn from_default<Sh>(shape: Sh) -> Self
    where
        Sh: Shape,
        T: Default,
    {
        let storage = core::iter::repeat_with(T::default)
            .take(shape.array_len())
            .collect();
        Self::new_unchecked(shape.to_vec(), storage)
    }

    pub fn into_shape<Sh>(self, shape: Sh) -> Result<Self>
    where
        Sh: Shape,
    {
        if shape.array_len() != self.len() {
            return Err(ShapeError::IncompatibleShape(format!(
                "cannot transform array of length {} into shape {:?}",
                self.len(),
                shape
            ))
            .into());
        }
        Ok(Self::new_unchecked(shape.to_vec(), self.storage))
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Storage offset of the element at `indices`, if it is in bounds.
    pub fn offset_of(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndims() {
            return None;
        }
        indices
            .iter()
            .zip(self.shape.iter().zip(&self.strides))
            .try_fold(0, |acc, (&index, (&dim, &stride))| {
                (index < dim).then(|| acc + index * stride)
            })
    }

    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        let offset = self.offset_of(indices)?;
        Some(&self.storage[offset])
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut T> {
        let offset = self.offset_of(indices)?;
        Some(&mut self.storage[offset])
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Iterates over the elements in memory order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.storage.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Iterates over the positions of the elements in memory order.
    pub fn indices(&self) -> Indices<O> {
        Indices::new(&self.shape)
    }

    pub fn map<U, F>(&self, f: F) -> Array<U, O>
    where
        F: FnMut(&T) -> U,
    {
        Array::new_unchecked(self.shape.clone(), self.storage.iter().map(f).collect())
    }

    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.storage.iter_mut().for_each(f);
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for elem in self.iter_mut() {
            *elem = value.clone();
        }
    }

    /// Copies out the region selected by `info`.
    ///
    /// Dimensions selected with [`ArrayIndex::Index`] are dropped; dimensions
    /// not covered by `info` are kept whole.
    pub fn slice(&self, info: &[ArrayIndex]) -> Result<Self>
    where
        T: Clone,
    {
        let n_dims = self.ndims();
        if info.len() > n_dims {
            return Err(Error::Bounds(format!(
                "too many indices for array: array is {}-dimensional, but {} were indexed",
                n_dims,
                info.len()
            )));
        }

        let mut base = 0;
        let mut out_shape = Vec::with_capacity(n_dims);
        let mut kept = Vec::with_capacity(n_dims);
        let indices = info
            .iter()
            .chain(core::iter::repeat(&ArrayIndex::Full));
        for (axis, (&dim, index)) in self.shape.iter().zip(indices).enumerate() {
            match *index {
                ArrayIndex::Index(i) => {
                    if i >= dim {
                        return Err(Error::Bounds(format!(
                            "index {} is out of bounds for axis {} with size {}",
                            i, axis, dim
                        )));
                    }
                    base += self.strides[axis] * i;
                }
                ArrayIndex::Full => {
                    out_shape.push(dim);
                    kept.push(axis);
                }
            }
        }

        let len = out_shape.array_len();
        let mut storage = Vec::with_capacity(len);
        if len > 0 {
            let mut out_indices = vec![0; out_shape.len()];
            loop {
                let offset = out_indices
                    .iter()
                    .zip(&kept)
                    .fold(base, |acc, (&index, &axis)| acc + index * self.strides[axis]);
                storage.push(self.storage[offset].clone());
                if !O::increment_indices(&mut out_indices, &out_shape) {
                    break;
                }
            }
        }
        trace!(
            "sliced array of shape {:?} into shape {:?}",
            self.shape,
            out_shape
        );

        Ok(Self::new_unchecked(out_shape, storage))
    }
}

impl<T, O> Array<T, O>
where
    O: Order,
    T: Clone,
{
    pub fn from_elem<Sh>(shape: Sh, elem: T) -> Self
    where
        Sh: Shape,
    {
        let storage = vec![elem; shape.array_len()];
        Self::new_unchecked(shape.to_vec(), storage)
    }

    pub fn ones<Sh>(shape: Sh) -> Self
    where
        Sh: Shape,
        T: One,
    {
        Self::from_elem(shape, T::one())
    }

    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        Sh: Shape,
        T: Zero,
    {
        Self::from_elem(shape, T::zero())
    }
}
