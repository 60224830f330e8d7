use core::{iter::FusedIterator, marker::PhantomData};

use crate::{Order, Shape};

/// Positions of every element of a shape, visited in memory order `O`.
#[derive(Clone, Debug)]
pub struct Indices<O> {
    indices: Option<Vec<usize>>,
    len: usize,
    shape: Vec<usize>,
    phantom: PhantomData<O>,
}

impl<O> Indices<O>
where
    O: Order,
{
    pub(crate) fn new(shape: &[usize]) -> Self {
        let len = shape.array_len();
        Self {
            indices: (len > 0).then(|| vec![0; shape.len()]),
            len,
            shape: shape.to_vec(),
            phantom: PhantomData,
        }
    }
}

impl<O> Iterator for Indices<O>
where
    O: Order,
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.indices.as_mut()?;
        let item = current.clone();
        self.len -= 1;
        if !O::increment_indices(current, &self.shape) {
            self.indices = None;
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<O> ExactSizeIterator for Indices<O> where O: Order {}

impl<O> FusedIterator for Indices<O> where O: Order {}
