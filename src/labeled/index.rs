use core::{
    fmt::Debug,
    hash::Hash,
    ops::{Index, IndexMut},
};

use log::trace;

use super::LabeledArray;
use crate::{Array, ArrayIndex, Error, NDArray, Order, Result, Selector};

/// Outcome of [`LabeledArray::select`].
#[derive(PartialEq)]
pub enum Selection<'a, T, L, O> {
    /// Every dimension was fixed by a label.
    Element(&'a T),
    /// At least one dimension was kept.
    Array(LabeledArray<T, L, O>),
}

impl<'a, T, L, O> Debug for Selection<'a, T, L, O>
where
    L: Debug,
    O: Order,
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Element(elem) => f.debug_tuple("Element").field(elem).finish(),
            Self::Array(array) => f.debug_tuple("Array").field(array).finish(),
        }
    }
}

/// Containers that can be sliced by label.
pub trait Sliceable<L> {
    type Output;

    fn slice(&self, selectors: &[Selector<L>]) -> Result<Self::Output>;
}

impl<T, L, O> LabeledArray<T, L, O>
where
    L: Clone + Eq + Hash + Debug,
    O: Order,
{
    /// Translates `key` into one position per dimension.
    ///
    /// Trailing dimensions may be omitted from `key` when their length is 1;
    /// they resolve to position 0.
    pub fn positions(&self, key: &[L]) -> Result<Vec<usize>> {
        let n_dims = self.ndims();
        let rank_mismatch = || Error::RankMismatch {
            expected: n_dims,
            got: key.len(),
        };
        if key.len() > n_dims {
            return Err(rank_mismatch());
        }

        let mut positions = Vec::with_capacity(n_dims);
        for (i, (axis, label)) in self.axes.iter().zip(key).enumerate() {
            let position = axis.position(label).ok_or_else(|| Error::KeyNotFound {
                axis: i,
                label: format!("{:?}", label),
            })?;
            positions.push(position);
        }
        for axis in &self.axes[key.len()..] {
            if axis.len() != 1 {
                return Err(rank_mismatch());
            }
            positions.push(0);
        }

        Ok(positions)
    }

    pub fn get(&self, key: &[L]) -> Result<&T> {
        let positions = self.positions(key)?;
        self.data
            .get(&positions)
            .ok_or_else(|| Error::Bounds(format!("positions {:?} are out of bounds", positions)))
    }

    pub fn get_mut(&mut self, key: &[L]) -> Result<&mut T> {
        let positions = self.positions(key)?;
        match self.data.get_mut(&positions) {
            Some(elem) => Ok(elem),
            None => Err(Error::Bounds(format!(
                "positions {:?} are out of bounds",
                positions
            ))),
        }
    }

    /// Overwrites the element named by `key`.
    pub fn set(&mut self, key: &[L], value: T) -> Result<()> {
        *self.get_mut(key)? = value;
        Ok(())
    }

    /// Whether `key` names an element of this array.
    ///
    /// Every element is initialized on construction, so this never reports
    /// an in-range key as unassigned.
    pub fn is_assigned(&self, key: &[L]) -> bool {
        self.positions(key).is_ok()
    }

    /// Copies out the region selected by `selectors`.
    ///
    /// Without any [`Selector::Keep`], every selector is a label and the
    /// result is a 0-dimensional array holding the named element. Otherwise
    /// there must be exactly one selector per dimension; dimensions fixed by
    /// a label are dropped and kept dimensions retain their axes.
    pub fn slice(&self, selectors: &[Selector<L>]) -> Result<Self>
    where
        T: Clone,
    {
        if !selectors.iter().any(Selector::is_keep) {
            let key = selectors
                .iter()
                .filter_map(Selector::as_label)
                .cloned()
                .collect::<Vec<_>>();
            let elem = self.get(&key)?.clone();
            return Ok(Self::from_parts(
                Vec::new(),
                Array::from_elem(Vec::<usize>::new(), elem),
            ));
        }

        let n_dims = self.ndims();
        if selectors.len() != n_dims {
            return Err(Error::Bounds(format!(
                "expected {} selectors for a {}-dimensional array, got {}",
                n_dims,
                n_dims,
                selectors.len()
            )));
        }

        let mut info = Vec::with_capacity(n_dims);
        let mut axes = Vec::new();
        for (i, (axis, selector)) in self.axes.iter().zip(selectors).enumerate() {
            match selector {
                Selector::Label(label) => {
                    let position = axis.position(label).ok_or_else(|| Error::KeyNotFound {
                        axis: i,
                        label: format!("{:?}", label),
                    })?;
                    info.push(ArrayIndex::Index(position));
                }
                Selector::Keep => {
                    info.push(ArrayIndex::Full);
                    axes.push(axis.clone());
                }
            }
        }
        let data = self.data.slice(&info)?;
        trace!("sliced {} of {} dimensions by label", n_dims - axes.len(), n_dims);

        Ok(Self::from_parts(axes, data))
    }

    /// Returns the element itself when every dimension is fixed by a label,
    /// and a sliced array otherwise.
    pub fn select(&self, selectors: &[Selector<L>]) -> Result<Selection<'_, T, L, O>>
    where
        T: Clone,
    {
        if selectors.iter().any(Selector::is_keep) {
            return self.slice(selectors).map(Selection::Array);
        }
        let key = selectors
            .iter()
            .filter_map(Selector::as_label)
            .cloned()
            .collect::<Vec<_>>();
        self.get(&key).map(Selection::Element)
    }
}

impl<T, L, O> Sliceable<L> for LabeledArray<T, L, O>
where
    L: Clone + Eq + Hash + Debug,
    O: Order,
    T: Clone,
{
    type Output = Self;

    fn slice(&self, selectors: &[Selector<L>]) -> Result<Self> {
        LabeledArray::slice(self, selectors)
    }
}

impl<T, L, O, K> Index<K> for LabeledArray<T, L, O>
where
    K: AsRef<[L]>,
    L: Clone + Eq + Hash + Debug,
    O: Order,
{
    type Output = T;

    fn index(&self, key: K) -> &T {
        match self.get(key.as_ref()) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, L, O, K> IndexMut<K> for LabeledArray<T, L, O>
where
    K: AsRef<[L]>,
    L: Clone + Eq + Hash + Debug,
    O: Order,
{
    fn index_mut(&mut self, key: K) -> &mut T {
        match self.get_mut(key.as_ref()) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}
