use core::{fmt, hash::Hash, marker::PhantomData};

use log::debug;

use super::{LabeledArray, Sliceable};
use crate::{Array, Error, Label, NDArray, Order, Result, RowMajor, Selector, ShapeError};

/// Elementwise computation that has been described but not evaluated.
pub trait Deferred {
    fn shape(&self) -> &[usize];
}

/// One argument of [`broadcast`].
pub enum Operand<'a, T, L = Label, O = RowMajor> {
    Labeled(&'a LabeledArray<T, L, O>),
    /// Plain array of the same shape as the result, or 0-dimensional.
    Dense(&'a Array<T, O>),
    Scalar(&'a T),
    Pending(&'a dyn Deferred),
}

impl<'a, T, L, O> Clone for Operand<'a, T, L, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, L, O> Copy for Operand<'a, T, L, O> {}

impl<'a, T, L, O> fmt::Debug for Operand<'a, T, L, O>
where
    L: fmt::Debug,
    O: Order,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Labeled(array) => f.debug_tuple("Labeled").field(array).finish(),
            Self::Dense(array) => f.debug_tuple("Dense").field(array).finish(),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Pending(pending) => f.debug_tuple("Pending").field(&pending.shape()).finish(),
        }
    }
}

/// Result of [`broadcast`]: labeled when one of the operands was labeled.
#[derive(Clone, PartialEq)]
pub enum Mapped<U, L = Label, O = RowMajor> {
    Labeled(LabeledArray<U, L, O>),
    Dense(Array<U, O>),
}

impl<U, L, O> Mapped<U, L, O>
where
    O: Order,
{
    pub fn into_labeled(self) -> Option<LabeledArray<U, L, O>> {
        match self {
            Self::Labeled(array) => Some(array),
            Self::Dense(_) => None,
        }
    }

    pub fn into_dense(self) -> Array<U, O> {
        match self {
            Self::Labeled(array) => array.into_parts().1,
            Self::Dense(array) => array,
        }
    }
}

impl<U, L, O> NDArray for Mapped<U, L, O>
where
    O: Order,
{
    fn shape(&self) -> &[usize] {
        match self {
            Self::Labeled(array) => array.shape(),
            Self::Dense(array) => array.shape(),
        }
    }
}

impl<U, L, O> fmt::Debug for Mapped<U, L, O>
where
    L: fmt::Debug,
    O: Order,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Labeled(array) => f.debug_tuple("Labeled").field(array).finish(),
            Self::Dense(array) => f.debug_tuple("Dense").field(array).finish(),
        }
    }
}

enum Source<'a, T> {
    Elements(&'a [T]),
    Single(&'a T),
}

impl<'a, T> Source<'a, T> {
    fn at(&self, offset: usize) -> &'a T {
        match *self {
            Self::Elements(elements) => &elements[offset],
            Self::Single(value) => value,
        }
    }
}

/// Applies `f` elementwise over `operands`.
///
/// At most one operand may be labeled; its axes label the result. Plain
/// arrays must match the shape of the result or be 0-dimensional, and
/// scalars are repeated for every element.
///
/// ```
/// use axisarray::{broadcast, labels, Array, LabeledArray, Operand};
///
/// let arr = LabeledArray::<i32>::from_elem(vec![labels(["a", "b"])], 2)?;
/// let offset = Array::<i32>::from(vec![10, 20]);
/// let mapped = broadcast(
///     &[Operand::Labeled(&arr), Operand::Dense(&offset), Operand::Scalar(&3)],
///     |args| args[0] * args[2] + args[1],
/// )?;
///
/// let sum = mapped.into_labeled().unwrap();
/// assert_eq!(sum.values().copied().collect::<Vec<_>>(), [16, 26]);
/// # Ok::<(), axisarray::Error>(())
/// ```
pub fn broadcast<T, U, L, O, F>(operands: &[Operand<'_, T, L, O>], mut f: F) -> Result<Mapped<U, L, O>>
where
    L: Clone + Eq + Hash + fmt::Debug,
    O: Order,
    F: FnMut(&[&T]) -> U,
{
    if operands.iter().any(|op| matches!(op, Operand::Pending(_))) {
        debug!("rejected broadcast over a pending elementwise map");
        return Err(Error::Unsupported("nested broadcast".to_owned()));
    }

    let mut labeled = operands.iter().filter_map(|op| match *op {
        Operand::Labeled(array) => Some(array),
        _ => None,
    });
    let target = labeled.next();
    if labeled.next().is_some() {
        debug!("rejected broadcast over multiple labeled operands");
        return Err(Error::Unsupported("multiple labeled operands".to_owned()));
    }

    let shape = match target {
        Some(array) => array.shape().to_vec(),
        None => operands
            .iter()
            .find_map(|op| match *op {
                Operand::Dense(array) if array.ndims() > 0 => Some(array.shape().to_vec()),
                _ => None,
            })
            .unwrap_or_default(),
    };

    let mut sources = Vec::with_capacity(operands.len());
    for op in operands {
        let source = match *op {
            Operand::Labeled(array) => Source::Elements(array.data.as_slice()),
            Operand::Dense(array) if array.ndims() == 0 => Source::Single(&array.as_slice()[0]),
            Operand::Dense(array) => {
                if array.shape() != shape.as_slice() {
                    debug!(
                        "rejected operand of shape {:?} for broadcast into shape {:?}",
                        array.shape(),
                        shape
                    );
                    return Err(ShapeError::IncompatibleShape(format!(
                        "operand of shape {:?} cannot be broadcast to shape {:?}",
                        array.shape(),
                        shape
                    ))
                    .into());
                }
                Source::Elements(array.as_slice())
            }
            Operand::Scalar(value) => Source::Single(value),
            Operand::Pending(_) => unreachable!(),
        };
        sources.push(source);
    }

    let len = shape.iter().product::<usize>();
    let mut args = Vec::with_capacity(sources.len());
    let mut storage = Vec::with_capacity(len);
    for offset in 0..len {
        args.clear();
        args.extend(sources.iter().map(|source| source.at(offset)));
        storage.push(f(&args));
    }
    debug!(
        "broadcast {} operands into shape {:?}",
        operands.len(),
        shape
    );

    let data = Array::from_shape_vec(shape, storage)?;
    Ok(match target {
        Some(array) => Mapped::Labeled(LabeledArray::from_parts(array.axes.clone(), data)),
        None => Mapped::Dense(data),
    })
}

impl<T, L, O> LabeledArray<T, L, O>
where
    L: Clone + Eq + Hash + fmt::Debug,
    O: Order,
{
    /// Applies `f` to every element, keeping the axes.
    pub fn map<U, F>(&self, f: F) -> LabeledArray<U, L, O>
    where
        F: FnMut(&T) -> U,
    {
        LabeledArray::from_parts(self.axes.clone(), self.data.map(f))
    }

    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.data.map_inplace(f);
    }

    /// Combines every element with the element at the same position of
    /// `other`, which must have the same shape or be 0-dimensional.
    pub fn zip_map<U, F>(&self, other: &Array<T, O>, mut f: F) -> Result<LabeledArray<U, L, O>>
    where
        F: FnMut(&T, &T) -> U,
    {
        let mapped = broadcast(&[Operand::Labeled(self), Operand::Dense(other)], |args| {
            f(args[0], args[1])
        })?;
        match mapped {
            Mapped::Labeled(array) => Ok(array),
            Mapped::Dense(_) => unreachable!(),
        }
    }

    /// Describes `f` applied to every element without evaluating it.
    pub fn lazy_map<U, F>(&self, f: F) -> PendingMap<'_, T, U, L, O, F>
    where
        F: Fn(&T) -> U,
    {
        PendingMap {
            source: self,
            f,
            phantom: PhantomData,
        }
    }
}

/// Elementwise map over a labeled array, evaluated on demand.
pub struct PendingMap<'a, T, U, L, O, F> {
    source: &'a LabeledArray<T, L, O>,
    f: F,
    phantom: PhantomData<fn() -> U>,
}

impl<'a, T, U, L, O, F> PendingMap<'a, T, U, L, O, F>
where
    F: Fn(&T) -> U,
    L: Clone + Eq + Hash + fmt::Debug,
    O: Order,
{
    #[inline]
    pub fn source(&self) -> &'a LabeledArray<T, L, O> {
        self.source
    }

    /// Evaluates the single element named by `key`.
    pub fn get(&self, key: &[L]) -> Result<U> {
        self.source.get(key).map(&self.f)
    }

    pub fn eval(&self) -> LabeledArray<U, L, O> {
        self.source.map(&self.f)
    }
}

impl<'a, T, U, L, O, F> Deferred for PendingMap<'a, T, U, L, O, F>
where
    O: Order,
{
    fn shape(&self) -> &[usize] {
        self.source.shape()
    }
}

impl<'a, T, U, L, O, F> Sliceable<L> for PendingMap<'a, T, U, L, O, F> {
    type Output = LabeledArray<U, L, O>;

    fn slice(&self, _selectors: &[Selector<L>]) -> Result<Self::Output> {
        Err(Error::Unsupported(
            "slicing a pending elementwise map".to_owned(),
        ))
    }
}
