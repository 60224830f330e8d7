//! Dense multidimensional arrays whose axes are indexed by labels.
//!
//! A [`LabeledArray`] pairs a rectangular backing store ([`Array`]) with one
//! [`Axis`] per dimension. Every axis is an ordered sequence of unique labels
//! of type `L`, so elements can be read, written and sliced by label instead
//! of by position:
//!
//! ```
//! use axisarray::{key, labels, sel, Array, LabeledArray, NDArray};
//!
//! let data: Array<i32> = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
//! let arr: LabeledArray<i32> = LabeledArray::new(data, vec![labels(["a", "b"]), labels(2..4)])?;
//!
//! assert_eq!(arr.get(&key!["b", 3])?, &4);
//!
//! let column = arr.slice(&sel![.., 3])?;
//! assert_eq!(column.shape(), &[2]);
//! assert_eq!(column.get(&key!["a"])?, &2);
//! # Ok::<(), axisarray::Error>(())
//! ```
//!
//! The default label type is [`Label`], which mixes integers, strings and
//! tuples, but any `Clone + Eq + Hash + Debug` type works.

mod array;
pub use array::{Array, Indices};

mod array_index;
pub use array_index::ArrayIndex;

mod axis;
pub use axis::Axis;

mod error;
pub use error::{Error, Result, ShapeError};

mod label;
pub use label::{labels, Label};

mod labeled;
pub use labeled::{
    broadcast, Deferred, Key, Keys, LabeledArray, Mapped, Operand, PendingMap, Selection,
    Sliceable,
};

mod order;
pub use order::{ColumnMajor, Order, RowMajor};

mod selector;
pub use selector::{Keep, Selector};

mod shape;
pub use shape::Shape;

/// Shape introspection shared by backing stores and labeled arrays.
pub trait NDArray {
    fn shape(&self) -> &[usize];

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn len(&self) -> usize {
        self.shape().iter().product()
    }

    #[inline]
    fn ndims(&self) -> usize {
        self.shape().len()
    }
}
