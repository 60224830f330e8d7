use core::fmt;

use super::Array;
use crate::{NDArray, Order};

const NUM_EDGE_ELEMENTS: usize = 3;
pub(crate) const TRUNCATION_THRESHOLD: usize = 1_000;

pub(crate) struct FormatOption {
    num_edge_elements: usize,
}

impl Default for FormatOption {
    fn default() -> Self {
        Self {
            num_edge_elements: NUM_EDGE_ELEMENTS,
        }
    }
}

impl FormatOption {
    pub(crate) fn new(array_len: usize, alternate: bool) -> Self {
        Self::default().without_truncation(alternate || array_len < TRUNCATION_THRESHOLD)
    }

    pub(crate) fn without_truncation(mut self, valid: bool) -> Self {
        if valid {
            self.num_edge_elements = usize::MAX / 2;
        }
        self
    }

    /// Positions to show along a dimension of length `len`; `None` marks
    /// where the elided middle goes.
    pub(crate) fn visible(&self, len: usize) -> Vec<Option<usize>> {
        let edge = self.num_edge_elements;
        if len > edge * 2 {
            (0..edge)
                .map(Some)
                .chain(core::iter::once(None))
                .chain((len - edge..len).map(Some))
                .collect()
        } else {
            (0..len).map(Some).collect()
        }
    }
}

fn format_array<T, O, F>(
    array: &Array<T, O>,
    axis: usize,
    offset: usize,
    option: &FormatOption,
    f: &mut fmt::Formatter<'_>,
    fmt: &mut F,
) -> fmt::Result
where
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    O: Order,
{
    let n_dims = array.ndims() - axis;
    if n_dims == 0 {
        return fmt(&array.storage[offset], f);
    }

    f.write_str("[")?;
    let stride = array.strides[axis];
    for (i, position) in option.visible(array.shape[axis]).into_iter().enumerate() {
        fmt_indent(i, n_dims, axis + 1, f)?;
        match position {
            Some(p) => format_array(array, axis + 1, offset + p * stride, option, f, fmt)?,
            None => f.write_str("...")?,
        }
    }
    f.write_str("]")
}

fn fmt_indent(i: usize, n_dims: usize, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if i != 0 {
        f.write_str(",")?;
        if n_dims > 1 {
            write!(f, "{}", "\n".repeat(n_dims - 1))?;
            write!(f, "{}", " ".repeat(indent))?;
        } else {
            f.write_str(" ")?;
        }
    }
    Ok(())
}

fn format_root<T, O, F>(array: &Array<T, O>, f: &mut fmt::Formatter<'_>, mut fmt: F) -> fmt::Result
where
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    O: Order,
{
    if array.is_empty() {
        let n = array.ndims();
        return write!(f, "{}{}", "[".repeat(n), "]".repeat(n));
    }
    let option = FormatOption::new(array.len(), f.alternate());
    format_array(array, 0, 0, &option, f, &mut fmt)
}

impl<T, O> fmt::Debug for Array<T, O>
where
    O: Order,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_root(self, f, <T as fmt::Debug>::fmt)?;
        write!(
            f,
            ", shape={:?}, strides={:?}, order={}",
            self.shape,
            self.strides,
            O::name(),
        )
    }
}

macro_rules! impl_fmt {
    ($trait:ident) => {
        impl<T, O> fmt::$trait for Array<T, O>
        where
            O: Order,
            T: fmt::$trait,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_root(self, f, <T as fmt::$trait>::fmt)
            }
        }
    };
}

impl_fmt!(Display);
impl_fmt!(LowerExp);
impl_fmt!(UpperExp);
impl_fmt!(LowerHex);
impl_fmt!(UpperHex);

#[cfg(test)]
mod tests {
    use crate::{Array, ArrayIndex, ColumnMajor, Result};

    #[test]
    fn format_empty_arrays() -> Result<()> {
        let a1 = Array::<usize>::from(Vec::new());
        let a2 = a1.clone().into_shape([0, 0])?;
        let a3 = a1.clone().into_shape([2, 0, 4])?;

        assert_eq!(format!("{}", a1), "[]");
        assert_eq!(format!("{}", a2), "[[]]");
        assert_eq!(format!("{}", a3), "[[[]]]");

        Ok(())
    }

    #[test]
    fn format_0d_array() -> Result<()> {
        let a1 = Array::<usize>::from(vec![1]);
        let a0 = a1.slice(&[ArrayIndex::Index(0)])?;

        assert_eq!(format!("{}", a0), "1");

        Ok(())
    }

    #[test]
    fn format_1d_array() {
        const N: usize = super::TRUNCATION_THRESHOLD + 10;
        let a1 = Array::<i32>::from(vec![1; N]);

        assert_eq!(format!("{}", a1), "[1, 1, 1, ..., 1, 1, 1]");
        assert_eq!(format!("{:#}", a1), format!("[{}]", ["1"; N].join(", ")));
    }

    #[test]
    fn format_2d_array() -> Result<()> {
        let a2 = Array::<i32>::from(vec![1, 2, 3, 4]).into_shape([2, 2])?;

        assert_eq!(format!("{}", a2), "[[1, 2],\n [3, 4]]");
        assert_eq!(
            format!("{:?}", a2),
            "[[1, 2],\n [3, 4]], shape=[2, 2], strides=[2, 1], order=\"row major\""
        );

        Ok(())
    }

    #[test]
    fn format_2d_array_with_f_order() -> Result<()> {
        let a2 = Array::<i32, ColumnMajor>::from(vec![1, 3, 2, 4]).into_shape([2, 2])?;

        assert_eq!(format!("{}", a2), "[[1, 2],\n [3, 4]]");

        Ok(())
    }

    #[test]
    fn format_exponent() {
        let a1 = Array::<f64>::from(vec![1500.0, 0.25]);

        assert_eq!(format!("{:e}", a1), "[1.5e3, 2.5e-1]");
    }

    #[test]
    fn format_3d_array() -> Result<()> {
        let a3 = Array::<i32>::from(vec![1; 50 * 50 * 50]).into_shape([50, 50, 50])?;
        let expected = "\
[[[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]],

 [[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]],

 [[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]],

 ...,

 [[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]],

 [[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]],

 [[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]]]";

        assert_eq!(format!("{}", a3), expected);

        Ok(())
    }
}
