use core::fmt::Debug;

use crate::Order;

/// Anything that can describe the extent of each dimension of an array.
pub trait Shape: AsRef<[usize]> + Debug {
    fn array_len(&self) -> usize {
        self.as_ref().iter().product()
    }

    fn ndims(&self) -> usize {
        self.as_ref().len()
    }

    fn to_default_strides<O>(&self) -> Vec<usize>
    where
        O: Order,
    {
        O::default_strides(self.as_ref())
    }

    fn to_vec(&self) -> Vec<usize> {
        self.as_ref().to_vec()
    }
}

impl<const N: usize> Shape for [usize; N] {}

impl Shape for Vec<usize> {}

impl Shape for &[usize] {}

#[cfg(test)]
mod tests {
    use super::Shape;
    use crate::{ColumnMajor, RowMajor};

    #[test]
    fn shape_by_array() {
        let shape = [2_usize, 3, 4];

        assert_eq!(shape.array_len(), 24);
        assert_eq!(shape.ndims(), 3);
        assert_eq!(shape.to_default_strides::<RowMajor>(), [12, 4, 1]);
    }

    #[test]
    fn shape_by_vec() {
        let shape = vec![2_usize, 3, 4];

        assert_eq!(shape.array_len(), 24);
        assert_eq!(shape.ndims(), 3);
        assert_eq!(shape.to_default_strides::<ColumnMajor>(), [1, 2, 6]);
    }

    #[test]
    fn empty_shape_has_one_element() {
        let shape: [usize; 0] = [];

        assert_eq!(shape.array_len(), 1);
        assert_eq!(shape.ndims(), 0);
    }
}
