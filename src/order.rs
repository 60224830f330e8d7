/// Memory layout of a backing store.
///
/// The order decides both the default strides of an array and the order in
/// which its elements, and the keys naming them, are visited.
pub trait Order: 'static {
    fn convert_shape_to_strides(shape: &[usize], strides: &mut [usize]);
    /// Advances `indices` to the next position in memory order.
    ///
    /// Returns `false` when the indices wrapped around past the last element.
    fn increment_indices(indices: &mut [usize], shape: &[usize]) -> bool;
    fn name<'a>() -> &'a str;

    fn default_strides(shape: &[usize]) -> Vec<usize> {
        let mut strides = vec![0; shape.len()];
        Self::convert_shape_to_strides(shape, &mut strides);
        strides
    }

    fn unravel_index(offset: usize, shape: &[usize], strides: &[usize]) -> Vec<usize> {
        debug_assert_eq!(shape.len(), strides.len());

        shape
            .iter()
            .zip(strides)
            .map(|(&dim, &stride)| if dim == 0 { 0 } else { offset / stride % dim })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RowMajor;

impl Order for RowMajor {
    fn convert_shape_to_strides(shape: &[usize], strides: &mut [usize]) {
        debug_assert_eq!(shape.len(), strides.len());

        strides
            .iter_mut()
            .zip(shape.iter())
            .rfold(1, |acc, (stride, &dim)| {
                *stride = acc;
                acc * dim.max(1)
            });
    }

    fn increment_indices(indices: &mut [usize], shape: &[usize]) -> bool {
        for (index, &dim) in indices.iter_mut().rev().zip(shape.iter().rev()) {
            *index += 1;
            if *index == dim {
                *index = 0;
            } else {
                return true;
            }
        }
        false
    }

    fn name<'a>() -> &'a str {
        r#""row major""#
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ColumnMajor;

impl Order for ColumnMajor {
    fn convert_shape_to_strides(shape: &[usize], strides: &mut [usize]) {
        debug_assert_eq!(shape.len(), strides.len());

        strides
            .iter_mut()
            .zip(shape.iter())
            .fold(1, |acc, (stride, &dim)| {
                *stride = acc;
                acc * dim.max(1)
            });
    }

    fn increment_indices(indices: &mut [usize], shape: &[usize]) -> bool {
        for (index, &dim) in indices.iter_mut().zip(shape.iter()) {
            *index += 1;
            if *index == dim {
                *index = 0;
            } else {
                return true;
            }
        }
        false
    }

    fn name<'a>() -> &'a str {
        r#""column major""#
    }
}
