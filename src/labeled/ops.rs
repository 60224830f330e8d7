use core::{
    num::Wrapping,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
        SubAssign,
    },
};

use num_complex::Complex;

use super::LabeledArray;
use crate::{Array, Order};

// Operators act on the backing store and carry the axes over unchanged.
// There is no impl for two labeled operands; use `broadcast`.

macro_rules! impl_unary_op {
    ($trait:ident, $op:ident) => {
        impl<O, T, L> $trait for LabeledArray<T, L, O>
        where
            O: Order,
            T: $trait<Output = T> + Clone,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self) -> Self::Output {
                LabeledArray {
                    axes: self.axes,
                    data: self.data.$op(),
                }
            }
        }

        impl<O, T, L> $trait for &LabeledArray<T, L, O>
        where
            O: Order,
            T: $trait<Output = T> + Clone,
            L: Clone,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self) -> Self::Output {
                LabeledArray::from_parts(self.axes.clone(), (&self.data).$op())
            }
        }
    };
}

impl_unary_op!(Neg, neg);
impl_unary_op!(Not, not);

macro_rules! impl_binary_op {
    ($trait:ident, $op:ident) => {
        impl_binary_op!(@rhs $trait, $op, Array<T1, O>, T: $trait<T1, Output = T> + Clone, T1: Clone);
        impl_binary_op!(@rhs $trait, $op, &Array<T1, O>, T: $trait<T1, Output = T> + Clone, T1: Clone);
        impl_binary_op!(@rhs $trait, $op, Wrapping<T1>, T: $trait<Wrapping<T1>, Output = T> + Clone, T1: Copy);
        impl_binary_op!(@rhs $trait, $op, Complex<T1>, T: $trait<Complex<T1>, Output = T> + Clone, T1: Copy);
        impl_binary_op!(@lhs $trait, $op, Wrapping<T1>);
        impl_binary_op!(@lhs $trait, $op, Complex<T1>);
    };
    (@rhs $trait:ident, $op:ident, $rhs:ty, $( $bound:tt )*) => {
        impl<O, T, L, T1> $trait<$rhs> for LabeledArray<T, L, O>
        where
            O: Order,
            $( $bound )*
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: $rhs) -> Self::Output {
                LabeledArray {
                    axes: self.axes,
                    data: self.data.$op(rhs),
                }
            }
        }

        impl<O, T, L, T1> $trait<$rhs> for &LabeledArray<T, L, O>
        where
            O: Order,
            L: Clone,
            $( $bound )*
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: $rhs) -> Self::Output {
                LabeledArray::from_parts(self.axes.clone(), (&self.data).$op(rhs))
            }
        }
    };
    (@lhs $trait:ident, $op:ident, $lhs:ty) => {
        impl<O, T, L, T1> $trait<LabeledArray<T, L, O>> for $lhs
        where
            O: Order,
            $lhs: $trait<T, Output = T>,
            T: Clone,
            T1: Copy,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: LabeledArray<T, L, O>) -> Self::Output {
                LabeledArray {
                    axes: rhs.axes,
                    data: <$lhs as $trait<Array<T, O>>>::$op(self, rhs.data),
                }
            }
        }

        impl<O, T, L, T1> $trait<&LabeledArray<T, L, O>> for $lhs
        where
            O: Order,
            $lhs: $trait<T, Output = T>,
            L: Clone,
            T: Clone,
            T1: Copy,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: &LabeledArray<T, L, O>) -> Self::Output {
                LabeledArray::from_parts(
                    rhs.axes.clone(),
                    <$lhs as $trait<&Array<T, O>>>::$op(self, &rhs.data),
                )
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(BitAnd, bitand);
impl_binary_op!(BitOr, bitor);
impl_binary_op!(BitXor, bitxor);
impl_binary_op!(Div, div);
impl_binary_op!(Mul, mul);
impl_binary_op!(Rem, rem);
impl_binary_op!(Shl, shl);
impl_binary_op!(Shr, shr);
impl_binary_op!(Sub, sub);

macro_rules! impl_binary_op_with_scalar {
    ($trait:ident, $op:ident, $scalar_type:ty) => {
        impl<O, T, L> $trait<$scalar_type> for LabeledArray<T, L, O>
        where
            O: Order,
            T: $trait<$scalar_type, Output = T> + Clone,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: $scalar_type) -> Self::Output {
                LabeledArray {
                    axes: self.axes,
                    data: self.data.$op(rhs),
                }
            }
        }

        impl<O, T, L> $trait<$scalar_type> for &LabeledArray<T, L, O>
        where
            O: Order,
            T: $trait<$scalar_type, Output = T> + Clone,
            L: Clone,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: $scalar_type) -> Self::Output {
                LabeledArray::from_parts(self.axes.clone(), (&self.data).$op(rhs))
            }
        }

        impl<O, T, L> $trait<LabeledArray<T, L, O>> for $scalar_type
        where
            O: Order,
            $scalar_type: $trait<T, Output = T>,
            T: Clone,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: LabeledArray<T, L, O>) -> Self::Output {
                LabeledArray {
                    axes: rhs.axes,
                    data: <$scalar_type as $trait<Array<T, O>>>::$op(self, rhs.data),
                }
            }
        }

        impl<O, T, L> $trait<&LabeledArray<T, L, O>> for $scalar_type
        where
            O: Order,
            $scalar_type: $trait<T, Output = T>,
            L: Clone,
            T: Clone,
        {
            type Output = LabeledArray<T, L, O>;

            fn $op(self, rhs: &LabeledArray<T, L, O>) -> Self::Output {
                LabeledArray::from_parts(
                    rhs.axes.clone(),
                    <$scalar_type as $trait<&Array<T, O>>>::$op(self, &rhs.data),
                )
            }
        }
    };
}

macro_rules! impl_all_binary_op_with_scalar {
    ($scalar_type:ty) => {
        impl_binary_op_with_scalar!(Add, add, $scalar_type);
        impl_binary_op_with_scalar!(BitAnd, bitand, $scalar_type);
        impl_binary_op_with_scalar!(BitOr, bitor, $scalar_type);
        impl_binary_op_with_scalar!(BitXor, bitxor, $scalar_type);
        impl_binary_op_with_scalar!(Div, div, $scalar_type);
        impl_binary_op_with_scalar!(Mul, mul, $scalar_type);
        impl_binary_op_with_scalar!(Rem, rem, $scalar_type);
        impl_binary_op_with_scalar!(Shl, shl, $scalar_type);
        impl_binary_op_with_scalar!(Shr, shr, $scalar_type);
        impl_binary_op_with_scalar!(Sub, sub, $scalar_type);
    };
}

impl_all_binary_op_with_scalar!(bool);
impl_all_binary_op_with_scalar!(usize);
impl_all_binary_op_with_scalar!(u8);
impl_all_binary_op_with_scalar!(u16);
impl_all_binary_op_with_scalar!(u32);
impl_all_binary_op_with_scalar!(u64);
impl_all_binary_op_with_scalar!(isize);
impl_all_binary_op_with_scalar!(i8);
impl_all_binary_op_with_scalar!(i16);
impl_all_binary_op_with_scalar!(i32);
impl_all_binary_op_with_scalar!(i64);
impl_all_binary_op_with_scalar!(f32);
impl_all_binary_op_with_scalar!(f64);

macro_rules! impl_binary_assign_op {
    ($trait:ident, $op:ident) => {
        impl_binary_assign_op!(@rhs $trait, $op, &Array<T1, O>, T: $trait<T1>, T1: Clone);
        impl_binary_assign_op!(@rhs $trait, $op, Wrapping<T1>, T: $trait<Wrapping<T1>>, T1: Copy);
        impl_binary_assign_op!(@rhs $trait, $op, Complex<T1>, T: $trait<Complex<T1>>, T1: Copy);
    };
    (@rhs $trait:ident, $op:ident, $rhs:ty, $( $bound:tt )*) => {
        impl<O, T, L, T1> $trait<$rhs> for LabeledArray<T, L, O>
        where
            O: Order,
            $( $bound )*
        {
            fn $op(&mut self, rhs: $rhs) {
                self.data.$op(rhs);
            }
        }
    };
}

impl_binary_assign_op!(AddAssign, add_assign);
impl_binary_assign_op!(BitAndAssign, bitand_assign);
impl_binary_assign_op!(BitOrAssign, bitor_assign);
impl_binary_assign_op!(BitXorAssign, bitxor_assign);
impl_binary_assign_op!(DivAssign, div_assign);
impl_binary_assign_op!(MulAssign, mul_assign);
impl_binary_assign_op!(RemAssign, rem_assign);
impl_binary_assign_op!(ShlAssign, shl_assign);
impl_binary_assign_op!(ShrAssign, shr_assign);
impl_binary_assign_op!(SubAssign, sub_assign);

macro_rules! impl_binary_assign_op_with_scalar {
    ($trait:ident, $op:ident, $scalar_type:ty) => {
        impl<O, T, L> $trait<$scalar_type> for LabeledArray<T, L, O>
        where
            O: Order,
            T: $trait<$scalar_type>,
        {
            fn $op(&mut self, rhs: $scalar_type) {
                self.data.$op(rhs);
            }
        }
    };
}

macro_rules! impl_all_binary_assign_op_with_scalar {
    ($scalar_type:ty) => {
        impl_binary_assign_op_with_scalar!(AddAssign, add_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(BitAndAssign, bitand_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(BitOrAssign, bitor_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(BitXorAssign, bitxor_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(DivAssign, div_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(MulAssign, mul_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(RemAssign, rem_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(ShlAssign, shl_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(ShrAssign, shr_assign, $scalar_type);
        impl_binary_assign_op_with_scalar!(SubAssign, sub_assign, $scalar_type);
    };
}

impl_all_binary_assign_op_with_scalar!(bool);
impl_all_binary_assign_op_with_scalar!(usize);
impl_all_binary_assign_op_with_scalar!(u8);
impl_all_binary_assign_op_with_scalar!(u16);
impl_all_binary_assign_op_with_scalar!(u32);
impl_all_binary_assign_op_with_scalar!(u64);
impl_all_binary_assign_op_with_scalar!(isize);
impl_all_binary_assign_op_with_scalar!(i8);
impl_all_binary_assign_op_with_scalar!(i16);
impl_all_binary_assign_op_with_scalar!(i32);
impl_all_binary_assign_op_with_scalar!(i64);
impl_all_binary_assign_op_with_scalar!(f32);
impl_all_binary_assign_op_with_scalar!(f64);

#[cfg(test)]
mod tests {
    use core::num::Wrapping;

    use num_complex::Complex;

    use crate::{key, labels, Array, LabeledArray, Result};

    fn a2() -> Result<LabeledArray<i32>> {
        let data = Array::<_>::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        LabeledArray::new(data, vec![labels(["a", "b"]), labels(2..4)])
    }

    #[test]
    fn unary_ops() -> Result<()> {
        let a2 = a2()?;
        let subject = -&a2;

        assert_eq!(subject.axes(), a2.axes());
        assert_eq!(subject.get(&key!["b", 3])?, &-4);
        assert_eq!((!a2).get(&key!["a", 2])?, &!1);

        Ok(())
    }

    #[test]
    fn binary_ops_with_scalar() -> Result<()> {
        let a2 = a2()?;
        {
            let subject = &a2 * 10;

            assert_eq!(subject.axes(), a2.axes());
            assert_eq!(subject.values().copied().collect::<Vec<_>>(), [10, 20, 30, 40]);
        }
        {
            let subject = 10 - &a2;

            assert_eq!(subject.get(&key!["a", 3])?, &8);
        }
        {
            let subject = a2.clone() << 1_u32;

            assert_eq!(subject.values().copied().collect::<Vec<_>>(), [2, 4, 6, 8]);
        }

        Ok(())
    }

    #[test]
    fn binary_ops_with_dense() -> Result<()> {
        let a2 = a2()?;
        let dense = Array::<_>::from_shape_vec([2, 2], vec![10, 20, 30, 40])?;
        let subject = &a2 + &dense;

        assert_eq!(subject.get(&key!["b", 2])?, &33);
        assert_eq!((a2 - dense).get(&key!["a", 3])?, &-18);

        Ok(())
    }

    #[test]
    #[should_panic]
    fn binary_ops_with_mismatched_dense() {
        let a2 = a2().unwrap();
        let dense = Array::<i32>::from(vec![1, 2, 3, 4]);
        let _ = &a2 + &dense;
    }

    #[test]
    fn binary_ops_with_wrapping_and_complex() -> Result<()> {
        let wrapping = LabeledArray::<_>::from_elem(vec![labels(["x", "y"])], Wrapping(250_u8))?;
        let subject = &wrapping + Wrapping(10_u8);

        assert_eq!(subject.get(&key!["y"])?, &Wrapping(4));

        let complex = LabeledArray::<_>::from_elem(vec![labels(["x"])], Complex::new(1.0, 0.0))?;
        let subject = Complex::new(0.0, 1.0) * complex;

        assert_eq!(subject.get(&key!["x"])?, &Complex::new(0.0, 1.0));

        Ok(())
    }

    #[test]
    fn binary_assign_ops() -> Result<()> {
        let a2 = a2()?;
        let mut subject = a2.clone();
        subject += 1;
        subject *= &Array::<_>::from_shape_vec([2, 2], vec![1, 0, 1, 0])?;

        assert_eq!(subject.axes(), a2.axes());
        assert_eq!(subject.values().copied().collect::<Vec<_>>(), [2, 0, 4, 0]);

        Ok(())
    }
}
