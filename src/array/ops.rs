use core::{
    num::Wrapping,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
        SubAssign,
    },
};

use num_complex::Complex;

use super::Array;
use crate::Order;

fn assert_same_shape(lhs: &[usize], rhs: &[usize]) {
    assert!(
        lhs == rhs,
        "operands cannot be combined elementwise: shapes {:?} and {:?} differ",
        lhs,
        rhs
    );
}

macro_rules! impl_unary_op {
    ($trait:ident, $op:ident) => {
        impl<O, T> $trait for Array<T, O>
        where
            O: Order,
            T: $trait<Output = T> + Clone,
        {
            type Output = Array<T, O>;

            fn $op(mut self) -> Self::Output {
                for elem in self.iter_mut() {
                    *elem = elem.clone().$op();
                }
                self
            }
        }

        impl<O, T> $trait for &Array<T, O>
        where
            O: Order,
            T: $trait<Output = T> + Clone,
        {
            type Output = Array<T, O>;

            fn $op(self) -> Self::Output {
                self.map(|elem| elem.clone().$op())
            }
        }
    };
}

impl_unary_op!(Neg, neg);
impl_unary_op!(Not, not);

macro_rules! impl_binary_op {
    ($trait:ident, $op:ident) => {
        impl<O, T, T1> $trait<Array<T1, O>> for Array<T, O>
        where
            O: Order,
            T: $trait<T1, Output = T> + Clone,
            T1: Clone,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: Array<T1, O>) -> Self::Output {
                self.$op(&rhs)
            }
        }

        impl<O, T, T1> $trait<&Array<T1, O>> for Array<T, O>
        where
            O: Order,
            T: $trait<T1, Output = T> + Clone,
            T1: Clone,
        {
            type Output = Array<T, O>;

            fn $op(mut self, rhs: &Array<T1, O>) -> Self::Output {
                assert_same_shape(&self.shape, &rhs.shape);
                for (dst, src) in self.iter_mut().zip(rhs.iter()) {
                    *dst = dst.clone().$op(src.clone());
                }
                self
            }
        }

        impl<O, T, T1> $trait<Array<T1, O>> for &Array<T, O>
        where
            O: Order,
            T: $trait<T1, Output = T> + Clone,
            T1: Clone,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: Array<T1, O>) -> Self::Output {
                self.$op(&rhs)
            }
        }

        impl<O, T, T1> $trait<&Array<T1, O>> for &Array<T, O>
        where
            O: Order,
            T: $trait<T1, Output = T> + Clone,
            T1: Clone,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: &Array<T1, O>) -> Self::Output {
                assert_same_shape(&self.shape, &rhs.shape);
                let storage = self
                    .iter()
                    .zip(rhs.iter())
                    .map(|(l, r)| l.clone().$op(r.clone()))
                    .collect();
                Array::new_unchecked(self.shape.clone(), storage)
            }
        }

        impl<O, T, T1> $trait<Wrapping<T1>> for Array<T, O>
        where
            O: Order,
            T: $trait<Wrapping<T1>, Output = T> + Clone,
            T1: Copy,
        {
            type Output = Array<T, O>;

            fn $op(mut self, rhs: Wrapping<T1>) -> Self::Output {
                for elem in self.iter_mut() {
                    *elem = elem.clone().$op(rhs);
                }
                self
            }
        }

        impl<O, T, T1> $trait<Wrapping<T1>> for &Array<T, O>
        where
            O: Order,
            T: $trait<Wrapping<T1>, Output = T> + Clone,
            T1: Copy,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: Wrapping<T1>) -> Self::Output {
                self.map(|elem| elem.clone().$op(rhs))
            }
        }

        impl<O, T, T1> $trait<Complex<T1>> for Array<T, O>
        where
            O: Order,
            T: $trait<Complex<T1>, Output = T> + Clone,
            T1: Copy,
        {
            type Output = Array<T, O>;

            fn $op(mut self, rhs: Complex<T1>) -> Self::Output {
                for elem in self.iter_mut() {
                    *elem = elem.clone().$op(rhs);
                }
                self
            }
        }

        impl<O, T, T1> $trait<Complex<T1>> for &Array<T, O>
        where
            O: Order,
            T: $trait<Complex<T1>, Output = T> + Clone,
            T1: Copy,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: Complex<T1>) -> Self::Output {
                self.map(|elem| elem.clone().$op(rhs))
            }
        }

        impl_binary_op!(@lhs $trait, $op, Wrapping<T1>);
        impl_binary_op!(@lhs $trait, $op, Complex<T1>);
    };
    (@lhs $trait:ident, $op:ident, $lhs:ty) => {
        impl<O, T, T1> $trait<Array<T, O>> for $lhs
        where
            O: Order,
            $lhs: $trait<T, Output = T>,
            T: Clone,
            T1: Copy,
        {
            type Output = Array<T, O>;

            fn $op(self, mut rhs: Array<T, O>) -> Self::Output {
                for elem in rhs.iter_mut() {
                    *elem = self.$op(elem.clone());
                }
                rhs
            }
        }

        impl<O, T, T1> $trait<&Array<T, O>> for $lhs
        where
            O: Order,
            $lhs: $trait<T, Output = T>,
            T: Clone,
            T1: Copy,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: &Array<T, O>) -> Self::Output {
                rhs.map(|elem| self.$op(elem.clone()))
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
        impl<O, T> $trait<$scalar_type> for Array<T, O>
        where
            O: Order,
            T: $trait<$scalar_type, Output = T> + Clone,
        {
            type Output = Array<T, O>;

            fn $op(mut self, rhs: $scalar_type) -> Self::Output {
                for elem in self.iter_mut() {
                    *elem = elem.clone().$op(rhs);
                }
                self
            }
        }

        impl<O, T> $trait<$scalar_type> for &Array<T, O>
        where
            O: Order,
            T: $trait<$scalar_type, Output = T> + Clone,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: $scalar_type) -> Self::Output {
                self.map(|elem| elem.clone().$op(rhs))
            }
        }

        impl<O, T> $trait<Array<T, O>> for $scalar_type
        where
            O: Order,
            $scalar_type: $trait<T, Output = T>,
            T: Clone,
        {
            type Output = Array<T, O>;

            fn $op(self, mut rhs: Array<T, O>) -> Self::Output {
                for elem in rhs.iter_mut() {
                    *elem = self.$op(elem.clone());
                }
                rhs
            }
        }

        impl<O, T> $trait<&Array<T, O>> for $scalar_type
        where
            O: Order,
            $scalar_type: $trait<T, Output = T>,
            T: Clone,
        {
            type Output = Array<T, O>;

            fn $op(self, rhs: &Array<T, O>) -> Self::Output {
                rhs.map(|elem| self.$op(elem.clone()))
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
        impl<O, T, T1> $trait<&Array<T1, O>> for Array<T, O>
        where
            O: Order,
            T: $trait<T1>,
            T1: Clone,
        {
            fn $op(&mut self, rhs: &Array<T1, O>) {
                assert_same_shape(&self.shape, &rhs.shape);
                for (dst, src) in self.iter_mut().zip(rhs.iter()) {
                    dst.$op(src.clone());
                }
            }
        }

        impl<O, T, T1> $trait<Wrapping<T1>> for Array<T, O>
        where
            O: Order,
            T: $trait<Wrapping<T1>>,
            T1: Copy,
        {
            fn $op(&mut self, rhs: Wrapping<T1>) {
                for elem in self.iter_mut() {
                    elem.$op(rhs)
                }
            }
        }

        impl<O, T, T1> $trait<Complex<T1>> for Array<T, O>
        where
            O: Order,
            T: $trait<Complex<T1>>,
            T1: Copy,
        {
            fn $op(&mut self, rhs: Complex<T1>) {
                for elem in self.iter_mut() {
                    elem.$op(rhs)
                }
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
        impl<O, T> $trait<$scalar_type> for Array<T, O>
        where
            O: Order,
            T: $trait<$scalar_type>,
        {
            fn $op(&mut self, rhs: $scalar_type) {
                for elem in self.iter_mut() {
                    elem.$op(rhs)
                }
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

    use crate::{Array, NDArray, Result};

    fn a3() -> Result<Array<i32>> {
        (0..).take(24).collect::<Array<_>>().into_shape([2, 3, 4])
    }

    #[test]
    fn unary_ops() -> Result<()> {
        let a3 = a3()?;
        {
            let subject = -a3.clone();

            assert_eq!(subject.shape(), &[2, 3, 4]);
            for (i, (&actual, expected)) in subject.iter().zip((0..).map(|x: i32| -x)).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }
        {
            let subject = !&a3;

            for (i, (&actual, expected)) in subject.iter().zip((0..).map(|x: i32| !x)).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }

        Ok(())
    }

    #[test]
    fn binary_ops() -> Result<()> {
        let a3 = a3()?;
        let b3 = a3.map(|&x| x + 10);
        {
            let subject = a3.clone() + b3.clone();

            for (i, (&actual, expected)) in subject.iter().zip((10..).step_by(2)).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }
        {
            let subject = &b3 - &a3;

            assert!(subject.iter().all(|&x| x == 10));
        }
        {
            let subject = &a3 * 3;

            for (i, (&actual, expected)) in subject.iter().zip((0..).step_by(3)).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }
        {
            let subject = 30 - &a3;

            for (i, (&actual, expected)) in subject.iter().zip((7..=30).rev()).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }

        Ok(())
    }

    #[test]
    #[should_panic]
    fn binary_ops_with_different_shapes() {
        let a1 = Array::<i32>::from(vec![1, 2, 3]);
        let b1 = Array::<i32>::from(vec![1, 2]);
        let _ = &a1 + &b1;
    }

    #[test]
    fn binary_ops_with_wrapping() {
        let a1 = Array::<Wrapping<u8>>::from(vec![Wrapping(250), Wrapping(1)]);
        let subject = &a1 + Wrapping(10_u8);

        assert_eq!(subject.as_slice(), &[Wrapping(4), Wrapping(11)]);
    }

    #[test]
    fn binary_ops_with_complex() {
        let a1 = Array::<Complex<f64>>::from(vec![Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)]);
        let subject = a1 * Complex::new(0.0, 1.0);

        assert_eq!(
            subject.as_slice(),
            &[Complex::new(0.0, 1.0), Complex::new(-1.0, 0.0)]
        );
    }

    #[test]
    fn binary_ops_with_wrapping_on_the_left() {
        let a1 = Array::<Wrapping<u8>>::from(vec![Wrapping(10), Wrapping(1)]);
        let subject = Wrapping(5_u8) - &a1;

        assert_eq!(subject.as_slice(), &[Wrapping(251), Wrapping(4)]);
    }

    #[test]
    fn binary_assign_ops() -> Result<()> {
        let a3 = a3()?;
        {
            let mut subject = a3.clone();
            subject += &a3;

            for (i, (&actual, expected)) in subject.iter().zip((0..).step_by(2)).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }
        {
            let mut subject = a3.clone();
            subject += 3;

            for (i, (&actual, expected)) in subject.iter().zip(3..).enumerate() {
                assert_eq!(actual, expected, "{}th element is not equal", i);
            }
        }

        Ok(())
    }
}
