//! Arithmetic operators on LUT tables.
//!
//! Every LUT type supports `+ - * /` with a scalar. 3x1D and 3D LUTs also
//! accept an RGB triplet, applied per channel.

use std::ops::{Add, Div, Mul, Sub};

use crate::{Lut1D, Lut2D, Lut3D};

macro_rules! impl_scalar_ops {
    ($lut:ty; $($trait:ident, $method:ident, $op:tt);+ $(;)?) => {
        $(
            impl $trait<f64> for $lut {
                type Output = $lut;

                fn $method(mut self, rhs: f64) -> $lut {
                    self.map_values(|_, v| v $op rhs);
                    self
                }
            }
        )+
    };
}

macro_rules! impl_triplet_ops {
    ($lut:ty; $($trait:ident, $method:ident, $op:tt);+ $(;)?) => {
        $(
            impl $trait<[f64; 3]> for $lut {
                type Output = $lut;

                fn $method(mut self, rhs: [f64; 3]) -> $lut {
                    self.map_values(|c, v| v $op rhs[c]);
                    self
                }
            }
        )+
    };
}

macro_rules! impl_ops {
    ($($lut:ty),+) => {
        $(
            impl_scalar_ops!($lut; Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);
        )+
    };
}

impl_ops!(Lut1D, Lut2D, Lut3D);
impl_triplet_ops!(Lut2D; Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);
impl_triplet_ops!(Lut3D; Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_scalar() {
        let lut = (Lut1D::identity(5).unwrap() + 1.0) * 2.0;
        assert_eq!(lut.table(), &[2.0, 2.5, 3.0, 3.5, 4.0]);

        let lut = Lut3D::identity(2).unwrap() - 0.5;
        assert_eq!(lut.table()[0], [-0.5; 3]);
    }

    #[test]
    fn test_triplet() {
        let lut = Lut2D::identity(3).unwrap() * [1.0, 2.0, 4.0];
        assert_eq!(lut.table()[2], [1.0, 2.0, 4.0]);

        let lut = Lut3D::identity(3).unwrap() / [2.0, 1.0, 0.5];
        assert_abs_diff_eq!(lut.apply([1.0, 1.0, 1.0])[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_keeps_metadata() {
        let lut = Lut1D::identity(4).unwrap().with_name("Curve") + 0.1;
        assert_eq!(lut.name, "Curve");
    }
}
