/// Newtype over `u32` with arithmetic and comparisons against same type and `u32`.
/// Arithmetic is **saturating**.
macro_rules! newtype_u32 {
    ($name:ident) => {
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl From<$name> for u32 {
            #[inline]
            fn from(v: $name) -> u32 {
                v.0
            }
        }
        impl From<$name> for usize {
            #[inline]
            fn from(v: $name) -> usize {
                v.0 as usize
            }
        }
        impl From<u32> for $name {
            #[inline]
            fn from(v: u32) -> $name {
                $name(v)
            }
        }
        impl From<usize> for $name {
            #[inline]
            fn from(v: usize) -> $name {
                $name(v as u32)
            }
        }

        impl ::core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::ops::Add<u32> for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: u32) -> $name {
                $name(self.0.saturating_add(rhs))
            }
        }
        impl ::core::ops::Mul for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                $name(self.0.saturating_mul(rhs.0))
            }
        }

        impl $name {
            #[inline]
            pub const fn as_u32(self) -> u32 {
                self.0
            }
            #[inline]
            pub const fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl ::core::cmp::PartialEq<u32> for $name {
            #[inline]
            fn eq(&self, other: &u32) -> bool {
                self.0 == *other
            }
        }
    };
}

newtype_u32!(Degree);
newtype_u32!(Base2K);
newtype_u32!(Dnum);
newtype_u32!(Rank);

impl Degree {
    pub fn log2(&self) -> usize {
        let n: usize = self.0 as usize;
        (usize::BITS - (n - 1).leading_zeros()) as _
    }

    pub fn is_power_of_two(&self) -> bool {
        self.0.is_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_log2() {
        assert_eq!(Degree(1024).log2(), 10);
        assert_eq!(Degree(128).log2(), 7);
        assert!(Degree(256).is_power_of_two());
        assert!(!Degree(300).is_power_of_two());
    }

    #[test]
    fn saturating_arith() {
        assert_eq!(Rank(u32::MAX) + 1, Rank(u32::MAX));
        assert_eq!(Base2K(4) * Base2K(3), Base2K(12));
        assert_eq!(usize::from(Dnum(3)), 3);
    }
}
