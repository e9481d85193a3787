//! fixed-point numerical types

use std::fmt;

// shared between Fixed and F2Dot14
macro_rules! fixed_impl {
    ($name:ident, $bits:literal, $fract_bits:literal, $ty:ty) => {
        #[doc = concat!(stringify!($bits), "-bit signed fixed point number with ", stringify!($fract_bits), " bits of fraction." )]
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($ty);

        impl $name {
            /// Minimum value.
            pub const MIN: Self = Self(<$ty>::MIN);

            /// Maximum value.
            pub const MAX: Self = Self(<$ty>::MAX);

            const INT_MASK: $ty = !0 << $fract_bits;
            const ONE: $ty = 1 << $fract_bits;
            const FRACT_BITS: usize = $fract_bits;

            /// Construct from the raw big-endian bit pattern found in a font.
            pub const fn from_bits(bits: $ty) -> Self {
                Self(bits)
            }

            /// The raw bit pattern of this value.
            pub const fn to_bits(self) -> $ty {
                self.0
            }
        }
    };
}

/// impl conversions to/from a float type large enough to be lossless.
macro_rules! float_conv {
    ($name:ident, $to:ident, $from:ident, $ty:ty) => {
        impl $name {
            #[doc = concat!("Creates a fixed point value from an `", stringify!($ty), "`.")]
            ///
            /// The float is rounded to the nearest representable value.
            pub fn $from(x: $ty) -> Self {
                Self((x * Self::ONE as $ty).round() as _)
            }

            #[doc = concat!("Returns the value as an `", stringify!($ty), "`.")]
            ///
            /// All representable values round-trip through this conversion.
            pub fn $to(self) -> $ty {
                let int = ((self.0 & Self::INT_MASK) >> Self::FRACT_BITS) as $ty;
                let fract = (self.0 & !Self::INT_MASK) as $ty / Self::ONE as $ty;
                int + fract
            }
        }

        // lossless in float form, so borrow the float fmt impls
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                self.$to().fmt(f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                self.$to().fmt(f)
            }
        }
    };
}

fixed_impl!(F2Dot14, 16, 14, i16);
fixed_impl!(Fixed, 32, 16, i32);
float_conv!(F2Dot14, to_f32, from_f32, f32);
float_conv!(Fixed, to_f64, from_f64, f64);

impl F2Dot14 {
    /// Returns the value as an `f64`.
    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }
}

impl Fixed {
    /// Returns the value as an `f32`, possibly losing precision.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}
