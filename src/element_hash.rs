//! The element's own hash, as used to pick a bucket

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Signed hash code produced by an element
pub type HashCode = i64;

/// A deterministic hash carried by the element itself.
///
/// Implementations must agree with `Eq`: equal elements have to produce equal hash codes.
/// Integers hash to their own value, strings use the classic `31 * h + unit` polynomial over
/// UTF-16 code units. Any other `Hash` type can be stored through [`Hashed`].
pub trait ElementHash {
    /// Returns the hash code of this element
    fn element_hash(&self) -> HashCode;
}

/// Implements `ElementHash` as the identity for integers that widen losslessly into `i64`
macro_rules! identity_hash {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementHash for $ty {
                fn element_hash(&self) -> HashCode {
                    HashCode::from(*self)
                }
            }
        )*
    };
}

identity_hash!(i8, i16, i32, i64, u8, u16, u32, bool);

impl ElementHash for u64 {
    #[allow(clippy::cast_possible_wrap)]
    fn element_hash(&self) -> HashCode {
        *self as HashCode
    }
}

impl ElementHash for usize {
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn element_hash(&self) -> HashCode {
        *self as HashCode
    }
}

impl ElementHash for isize {
    #[allow(clippy::cast_possible_truncation)]
    fn element_hash(&self) -> HashCode {
        *self as HashCode
    }
}

impl ElementHash for char {
    fn element_hash(&self) -> HashCode {
        HashCode::from(u32::from(*self))
    }
}

impl ElementHash for str {
    fn element_hash(&self) -> HashCode {
        let hash = self
            .encode_utf16()
            .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
        HashCode::from(hash)
    }
}

impl ElementHash for String {
    fn element_hash(&self) -> HashCode {
        self.as_str().element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for &T {
    fn element_hash(&self) -> HashCode {
        (**self).element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for Box<T> {
    fn element_hash(&self) -> HashCode {
        (**self).element_hash()
    }
}

/// Adapter giving any `Hash` type an element hash through `DefaultHasher`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hashed<T>(pub T);

impl<T> Hashed<T> {
    /// Unwraps the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hash> ElementHash for Hashed<T> {
    #[allow(clippy::cast_possible_wrap)]
    fn element_hash(&self) -> HashCode {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish() as HashCode
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Hashed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_hash_to_themselves() {
        assert_eq!(5_i32.element_hash(), 5);
        assert_eq!((-7_i64).element_hash(), -7);
        assert_eq!(200_u8.element_hash(), 200);
        assert_eq!(i64::MIN.element_hash(), i64::MIN);
        assert_eq!(true.element_hash(), 1);
    }

    #[test]
    fn test_string_hash_matches_polynomial() {
        // 'a' * 31 + 'b'
        assert_eq!("ab".element_hash(), 97 * 31 + 98);
        assert_eq!("".element_hash(), 0);
        assert_eq!(String::from("hello").element_hash(), "hello".element_hash());
        assert_eq!((&"hello").element_hash(), "hello".element_hash());
    }

    #[test]
    fn test_string_hash_wraps_to_negative() {
        assert_eq!("polygenelubricants".element_hash(), HashCode::from(i32::MIN));
    }

    #[test]
    fn test_hashed_is_deterministic() {
        let a = Hashed(vec![1, 2, 3]);
        let b = Hashed(vec![1, 2, 3]);
        assert_eq!(a.element_hash(), b.element_hash());
        assert_eq!(a.into_inner(), vec![1, 2, 3]);
    }
}
