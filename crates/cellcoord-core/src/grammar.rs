//! Bounds and the cyclical dimension rule shared by the decoder and encoder.
//!
//! Both directions of the codec read their limits and character classes from
//! this module only, so they cannot drift apart.
//!
//! # Examples
//!
//! ```
//! use cellcoord_core::DimensionKind;
//!
//! assert_eq!(DimensionKind::for_position(1), DimensionKind::Lowercase);
//! assert_eq!(DimensionKind::for_position(2), DimensionKind::Digits);
//! assert_eq!(DimensionKind::for_position(3), DimensionKind::Uppercase);
//! assert_eq!(DimensionKind::for_position(4), DimensionKind::Lowercase);
//! ```

use tinyvec::ArrayVec;

use crate::alphabet::LetterCase;

/// Maximum number of dimensions in a coordinate.
pub const MAX_DIMENSIONS: usize = 3;

/// Maximum value of a single zero-based index.
pub const MAX_INDEX: u8 = u8::MAX;

/// Maximum length of a notation string, in characters.
///
/// The longest valid string is `"iv256IV"`, all three dimensions at [`MAX_INDEX`].
pub const MAX_STRING_LENGTH: usize = 7;

/// Fixed-capacity index sequence of a coordinate.
///
/// Holds at most [`MAX_DIMENSIONS`] indices without heap allocation.
pub type Indices = ArrayVec<[u8; MAX_DIMENSIONS]>;

/// The character set used by a dimension, derived from its position.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum DimensionKind {
    /// ASCII lowercase letter run (`a`-`z`, `aa`, …). Dimensions 1, 4, 7, …
    #[default]
    #[display("lowercase")]
    Lowercase,
    /// 1-indexed decimal number without leading zero. Dimensions 2, 5, 8, …
    #[display("digits")]
    Digits,
    /// ASCII uppercase letter run (`A`-`Z`, `AA`, …). Dimensions 3, 6, 9, …
    #[display("uppercase")]
    Uppercase,
}

impl DimensionKind {
    /// All kinds, in cycle order.
    pub const ALL: [Self; 3] = [Self::Lowercase, Self::Digits, Self::Uppercase];

    /// Returns the kind of the dimension at the 1-based `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::DimensionKind;
    ///
    /// assert!(DimensionKind::for_position(5).is_digits());
    /// assert!(DimensionKind::for_position(6).is_uppercase());
    /// ```
    #[must_use]
    pub const fn for_position(position: usize) -> Self {
        assert!(position > 0, "dimension positions are 1-based");
        match position % 3 {
            1 => Self::Lowercase,
            2 => Self::Digits,
            _ => Self::Uppercase,
        }
    }

    /// Returns the kind of the dimension that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Lowercase => Self::Digits,
            Self::Digits => Self::Uppercase,
            Self::Uppercase => Self::Lowercase,
        }
    }

    /// Returns the letter case of a letter kind, or `None` for [`Digits`](Self::Digits).
    #[must_use]
    pub const fn letter_case(self) -> Option<LetterCase> {
        match self {
            Self::Lowercase => Some(LetterCase::Lower),
            Self::Digits => None,
            Self::Uppercase => Some(LetterCase::Upper),
        }
    }

    /// Reports whether `byte` belongs to this kind's character class.
    ///
    /// Only ASCII bytes ever match; every byte of a multi-byte UTF-8 sequence
    /// is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::DimensionKind;
    ///
    /// assert!(DimensionKind::Digits.matches(b'0'));
    /// assert!(!DimensionKind::Lowercase.matches(b'A'));
    /// assert!(!DimensionKind::Uppercase.matches("Ä".as_bytes()[0]));
    /// ```
    #[must_use]
    pub const fn matches(self, byte: u8) -> bool {
        match self {
            Self::Lowercase => byte.is_ascii_lowercase(),
            Self::Digits => byte.is_ascii_digit(),
            Self::Uppercase => byte.is_ascii_uppercase(),
        }
    }
}
