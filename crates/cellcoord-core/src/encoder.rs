//! Indices → canonical notation.
//!
//! The encoder trusts its input: bounds are enforced when a
//! [`Coordinate`](crate::Coordinate) is constructed, not here. Each index is
//! rendered with the [`DimensionKind`] of its 1-based position.

use std::fmt;

use crate::{alphabet, grammar::DimensionKind};

/// Writes the canonical notation of `indices` into `out`.
///
/// # Errors
///
/// Returns an error only if `out` fails to accept the text.
///
/// # Examples
///
/// ```
/// use cellcoord_core::write_notation;
///
/// let mut out = String::from("move to ");
/// write_notation(&mut out, &[4, 3])?;
/// assert_eq!(out, "move to e4");
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn write_notation<W>(out: &mut W, indices: &[u8]) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    for (position, &index) in (1..).zip(indices) {
        let kind = DimensionKind::for_position(position);
        match kind.letter_case() {
            Some(case) => alphabet::write_letters(out, u64::from(index), case)?,
            None => write!(out, "{}", u16::from(index) + 1)?,
        }
    }
    Ok(())
}

/// Returns the canonical notation of `indices`.
///
/// `indices` is expected to hold 1 to [`MAX_DIMENSIONS`](crate::MAX_DIMENSIONS)
/// values.
///
/// # Examples
///
/// ```
/// use cellcoord_core::encode;
///
/// assert_eq!(encode(&[4, 3]), "e4");
/// assert_eq!(encode(&[0, 0, 0]), "a1A");
/// assert_eq!(encode(&[255, 255, 255]), "iv256IV");
/// ```
#[must_use]
pub fn encode(indices: &[u8]) -> String {
    Notation(indices).to_string()
}

struct Notation<'a>(&'a [u8]);

impl fmt::Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_notation(f, self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{MAX_DIMENSIONS, MAX_STRING_LENGTH, decode};

    #[test]
    fn test_one_dimension() {
        assert_eq!(encode(&[0]), "a");
        assert_eq!(encode(&[25]), "z");
        assert_eq!(encode(&[26]), "aa");
        assert_eq!(encode(&[255]), "iv");
    }

    #[test]
    fn test_digits_are_one_indexed() {
        assert_eq!(encode(&[0, 0]), "a1");
        assert_eq!(encode(&[0, 9]), "a10");
        assert_eq!(encode(&[0, 255]), "a256");
    }

    #[test]
    fn test_three_dimensions() {
        assert_eq!(encode(&[0, 0, 0]), "a1A");
        assert_eq!(encode(&[4, 3, 1]), "e4B");
        assert_eq!(encode(&[0, 0, 26]), "a1AA");
        assert_eq!(encode(&[26, 26, 26]), "aa27AA");
        assert_eq!(encode(&[255, 255, 255]), "iv256IV");
    }

    #[test]
    fn test_kind_keeps_cycling() {
        // Longer sequences never come from a coordinate, but the cycle is total.
        assert_eq!(encode(&[7, 7, 7, 7, 7]), "h8Hh8");
    }

    #[test]
    fn test_write_notation_appends() {
        let mut out = String::from(">");
        write_notation(&mut out, &[2, 2, 2]).unwrap();
        write_notation(&mut out, &[3]).unwrap();
        assert_eq!(out, ">c3Cd");
    }

    #[test]
    fn test_encode_matches_write_notation() {
        for indices in [&[0][..], &[4, 3], &[255, 255, 255], &[7, 7, 7, 7, 7]] {
            let mut written = String::new();
            write_notation(&mut written, indices).unwrap();
            assert_eq!(encode(indices), written);
        }
    }

    proptest! {
        #[test]
        fn encode_then_decode_is_identity(
            indices in prop::collection::vec(any::<u8>(), 1..=MAX_DIMENSIONS)
        ) {
            let text = encode(&indices);
            prop_assert!(text.len() <= MAX_STRING_LENGTH);
            let decoded = decode(&text).unwrap();
            prop_assert_eq!(decoded.as_slice(), indices.as_slice());
        }
    }
}
