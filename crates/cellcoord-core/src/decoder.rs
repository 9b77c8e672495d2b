//! Notation → indices.
//!
//! The decoder scans the input once, left to right, with a cursor that starts
//! at [`DimensionKind::Lowercase`] and advances cyclically after each
//! component. Every check fails fast; nothing is backtracked.
//!
//! Input is bounded by [`MAX_STRING_LENGTH`] before scanning starts, so each
//! call does a small constant amount of work regardless of the input.
//!
//! # Examples
//!
//! ```
//! use cellcoord_core::{CoordinateError, DimensionKind, components, decode};
//!
//! assert_eq!(decode("e4")?.as_slice(), &[4, 3]);
//! assert_eq!(decode("a1Aa"), Err(CoordinateError::TooManyDimensions));
//!
//! let parts = components("aa10")?;
//! assert_eq!(parts[0].text, "aa");
//! assert_eq!(parts[1].kind, DimensionKind::Digits);
//! assert_eq!(parts[1].index, 9);
//! # Ok::<(), CoordinateError>(())
//! ```

use tinyvec::ArrayVec;

use crate::{
    CoordinateError, alphabet,
    grammar::{DimensionKind, Indices, MAX_DIMENSIONS, MAX_INDEX, MAX_STRING_LENGTH},
};

/// One decoded dimension of a notation string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component<'a> {
    /// Character set of the component, fixed by its position.
    pub kind: DimensionKind,
    /// The exact substring of the input that spells the component.
    pub text: &'a str,
    /// Zero-based index the component decodes to.
    pub index: u8,
}

/// Decoded components of a notation string, in dimension order.
pub type Components<'a> = ArrayVec<[Component<'a>; MAX_DIMENSIONS]>;

/// Decodes a notation string into its zero-based indices.
///
/// # Errors
///
/// - [`CoordinateError::EmptyInput`] if `text` is empty.
/// - [`CoordinateError::InputTooLong`] if `text` has more than
///   [`MAX_STRING_LENGTH`] characters.
/// - [`CoordinateError::InvalidStart`] if `text` does not start with an ASCII
///   lowercase letter.
/// - [`CoordinateError::UnexpectedCharacter`] if a character does not belong
///   to the class expected at its position.
/// - [`CoordinateError::LeadingZero`] if a number component starts with `0`.
/// - [`CoordinateError::TooManyDimensions`] if input remains after
///   [`MAX_DIMENSIONS`] components.
/// - [`CoordinateError::IndexOutOfRange`] if a component decodes above
///   [`MAX_INDEX`].
///
/// # Examples
///
/// ```
/// use cellcoord_core::{CoordinateError, decode};
///
/// assert_eq!(decode("iv256IV")?.as_slice(), &[255, 255, 255]);
/// assert_eq!(decode("iw"), Err(CoordinateError::IndexOutOfRange));
/// # Ok::<(), CoordinateError>(())
/// ```
pub fn decode(text: &str) -> Result<Indices, CoordinateError> {
    let components = components(text)?;
    Ok(components.iter().map(|component| component.index).collect())
}

/// Decodes a notation string into its components.
///
/// # Errors
///
/// Fails exactly as [`decode`] does.
pub fn components(text: &str) -> Result<Components<'_>, CoordinateError> {
    scan(text).inspect_err(|err| log::trace!("rejected notation {text:?}: {err}"))
}

/// Returns the number of dimensions of `text`, or `0` if it is not valid.
///
/// # Examples
///
/// ```
/// use cellcoord_core::dimensions;
///
/// assert_eq!(dimensions("a"), 1);
/// assert_eq!(dimensions("e4"), 2);
/// assert_eq!(dimensions("a1A"), 3);
/// assert_eq!(dimensions("1nvalid"), 0);
/// ```
#[must_use]
pub fn dimensions(text: &str) -> usize {
    components(text).map_or(0, |components| components.len())
}

fn scan(text: &str) -> Result<Components<'_>, CoordinateError> {
    if text.is_empty() {
        return Err(CoordinateError::EmptyInput);
    }
    if text.chars().nth(MAX_STRING_LENGTH).is_some() {
        return Err(CoordinateError::InputTooLong);
    }

    let bytes = text.as_bytes();
    if !DimensionKind::Lowercase.matches(bytes[0]) {
        return Err(CoordinateError::InvalidStart);
    }

    let mut components = Components::new();
    let mut kind = DimensionKind::Lowercase;
    let mut pos = 0;
    while pos < bytes.len() {
        if components.len() >= MAX_DIMENSIONS {
            return Err(CoordinateError::TooManyDimensions);
        }
        let len = run_length(&bytes[pos..], kind)?;
        // Runs are ASCII, so `pos` and `end` are char boundaries.
        let end = pos + len;
        let index = component_index(&bytes[pos..end], kind)?;
        components.push(Component {
            kind,
            text: &text[pos..end],
            index,
        });
        pos = end;
        kind = kind.next();
    }
    Ok(components)
}

/// Length of the run of `kind` characters at the start of `rest`.
fn run_length(rest: &[u8], kind: DimensionKind) -> Result<usize, CoordinateError> {
    match rest.first() {
        Some(&byte) if kind.matches(byte) => {
            if kind.is_digits() && byte == b'0' {
                return Err(CoordinateError::LeadingZero);
            }
            Ok(rest.iter().take_while(|&&byte| kind.matches(byte)).count())
        }
        _ => Err(CoordinateError::UnexpectedCharacter),
    }
}

fn component_index(run: &[u8], kind: DimensionKind) -> Result<u8, CoordinateError> {
    let value = match kind {
        // Numbers are 1-indexed in the notation.
        DimensionKind::Digits => decode_number(run).and_then(|number| number.checked_sub(1)),
        DimensionKind::Lowercase | DimensionKind::Uppercase => alphabet::decode_letters(run),
    };
    value
        .filter(|&value| value <= u64::from(MAX_INDEX))
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(CoordinateError::IndexOutOfRange)
}

fn decode_number(run: &[u8]) -> Option<u64> {
    run.iter().try_fold(0_u64, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
    })
}
