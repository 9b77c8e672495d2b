/// Errors reported while decoding notation or constructing a [`Coordinate`].
///
/// Each variant is a distinct, stable kind that callers can match on. The
/// [`Display`](std::fmt::Display) output is a short human-readable message.
///
/// [`Coordinate`]: crate::Coordinate
///
/// # Examples
///
/// ```
/// use cellcoord_core::{CoordinateError, decode};
///
/// assert_eq!(decode("a01"), Err(CoordinateError::LeadingZero));
/// assert_eq!(CoordinateError::LeadingZero.to_string(), "leading zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum CoordinateError {
    /// The input string is empty.
    #[display("empty input")]
    EmptyInput,
    /// The input string is longer than [`MAX_STRING_LENGTH`](crate::MAX_STRING_LENGTH) characters.
    #[display("input exceeds 7 characters")]
    InputTooLong,
    /// The first character is not an ASCII lowercase letter.
    #[display("must start with lowercase letter")]
    InvalidStart,
    /// A character does not belong to the class expected at its position.
    #[display("unexpected character")]
    UnexpectedCharacter,
    /// A digit component starts with `0`.
    #[display("leading zero")]
    LeadingZero,
    /// More than [`MAX_DIMENSIONS`](crate::MAX_DIMENSIONS) components are present or requested.
    #[display("exceeds 3 dimensions")]
    TooManyDimensions,
    /// A decoded or supplied index is above [`MAX_INDEX`](crate::MAX_INDEX) or negative.
    #[display("index exceeds 255")]
    IndexOutOfRange,
    /// No indices were supplied.
    #[display("at least one index required")]
    NoIndices,
    /// A supplied index token is not an integer.
    #[display("index must be an integer")]
    InvalidIndexType,
}
