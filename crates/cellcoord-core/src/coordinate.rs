//! The immutable [`Coordinate`] value type.

use std::{
    fmt::{self, Debug, Display},
    num::IntErrorKind,
    str::FromStr,
};

use crate::{
    CoordinateError,
    decoder::decode,
    encoder::write_notation,
    grammar::{DimensionKind, Indices, MAX_DIMENSIONS},
};

/// A validated cell coordinate of 1 to 3 dimensions.
///
/// A coordinate holds zero-based indices in the range 0-255. It is either
/// built from indices with [`Coordinate::new`] or decoded from notation with
/// [`Coordinate::parse`], and never changes afterwards. Equality, ordering
/// and hashing depend on the index sequence only.
///
/// # Examples
///
/// ```
/// use cellcoord_core::Coordinate;
///
/// let coord = Coordinate::new(&[4, 3])?;
/// assert_eq!(coord.dimensions(), 2);
/// assert_eq!(coord.to_string(), "e4");
/// assert_eq!(coord, "e4".parse::<Coordinate>()?);
/// # Ok::<(), cellcoord_core::CoordinateError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    indices: Indices,
}

impl Coordinate {
    /// Creates a coordinate from zero-based indices.
    ///
    /// # Errors
    ///
    /// - [`CoordinateError::NoIndices`] if `indices` is empty.
    /// - [`CoordinateError::TooManyDimensions`] if `indices` has more than
    ///   [`MAX_DIMENSIONS`] values.
    /// - [`CoordinateError::IndexOutOfRange`] if any index is above 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::{Coordinate, CoordinateError};
    ///
    /// assert!(Coordinate::new(&[0, 0, 0]).is_ok());
    /// assert_eq!(Coordinate::new(&[]), Err(CoordinateError::NoIndices));
    /// assert_eq!(Coordinate::new(&[256]), Err(CoordinateError::IndexOutOfRange));
    /// assert_eq!(Coordinate::new(&[0; 4]), Err(CoordinateError::TooManyDimensions));
    /// ```
    pub fn new(indices: &[u32]) -> Result<Self, CoordinateError> {
        check_dimensions(indices.len())?;
        let indices = indices
            .iter()
            .map(|&index| u8::try_from(index).map_err(|_| CoordinateError::IndexOutOfRange))
            .collect::<Result<Indices, _>>()?;
        Ok(Self::from_valid(indices))
    }

    /// Creates a coordinate from textual index tokens, such as command-line
    /// arguments.
    ///
    /// Each token must be a decimal integer.
    ///
    /// # Errors
    ///
    /// - [`CoordinateError::NoIndices`] if `tokens` is empty.
    /// - [`CoordinateError::TooManyDimensions`] if `tokens` has more than
    ///   [`MAX_DIMENSIONS`] values.
    /// - [`CoordinateError::InvalidIndexType`] if a token is not an integer.
    /// - [`CoordinateError::IndexOutOfRange`] if a token is negative or above 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::{Coordinate, CoordinateError};
    ///
    /// assert_eq!(Coordinate::from_tokens(&["4", "3"])?.to_string(), "e4");
    /// assert_eq!(Coordinate::from_tokens(&["1.5"]), Err(CoordinateError::InvalidIndexType));
    /// assert_eq!(Coordinate::from_tokens(&["true"]), Err(CoordinateError::InvalidIndexType));
    /// assert_eq!(Coordinate::from_tokens(&["-1"]), Err(CoordinateError::IndexOutOfRange));
    /// # Ok::<(), CoordinateError>(())
    /// ```
    pub fn from_tokens<S>(tokens: &[S]) -> Result<Self, CoordinateError>
    where
        S: AsRef<str>,
    {
        check_dimensions(tokens.len())?;
        let indices = tokens
            .iter()
            .map(|token| parse_index_token(token.as_ref()))
            .collect::<Result<Indices, _>>()?;
        Ok(Self::from_valid(indices))
    }

    /// Decodes a coordinate from its notation.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error unchanged; see [`decode`](crate::decode).
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::{Coordinate, CoordinateError};
    ///
    /// assert_eq!(Coordinate::parse("a1A")?.indices(), &[0, 0, 0]);
    /// assert_eq!(Coordinate::parse(""), Err(CoordinateError::EmptyInput));
    /// # Ok::<(), CoordinateError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        decode(text).map(Self::from_valid)
    }

    /// Formats indices as notation.
    ///
    /// Equivalent to `Coordinate::new(indices)?.to_string()`.
    ///
    /// # Errors
    ///
    /// Fails exactly as [`Coordinate::new`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::Coordinate;
    ///
    /// assert_eq!(Coordinate::format(&[255, 255, 255])?, "iv256IV");
    /// # Ok::<(), cellcoord_core::CoordinateError>(())
    /// ```
    pub fn format(indices: &[u32]) -> Result<String, CoordinateError> {
        Self::new(indices).map(|coord| coord.to_string())
    }

    /// Checks that `text` is valid notation.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error unchanged; see [`decode`](crate::decode).
    pub fn validate(text: &str) -> Result<(), CoordinateError> {
        decode(text).map(drop)
    }

    /// Reports whether `text` is valid notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::Coordinate;
    ///
    /// assert!(Coordinate::is_valid("e4"));
    /// assert!(!Coordinate::is_valid("a0"));
    /// ```
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        decode(text).is_ok()
    }

    /// Returns the zero-based indices, one per dimension.
    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the number of dimensions (1-3).
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.indices.len()
    }

    /// Returns each index with the kind of its dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellcoord_core::{Coordinate, DimensionKind};
    ///
    /// let coord = Coordinate::parse("c3C")?;
    /// let kinds: Vec<_> = coord.components().map(|(kind, _)| kind).collect();
    /// assert_eq!(kinds, DimensionKind::ALL);
    /// # Ok::<(), cellcoord_core::CoordinateError>(())
    /// ```
    pub fn components(&self) -> impl Iterator<Item = (DimensionKind, u8)> + '_ {
        (1..)
            .zip(&self.indices)
            .map(|(position, &index)| (DimensionKind::for_position(position), index))
    }

    fn from_valid(indices: Indices) -> Self {
        log::trace!("coordinate {indices:?}");
        Self { indices }
    }
}

fn check_dimensions(len: usize) -> Result<(), CoordinateError> {
    match len {
        0 => Err(CoordinateError::NoIndices),
        len if len > MAX_DIMENSIONS => Err(CoordinateError::TooManyDimensions),
        _ => Ok(()),
    }
}

fn parse_index_token(token: &str) -> Result<u8, CoordinateError> {
    let value = token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoordinateError::IndexOutOfRange,
        _ => CoordinateError::InvalidIndexType,
    })?;
    u8::try_from(value).map_err(|_| CoordinateError::IndexOutOfRange)
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_notation(f, &self.indices)
    }
}

impl Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coordinate");
        for index in &self.indices {
            tuple.field(index);
        }
        tuple.finish()
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u32]> for Coordinate {
    type Error = CoordinateError;

    fn try_from(indices: &[u32]) -> Result<Self, Self::Error> {
        Self::new(indices)
    }
}
