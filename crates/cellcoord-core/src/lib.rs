//! Core codec for cyclical cell coordinates on multi-dimensional game boards.
//!
//! A cell coordinate is a short ASCII string such as `e4` (a chess square) or
//! `a1A` (a cell of a 3D tic-tac-toe board). Each dimension is written with a
//! character set chosen by its position, cycling through three kinds:
//!
//! | Dimension      | Character set                      |
//! |----------------|------------------------------------|
//! | 1st, 4th, 7th… | lowercase letters (`a`-`z`, `aa`…) |
//! | 2nd, 5th, 8th… | positive integers (`1`, `2`, …)    |
//! | 3rd, 6th, 9th… | uppercase letters (`A`-`Z`, `AA`…) |
//!
//! This crate converts between that notation and zero-indexed integer
//! indices, in both directions, enforcing a strict grammar:
//!
//! - [`grammar`]: bounds ([`MAX_DIMENSIONS`], [`MAX_INDEX`],
//!   [`MAX_STRING_LENGTH`]) and the cyclical [`DimensionKind`] rule
//! - [`alphabet`]: bijective base-26 letter runs (`a`…`z`, `aa`…`zz`, `aaa`…)
//! - [`decoder`]: notation → indices, with precise [`CoordinateError`]s
//! - [`encoder`]: indices → canonical notation
//! - [`coordinate`]: the immutable [`Coordinate`] value type
//!
//! # Examples
//!
//! ```
//! use cellcoord_core::{Coordinate, CoordinateError};
//!
//! let coord = Coordinate::parse("e4")?;
//! assert_eq!(coord.indices(), &[4, 3]);
//! assert_eq!(coord.to_string(), "e4");
//!
//! assert_eq!(Coordinate::format(&[0, 0, 0])?, "a1A");
//! assert!(!Coordinate::is_valid("a0"));
//! assert_eq!(Coordinate::parse("1a"), Err(CoordinateError::InvalidStart));
//! # Ok::<(), CoordinateError>(())
//! ```

pub mod alphabet;
pub mod coordinate;
pub mod decoder;
pub mod encoder;
mod error;
pub mod grammar;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types
pub use self::{
    coordinate::Coordinate,
    decoder::{Component, Components, components, decode, dimensions},
    encoder::{encode, write_notation},
    error::CoordinateError,
    grammar::{DimensionKind, Indices, MAX_DIMENSIONS, MAX_INDEX, MAX_STRING_LENGTH},
};
