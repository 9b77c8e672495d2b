//! Command-line front end for [`cellcoord_core`].
//!
//! The `cellcoord` binary parses, formats and validates cell coordinates. The
//! command definitions live in [`Cli`] and [`Command`]; [`run`] executes a
//! command against arbitrary output streams so it can be tested without a
//! process.

pub use self::{
    cli::{Cli, Command, IndexStyle},
    runner::{Outcome, run},
};

mod cli;
mod runner;
