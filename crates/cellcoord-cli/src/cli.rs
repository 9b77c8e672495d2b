use clap::{Parser, Subcommand, ValueEnum};

/// Convert between cell coordinate notation (e4, a1A) and zero-based indices.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// A `cellcoord` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Decode notation into zero-based indices, one line per input.
    Parse {
        /// How to print the indices.
        #[arg(long, value_name = "STYLE", default_value = "plain")]
        style: IndexStyle,

        /// Coordinates to decode.
        #[arg(required = true, value_name = "NOTATION")]
        notations: Vec<String>,
    },
    /// Format zero-based indices as one coordinate.
    Format {
        /// Indices, one per dimension.
        #[arg(value_name = "INDEX", allow_hyphen_values = true)]
        indices: Vec<String>,
    },
    /// Check notation and report each input as valid or invalid.
    Validate {
        /// Print nothing; report through the exit code only.
        #[arg(short, long)]
        quiet: bool,

        /// Coordinates to check.
        #[arg(required = true, value_name = "NOTATION")]
        notations: Vec<String>,
    },
    /// Show each dimension of the notation with its kind and index.
    Components {
        /// Coordinates to split.
        #[arg(required = true, value_name = "NOTATION")]
        notations: Vec<String>,
    },
}

/// Output style of decoded indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndexStyle {
    /// Space separated: `4 3`.
    #[default]
    Plain,
    /// Tuple: `(4, 3)`.
    Tuple,
}
