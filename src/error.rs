use derive_more::{Display, Error, From};

/// Reasons an operation in this crate may fail.
///
/// None of these are transient; they all point at a bad argument or a bad table entry supplied by the caller.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A rotation token other than `none`, `cw`, `ccw` or `180`, or a malformed stencil.
    #[display("invalid argument: {_0}")]
    #[from(skip)]
    InvalidArgument(#[error(not(source))] String),
    /// The requested letter is not present in the selected shape family.
    #[display("unknown shape {letter:?} in the {family} table")]
    #[from(skip)]
    UnknownShape {
        /// The letter that was asked for.
        letter: String,
        /// The table that was searched.
        family: String,
    },
    /// The shape family was neither tetromino nor pentomino.
    #[display("bad category {_0:?}, was expecting \"tetromino\" or \"pentomino\"")]
    #[from(skip)]
    InvalidCategory(#[error(not(source))] String),
    /// The character grid and the region grid disagree in shape, or a grid's rows are ragged.
    #[display("grid dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    #[from(skip)]
    DimensionMismatch {
        /// `(rows, cols)` that were expected.
        expected: (usize, usize),
        /// `(rows, cols)` that were found.
        found: (usize, usize),
    },
    /// A render configuration could not be read or parsed.
    #[display("config error: {_0}")]
    #[from(skip)]
    Config(#[error(not(source))] String),
    /// Writing to the terminal failed.
    #[display("io error: {_0}")]
    Io(std::io::Error),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
