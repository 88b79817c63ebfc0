use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::orientation::{enumerate_orientations, OrientationSet};
use crate::shape::Stencil;

/// A hand-authored polyomino in its standard orientation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NamedShape {
    /// Identifier used in facts, such as `L` or `Fr`.
    pub letter: &'static str,
    /// Name of the orientation `cells` are written in, such as `L` or `Vertical`.
    pub orientation: &'static str,
    /// Cells as `(x, y)` offsets from the anchor cell `(0, 0)`.
    pub cells: &'static [(isize, isize)],
    /// For pieces that only exist in one-sided families, the letter of the free piece this one mirrors.
    pub mirrors: Option<&'static str>,
}

impl NamedShape {
    const fn new(letter: &'static str, orientation: &'static str, cells: &'static [(isize, isize)]) -> Self {
        Self { letter, orientation, cells, mirrors: None }
    }

    const fn mirror(letter: &'static str, mirrors: &'static str, cells: &'static [(isize, isize)]) -> Self {
        Self { letter, orientation: letter, cells, mirrors: Some(mirrors) }
    }

    /// The cells of this shape as a [`Stencil`].
    pub fn stencil(&self) -> Result<Stencil> {
        Stencil::new(self.cells.iter().copied())
    }

    /// Every distinct orientation of this shape, see [`enumerate_orientations`].
    pub fn orientations(&self, allow_reflections: bool) -> Result<OrientationSet> {
        Ok(enumerate_orientations(&self.stencil()?, self.orientation, allow_reflections))
    }
}

const TETROMINOS_FREE: &[NamedShape] = &[
    NamedShape::new("L", "L", &[(0, 0), (0, 1), (0, 2), (1, 2)]),
    NamedShape::new("I", "Vertical", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
    NamedShape::new("T", "T", &[(0, 0), (1, 0), (-1, 0), (0, 1)]),
    NamedShape::new("S", "S", &[(0, 0), (0, 1), (1, 0), (-1, 1)]),
    NamedShape::new("O", "O", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
];

const TETROMINOS_ONE_SIDED_EXTRA: &[NamedShape] = &[
    NamedShape::mirror("J", "L", &[(0, 0), (0, 1), (0, 2), (-1, 2)]),
    NamedShape::mirror("Z", "S", &[(0, 0), (0, 1), (-1, 0), (1, 1)]),
];

const PENTOMINOS_FREE: &[NamedShape] = &[
    NamedShape::new("F", "F", &[(0, 0), (1, 0), (-1, 1), (0, 1), (0, 2)]),
    NamedShape::new("I", "Vertical", &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    NamedShape::new("L", "L", &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)]),
    NamedShape::new("N", "N", &[(0, 0), (0, 1), (0, 2), (-1, 2), (-1, 3)]),
    NamedShape::new("P", "P", &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
    NamedShape::new("T", "T", &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
    NamedShape::new("U", "U", &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)]),
    NamedShape::new("V", "V", &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
    NamedShape::new("W", "W", &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]),
    NamedShape::new("X", "Plus", &[(0, 0), (-1, 1), (0, 1), (1, 1), (0, 2)]),
    NamedShape::new("Y", "Y", &[(0, 0), (-1, 1), (0, 1), (0, 2), (0, 3)]),
    NamedShape::new("Z", "Z", &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]),
];

const PENTOMINOS_ONE_SIDED_EXTRA: &[NamedShape] = &[
    NamedShape::mirror("Fr", "F", &[(0, 0), (1, 0), (1, 1), (2, 1), (1, 2)]),
    NamedShape::mirror("J", "L", &[(0, 0), (0, 1), (0, 2), (0, 3), (-1, 3)]),
    NamedShape::mirror("Nr", "N", &[(0, 0), (0, 1), (0, 2), (1, 2), (1, 3)]),
    NamedShape::mirror("Q", "P", &[(0, 0), (1, 0), (0, 1), (1, 1), (1, 2)]),
    NamedShape::mirror("Yr", "Y", &[(0, 0), (0, 1), (1, 1), (0, 2), (0, 3)]),
    NamedShape::mirror("S", "Z", &[(0, 0), (1, 0), (0, 1), (0, 2), (-1, 2)]),
];

/// Which polyomino family a shape is drawn from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, strum::Display, strum::EnumString, strum::VariantArray)]
pub enum Family {
    /// Four-cell pieces.
    #[strum(to_string = "tetromino", serialize = "tetr")]
    Tetromino,
    /// Five-cell pieces.
    #[strum(to_string = "pentomino", serialize = "pent")]
    Pentomino,
}

/// Whether mirrored pieces count as the same piece.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, strum::Display)]
pub enum Sidedness {
    /// Pieces may be flipped; a piece and its mirror image are one piece.
    #[strum(to_string = "free")]
    Free,
    /// Pieces may only be rotated; chiral pieces have a separately named mirror twin.
    #[strum(to_string = "one-sided")]
    OneSided,
}

impl From<bool> for Sidedness {
    fn from(reflections_allowed: bool) -> Self {
        if reflections_allowed { Self::Free } else { Self::OneSided }
    }
}

impl Family {
    /// Parse `tetromino` (or `tetr`) and `pentomino` (or `pent`).
    ///
    /// Any other token yields [`Error::InvalidCategory`].
    pub fn parse(token: &str) -> Result<Self> {
        Self::from_str(token).map_err(|_| Error::InvalidCategory(token.to_string()))
    }

    /// Number of cells in every piece of this family.
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Tetromino => 4,
            Self::Pentomino => 5,
        }
    }

    /// All pieces of this family; the one-sided table is the free table followed by the mirror twins.
    pub fn shapes(&self, sidedness: Sidedness) -> impl Iterator<Item = &'static NamedShape> {
        let (free, extra) = match self {
            Self::Tetromino => (TETROMINOS_FREE, TETROMINOS_ONE_SIDED_EXTRA),
            Self::Pentomino => (PENTOMINOS_FREE, PENTOMINOS_ONE_SIDED_EXTRA),
        };
        let extra: &'static [NamedShape] = match sidedness {
            Sidedness::Free => &[],
            Sidedness::OneSided => extra,
        };

        free.iter().chain(extra.iter())
    }

    /// Find the piece called `letter`, failing with [`Error::UnknownShape`] if the table has no such piece.
    pub fn lookup(&self, sidedness: Sidedness, letter: &str) -> Result<&'static NamedShape> {
        self.shapes(sidedness)
            .find(|shape| shape.letter == letter)
            .ok_or_else(|| Error::UnknownShape {
                letter: letter.to_string(),
                family: format!("{sidedness} {self}"),
            })
    }
}

/// Render the facts for one shape, one line per orientation.
///
/// Each line holds one `shape(<name>,<orientation>,<x>,<y>).` fact per cell, separated by spaces. The whole text is
/// lower-cased.
pub fn shape_facts(letter: &str, orientations: &OrientationSet) -> String {
    orientations.iter()
        .map(|(orientation, stencil)| stencil.cells().iter()
            .map(|cell| format!("shape({},{},{},{}).", letter, orientation, cell.0, cell.1))
            .join(" ")
            .to_lowercase())
        .join("\n")
}

/// Build the shape-fact catalog for the requested `letters`.
///
/// With `reflections_allowed` the free table is used and mirrored orientations are generated; otherwise the
/// one-sided table is used, whose mirror twins stand in for reflections. Letters are emitted in the order given.
#[instrument(skip(letters))]
pub fn build_fact_catalog<S: AsRef<str>>(
    letters: impl IntoIterator<Item = S>,
    reflections_allowed: bool,
    family: Family,
) -> Result<String> {
    let sidedness = Sidedness::from(reflections_allowed);

    let mut blocks = Vec::new();
    for letter in letters {
        let shape = family.lookup(sidedness, letter.as_ref())?;
        let orientations = shape.orientations(reflections_allowed)?;
        debug!(letter = shape.letter, orientations = orientations.len(), "catalogued shape");
        blocks.push(shape_facts(shape.letter, &orientations));
    }

    Ok(blocks.join("\n"))
}
