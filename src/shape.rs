use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::algo::connected_components;
use petgraph::graphmap::UnGraphMap;
use strum::VariantArray;

use crate::error::{Error, Result};
use crate::location::Offset;
use crate::render::print;

/// A quarter-turn rotation applied to every cell of a [`Stencil`].
///
/// [`Turn::VARIANTS`] lists the turns in the order orientations are enumerated, which is what makes orientation
/// naming deterministic.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, strum::Display, strum::EnumString)]
pub enum Turn {
    /// Leave the stencil as is.
    #[strum(serialize = "none")]
    Identity,
    /// A quarter turn clockwise, `(x, y) -> (-y, x)`.
    #[strum(serialize = "cw")]
    Clockwise,
    /// A quarter turn counterclockwise, `(x, y) -> (y, -x)`.
    #[strum(serialize = "ccw")]
    CounterClockwise,
    /// A half turn, `(x, y) -> (-x, -y)`.
    #[strum(serialize = "180")]
    Half,
}

impl Turn {
    /// Parse one of the tokens `none`, `cw`, `ccw` or `180`.
    ///
    /// Any other token yields [`Error::InvalidArgument`].
    pub fn parse(token: &str) -> Result<Self> {
        Self::from_str(token).map_err(|_| Error::InvalidArgument(format!("bad rotation type: {token:?}")))
    }

    /// Move one cell according to `self`.
    pub fn apply(&self, cell: Offset) -> Offset {
        let Offset(x, y) = cell;
        match self {
            Self::Identity => Offset(x, y),
            Self::Clockwise => Offset(-y, x),
            Self::CounterClockwise => Offset(y, -x),
            Self::Half => Offset(-x, -y),
        }
    }

    /// The turn which undoes `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            other => *other,
        }
    }
}

/// The cells making up one polyomino, as offsets from an anchor cell.
///
/// A stencil is never empty and never holds the same offset twice. Stencils are compared cell by cell in their
/// stored order; call [`canonicalize`](Self::canonicalize) first to compare shapes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Stencil(Vec<Offset>);

impl Stencil {
    /// Build a stencil from its cells, in the given order.
    ///
    /// Fails with [`Error::InvalidArgument`] if `cells` is empty or repeats an offset.
    pub fn new<C: Into<Offset>>(cells: impl IntoIterator<Item = C>) -> Result<Self> {
        let cells = cells.into_iter().map(Into::into).collect_vec();

        if cells.is_empty() {
            return Err(Error::InvalidArgument("a stencil needs at least one cell".to_string()));
        }
        if !cells.iter().all_unique() {
            return Err(Error::InvalidArgument(format!("stencil repeats a cell: {cells:?}")));
        }

        Ok(Self(cells))
    }

    /// The cells of this stencil, in stored order.
    pub fn cells(&self) -> &[Offset] {
        &self.0
    }

    /// Normalize the stencil so that equal shapes in equal orientations compare equal.
    ///
    /// The top row becomes row 0, the leftmost cell of that row becomes column 0, and cells are sorted by row and
    /// then by column. Canonicalizing twice changes nothing.
    pub fn canonicalize(&self) -> Self {
        let Some(top) = self.0.iter().map(|cell| cell.1).min() else {
            return self.clone();
        };
        // the top row is never empty, so this always finds a cell
        let left = self.0.iter()
            .filter(|cell| cell.1 == top)
            .map(|cell| cell.0)
            .min()
            .unwrap_or(0);

        Self(self.0.iter()
            .map(|cell| cell.shifted((-left, -top)))
            .sorted_by_key(Offset::as_index)
            .collect_vec())
    }

    /// Rotate every cell by `turn`, returning the canonical form of the result.
    pub fn rotate(&self, turn: Turn) -> Self {
        Self(self.0.iter().map(|cell| turn.apply(*cell)).collect_vec()).canonicalize()
    }

    /// Mirror the stencil across the vertical axis, `(x, y) -> (-x, y)`, returning the canonical form of the result.
    pub fn reflect(&self) -> Self {
        Self(self.0.iter().map(|Offset(x, y)| Offset(-x, *y)).collect_vec()).canonicalize()
    }

    /// Whether every cell can reach every other by stepping between edge-adjacent cells of the stencil.
    pub fn is_polyomino(&self) -> bool {
        let mut graph: UnGraphMap<Offset, ()> = UnGraphMap::with_capacity(self.0.len(), 2 * self.0.len());
        for cell in &self.0 {
            graph.add_node(*cell);
        }

        // right and down neighbors are enough to see every adjacency once
        for cell in &self.0 {
            for step in [(1, 0), (0, 1)] {
                let neighbor = cell.shifted(step);
                if graph.contains_node(neighbor) {
                    graph.add_edge(*cell, neighbor, ());
                }
            }
        }

        connected_components(&graph) == 1
    }
}

impl Display for Stencil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (min_x, max_x) = self.0.iter().map(|cell| cell.0).minmax().into_option().unwrap_or((0, 0));
        let (min_y, max_y) = self.0.iter().map(|cell| cell.1).minmax().into_option().unwrap_or((0, 0));

        let mut board = Array2::from_elem(((max_y - min_y + 1) as usize, (max_x - min_x + 1) as usize), ' ');
        for Offset(x, y) in &self.0 {
            if let Some(slot) = board.get_mut(((y - min_y) as usize, (x - min_x) as usize)) {
                *slot = '#';
            }
        }

        write!(f, "{}", print(&board))
    }
}
