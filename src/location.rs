use ndarray::Ix;

pub(crate) type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a rendered grid. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    // stepping off the top or left edge wraps to a huge coordinate, which `Array2::get` rejects
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

/// One cell of a [`Stencil`](crate::shape::Stencil), relative to the shape's anchor.
///
/// Coordinates are `(x, y)` with `x` growing to the right and `y` growing downward, so `Offset(1, 0)` is the cell
/// right of the anchor and `Offset(0, 1)` the one below it.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Offset(pub isize, pub isize);

impl Offset {
    /// The key cells are sorted by in canonical form: row first, then column.
    pub(crate) fn as_index(&self) -> (isize, isize) {
        (self.1, self.0)
    }

    pub(crate) fn shifted(self, rhs: (isize, isize)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl From<(isize, isize)> for Offset {
    fn from(value: (isize, isize)) -> Self {
        Self(value.0, value.1)
    }
}
