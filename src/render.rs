use std::fmt::{Display, Formatter};

use ndarray::Array2;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::glyph::{junction, Boundary, BLANK, HORIZONTAL, VERTICAL};
use crate::location::Location;

/// Dump `board` row by row, one line per row.
pub(crate) fn print(board: &Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}

/// Build a character grid from text lines, one row per line.
///
/// Fails with [`Error::DimensionMismatch`] if the lines differ in length.
pub fn grid_from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Array2<char>> {
    let cols = lines.first().map_or(0, |line| line.as_ref().chars().count());

    let mut cells = Vec::with_capacity(lines.len() * cols);
    for line in lines {
        let before = cells.len();
        cells.extend(line.as_ref().chars());
        if cells.len() - before != cols {
            return Err(Error::DimensionMismatch {
                expected: (lines.len(), cols),
                found: (lines.len(), cells.len() - before),
            });
        }
    }

    Array2::from_shape_vec((lines.len(), cols), cells).map_err(|e| Error::InvalidArgument(e.to_string()))
}

/// Spread `chars` out so there is a free slot between every pair of neighboring cells and around the edge.
///
/// An `R×C` grid becomes `(2R+1)×(2C+1)`; cell `(r, c)` lands on `(2r+1, 2c+1)` and every other slot is blank.
pub fn buffer_grid(chars: &Array2<char>) -> Array2<char> {
    let (rows, cols) = chars.dim();
    let mut buffered = Array2::from_elem((2 * rows + 1, 2 * cols + 1), BLANK);

    for (index, ch) in chars.indexed_iter() {
        let Location(x, y) = index.into();
        buffered[(2 * y + 1, 2 * x + 1)] = *ch;
    }

    buffered
}

/// A buffered grid with region boundaries drawn in, ready to print.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedGrid(Array2<char>);

impl RenderedGrid {
    /// The character at `(row, col)` of the buffered grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.0.get((row, col)).copied()
    }

    /// `(rows, cols)` of the buffered grid.
    pub fn dim(&self) -> (usize, usize) {
        self.0.dim()
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array2<char> {
        &self.0
    }

    /// Give up the underlying array.
    pub fn into_inner(self) -> Array2<char> {
        self.0
    }
}

impl Display for RenderedGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(&self.0))
    }
}

/// Draws box lines between cells whose region identifiers differ.
///
/// Every position off the grid belongs to the `outside` region, so the border of the grid is drawn exactly where a
/// region meets the edge, unless that region shares the `outside` identifier.
pub struct RegionRenderer<'a, R> {
    regions: &'a Array2<R>,
    outside: R,
}

impl<'a, R: PartialEq> RegionRenderer<'a, R> {
    /// Prepare to draw the boundaries of `regions`.
    pub fn new(regions: &'a Array2<R>, outside: R) -> Self {
        Self { regions, outside }
    }

    fn region_of(&self, location: Location) -> &R {
        self.regions.get(location.as_index()).unwrap_or(&self.outside)
    }

    fn splits(&self, location: Location, step: (isize, isize)) -> bool {
        self.region_of(location) != self.region_of(location.offset_by(step))
    }

    /// Produce the buffered form of `chars` with boundary and junction glyphs filled in.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `chars` and the region grid differ in shape. Inputs are left as is.
    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, chars: &Array2<char>) -> Result<RenderedGrid> {
        if chars.dim() != self.regions.dim() {
            return Err(Error::DimensionMismatch { expected: chars.dim(), found: self.regions.dim() });
        }

        let (rows, cols) = chars.dim();
        let mut buffered = buffer_grid(chars);

        // walls between column c - 1 and column c
        for row in 0..rows {
            for col in 0..=cols {
                if self.splits(Location(col, row), (-1, 0)) {
                    buffered[(2 * row + 1, 2 * col)] = VERTICAL;
                }
            }
        }

        // walls between row r - 1 and row r
        for row in 0..=rows {
            for col in 0..cols {
                if self.splits(Location(col, row), (0, -1)) {
                    buffered[(2 * row, 2 * col + 1)] = HORIZONTAL;
                }
            }
        }

        // intersections only ever look at wall slots, never at each other
        for row in (0..=2 * rows).step_by(2) {
            for col in (0..=2 * cols).step_by(2) {
                let point = Location(col, row);
                let glyph = junction(
                    segment(&buffered, point.offset_by((0, -1))),
                    segment(&buffered, point.offset_by((0, 1))),
                    segment(&buffered, point.offset_by((-1, 0))),
                    segment(&buffered, point.offset_by((1, 0))),
                );
                buffered[point.as_index()] = glyph;
            }
        }

        debug!(rows = buffered.nrows(), cols = buffered.ncols(), "rendered region grid");
        Ok(RenderedGrid(buffered))
    }
}

fn segment(board: &Array2<char>, location: Location) -> Boundary {
    board.get(location.as_index()).map_or(Boundary::Blank, |glyph| Boundary::from_glyph(*glyph))
}

#[cfg(test)]
mod tests {
    use ndarray::{arr2, Array2};

    use crate::error::Error;
    use crate::render::{buffer_grid, grid_from_lines, RegionRenderer};

    fn grid(lines: &[&str]) -> Array2<char> {
        grid_from_lines(lines).unwrap()
    }

    #[test]
    fn lines_to_grid() {
        let chars = grid(&["ab", "cd", "ef"]);
        assert_eq!(chars.dim(), (3, 2));
        assert_eq!(chars[(2, 0)], 'e');

        assert!(matches!(
            grid_from_lines(&["abc", "de"]),
            Err(Error::DimensionMismatch { expected: (2, 3), found: (2, 2) })
        ));
    }

    #[test]
    fn buffering() {
        let buffered = buffer_grid(&grid(&["ab", "cd"]));
        assert_eq!(buffered.dim(), (5, 5));
        assert_eq!(buffered, arr2(&[
            [' ', ' ', ' ', ' ', ' '],
            [' ', 'a', ' ', 'b', ' '],
            [' ', ' ', ' ', ' ', ' '],
            [' ', 'c', ' ', 'd', ' '],
            [' ', ' ', ' ', ' ', ' '],
        ]));
    }

    #[test]
    fn one_cell_split_off() {
        let regions = grid(&["12", "11"]);
        let rendered = RegionRenderer::new(&regions, ' ').render(&grid(&["ab", "cd"])).unwrap();

        assert_eq!(rendered.dim(), (5, 5));
        assert_eq!(rendered.get(1, 2), Some('│'));
        assert_eq!(rendered.get(3, 2), Some(' '));
        assert_eq!(rendered.get(2, 1), Some(' '));
        assert_eq!(rendered.get(2, 3), Some('─'));
        assert_eq!(rendered.get(0, 2), Some('┬'));
        assert_eq!(rendered.get(2, 2), Some('└'));
        assert_eq!(rendered.to_string(), "┌─┬─┐
│a│b│
│ └─┤
│c d│
└───┘
");
    }

    #[test]
    fn four_way_crossing() {
        let regions = grid(&["AB", "CD"]);
        let rendered = RegionRenderer::new(&regions, '#').render(&grid(&["..", ".."])).unwrap();

        assert_eq!(rendered.to_string(), "┌─┬─┐
│.│.│
├─┼─┤
│.│.│
└─┴─┘
");
    }

    #[test]
    fn uniform_region_draws_only_the_frame() {
        let regions = grid(&["xxx", "xxx"]);
        let rendered = RegionRenderer::new(&regions, ' ').render(&grid(&["abc", "def"])).unwrap();

        assert_eq!(rendered.to_string(), "┌─────┐
│a b c│
│     │
│d e f│
└─────┘
");
    }

    #[test]
    fn region_matching_outside_draws_nothing() {
        let regions = grid(&["##", "##"]);
        let chars = grid(&["ab", "cd"]);
        let rendered = RegionRenderer::new(&regions, '#').render(&chars).unwrap();

        assert_eq!(rendered.into_inner(), buffer_grid(&chars));
    }

    #[test]
    fn loop_against_outside() {
        // an inside loop surrounded by cells that count as outside
        let regions = grid(&["###", "#.#", "###"]);
        let rendered = RegionRenderer::new(&regions, '#').render(&grid(&["...", ".2.", "..."])).unwrap();

        let expected = [
            "       ",
            " . . . ",
            "  ┌─┐  ",
            " .│2│. ",
            "  └─┘  ",
            " . . . ",
            "       ",
        ];
        assert_eq!(rendered.to_string(), expected.map(|line| format!("{line}\n")).concat());
    }

    #[test]
    fn region_sharing_outside_id_stays_open() {
        // the left cell shares the outside id, so only the right cell is boxed
        let regions = grid(&["#a"]);
        let rendered = RegionRenderer::new(&regions, '#').render(&grid(&["xy"])).unwrap();

        assert_eq!(rendered.to_string(), "  ┌─┐\n x│y│\n  └─┘\n");
    }

    #[test]
    fn integer_region_ids() {
        let regions = arr2(&[[0u32, 0, 1], [2, 2, 1]]);
        let rendered = RegionRenderer::new(&regions, u32::MAX).render(&grid(&["abc", "def"])).unwrap();

        assert_eq!(rendered.to_string(), "┌───┬─┐
│a b│c│
├───┤ │
│d e│f│
└───┴─┘
");
    }

    #[test]
    fn mismatched_grids() {
        let regions = grid(&["ab", "cd"]);
        assert!(matches!(
            RegionRenderer::new(&regions, ' ').render(&grid(&["abc", "def"])),
            Err(Error::DimensionMismatch { expected: (2, 3), found: (2, 2) })
        ));
    }

    #[test]
    fn inputs_untouched() {
        let regions = grid(&["12", "34"]);
        let chars = grid(&["ab", "cd"]);
        let (regions_before, chars_before) = (regions.clone(), chars.clone());

        RegionRenderer::new(&regions, ' ').render(&chars).unwrap();
        assert_eq!(regions, regions_before);
        assert_eq!(chars, chars_before);
    }
}
