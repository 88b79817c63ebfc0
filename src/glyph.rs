use strum::VariantArray;

/// Vertical boundary segment, drawn between horizontally adjacent cells of different regions.
pub const VERTICAL: char = '│';
/// Horizontal boundary segment, drawn between vertically adjacent cells of different regions.
pub const HORIZONTAL: char = '─';
/// Nothing drawn.
pub const BLANK: char = ' ';

/// What occupies one boundary slot of a buffered grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum Boundary {
    /// No segment.
    Blank,
    /// A [`VERTICAL`] bar.
    Vertical,
    /// A [`HORIZONTAL`] bar.
    Horizontal,
}

impl Boundary {
    /// Classify a character already placed in the buffered grid. Anything that is not a bar counts as blank.
    pub fn from_glyph(glyph: char) -> Self {
        match glyph {
            VERTICAL => Self::Vertical,
            HORIZONTAL => Self::Horizontal,
            _ => Self::Blank,
        }
    }

    /// The character drawn for this segment.
    pub fn glyph(&self) -> char {
        match self {
            Self::Blank => BLANK,
            Self::Vertical => VERTICAL,
            Self::Horizontal => HORIZONTAL,
        }
    }
}

/// The glyph joining the four segments around a grid intersection.
///
/// `above` and `below` are the slots directly over and under the intersection, `left` and `right` the slots beside
/// it. Combinations that boundary placement cannot produce, such as a lone stub, come out blank.
pub fn junction(above: Boundary, below: Boundary, left: Boundary, right: Boundary) -> char {
    use Boundary::{Blank as B, Horizontal as H, Vertical as V};

    match (above, below, left, right) {
        (B, V, B, H) => '┌',
        (V, V, B, H) => '├',
        (B, V, H, H) => '┬',
        (V, V, H, H) => '┼',
        (B, V, H, B) => '┐',
        (V, V, H, B) => '┤',
        (V, B, H, H) => '┴',
        (V, B, B, H) => '└',
        (V, B, H, B) => '┘',
        (V, V, B, B) => '│',
        (B, B, H, H) => '─',
        _ => BLANK,
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::VariantArray;

    use crate::glyph::{junction, Boundary, BLANK, HORIZONTAL, VERTICAL};

    #[test]
    fn glyphs_round_trip() {
        for boundary in Boundary::VARIANTS {
            assert_eq!(Boundary::from_glyph(boundary.glyph()), *boundary);
        }
        assert_eq!(Boundary::from_glyph('a'), Boundary::Blank);
    }

    #[test]
    fn corners_and_tees() {
        use Boundary::{Blank as B, Horizontal as H, Vertical as V};

        assert_eq!(junction(B, V, B, H), '┌');
        assert_eq!(junction(B, V, H, B), '┐');
        assert_eq!(junction(V, B, B, H), '└');
        assert_eq!(junction(V, B, H, B), '┘');
        assert_eq!(junction(V, V, B, H), '├');
        assert_eq!(junction(V, V, H, B), '┤');
        assert_eq!(junction(B, V, H, H), '┬');
        assert_eq!(junction(V, B, H, H), '┴');
        assert_eq!(junction(V, V, H, H), '┼');
        assert_eq!(junction(V, V, B, B), VERTICAL);
        assert_eq!(junction(B, B, H, H), HORIZONTAL);
        assert_eq!(junction(B, B, B, B), BLANK);
    }

    #[test]
    fn stubs_and_nonsense_are_blank() {
        use Boundary::{Blank as B, Horizontal as H, Vertical as V};

        assert_eq!(junction(V, B, B, B), BLANK);
        assert_eq!(junction(B, V, B, B), BLANK);
        assert_eq!(junction(B, B, H, B), BLANK);
        assert_eq!(junction(B, B, B, H), BLANK);
        // a horizontal bar where a vertical one belongs
        assert_eq!(junction(H, V, H, H), BLANK);
    }

    #[test]
    fn exactly_eleven_drawn_junctions() {
        let drawn = Boundary::VARIANTS.iter()
            .cartesian_product(Boundary::VARIANTS)
            .cartesian_product(Boundary::VARIANTS)
            .cartesian_product(Boundary::VARIANTS)
            .filter(|(((above, below), left), right)| junction(**above, **below, **left, **right) != BLANK)
            .count();

        assert_eq!(drawn, 11);
    }
}
