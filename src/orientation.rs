use std::collections::HashSet;

use strum::VariantArray;
use tracing::{debug, instrument, trace, warn};

use crate::shape::{Stencil, Turn};

/// Name the orientation produced by turning the `base` orientation by `turn`, optionally after a reflection.
///
/// Reflected orientations get `_r` appended to `base`. Quarter turns of `Vertical` are always called `Horizontal`.
/// Every other turn appends its token, giving names like `L_cw` or `L_r_180`.
pub fn namer(base: &str, turn: Turn, reflected: bool) -> String {
    let prefix = if reflected { format!("{base}_r") } else { base.to_string() };

    match turn {
        Turn::Identity => prefix,
        Turn::Clockwise | Turn::CounterClockwise if base == "Vertical" => "Horizontal".to_string(),
        _ => format!("{prefix}_{turn}"),
    }
}

/// The distinct orientations of one shape, in the order they were produced, each under a unique name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrientationSet {
    entries: Vec<(String, Stencil)>,
}

impl OrientationSet {
    fn insert(&mut self, name: String, stencil: Stencil) {
        if self.get(&name).is_some() {
            warn!(%name, "orientation name already taken, keeping the first stencil");
            return;
        }

        self.entries.push((name, stencil));
    }

    /// Look up the canonical stencil registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Stencil> {
        self.entries.iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, stencil)| stencil)
    }

    /// Orientation names, in production order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, stencil)` pairs, in production order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stencil)> {
        self.entries.iter().map(|(name, stencil)| (name.as_str(), stencil))
    }

    /// Number of distinct orientations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for sets built by [`enumerate_orientations`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Produce every geometrically distinct rotation of `stencil` in canonical form, and every distinct rotation of its
/// mirror image too when `allow_reflections` is set.
///
/// Turns are tried in the order of [`Turn::VARIANTS`], first on `stencil` and then on its single reflection. A form
/// already produced earlier in the call is skipped, so rotation names win over reflection names and symmetric
/// shapes yield fewer entries.
#[instrument(level = "debug", skip(stencil))]
pub fn enumerate_orientations(stencil: &Stencil, base_name: &str, allow_reflections: bool) -> OrientationSet {
    let mut orientations = OrientationSet::default();
    let mut seen: HashSet<Stencil> = HashSet::with_capacity(2 * Turn::VARIANTS.len());

    let mut sources = vec![(stencil.clone(), false)];
    if allow_reflections {
        sources.push((stencil.reflect(), true));
    }

    for (source, reflected) in sources {
        for turn in Turn::VARIANTS {
            let rotated = source.rotate(*turn);
            if seen.contains(&rotated) {
                trace!(%turn, reflected, "duplicate orientation skipped");
                continue;
            }

            seen.insert(rotated.clone());
            orientations.insert(namer(base_name, *turn, reflected), rotated);
        }
    }

    debug!(count = orientations.len(), "enumerated orientations");
    orientations
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::location::Offset;
    use crate::orientation::{enumerate_orientations, namer};
    use crate::shape::{Stencil, Turn};

    fn stencil(cells: &[(isize, isize)]) -> Stencil {
        Stencil::new(cells.iter().copied()).unwrap()
    }

    #[test]
    fn names() {
        assert_eq!(namer("L", Turn::Identity, false), "L");
        assert_eq!(namer("L", Turn::Clockwise, false), "L_cw");
        assert_eq!(namer("L", Turn::CounterClockwise, true), "L_r_ccw");
        assert_eq!(namer("L", Turn::Half, true), "L_r_180");
        assert_eq!(namer("L", Turn::Identity, true), "L_r");
    }

    #[test]
    fn quarter_turned_vertical_is_horizontal() {
        assert_eq!(namer("Vertical", Turn::Clockwise, false), "Horizontal");
        assert_eq!(namer("Vertical", Turn::CounterClockwise, false), "Horizontal");
        assert_eq!(namer("Vertical", Turn::Clockwise, true), "Horizontal");
        assert_eq!(namer("Vertical", Turn::Half, false), "Vertical_180");
        assert_eq!(namer("Vertical", Turn::Identity, true), "Vertical_r");
    }

    #[test]
    fn square_has_one_orientation() {
        let o = stencil(&[(0, 0), (0, 1), (1, 0), (1, 1)]);

        let rotations = enumerate_orientations(&o, "O", false);
        assert_eq!(rotations.names().collect_vec(), vec!["O"]);
        assert_eq!(rotations.get("O").unwrap().cells(), &[Offset(0, 0), Offset(1, 0), Offset(0, 1), Offset(1, 1)]);

        assert_eq!(enumerate_orientations(&o, "O", true).len(), 1);
    }

    #[test]
    fn bar_is_vertical_or_horizontal() {
        let i = stencil(&[(0, 0), (0, 1), (0, 2), (0, 3)]);

        let orientations = enumerate_orientations(&i, "Vertical", false);
        assert_eq!(orientations.names().collect_vec(), vec!["Vertical", "Horizontal"]);
        assert_eq!(orientations.get("Horizontal").unwrap().cells(), &[Offset(0, 0), Offset(1, 0), Offset(2, 0), Offset(3, 0)]);

        assert_eq!(enumerate_orientations(&i, "Vertical", true).names().collect_vec(), vec!["Vertical", "Horizontal"]);
    }

    #[test]
    fn chiral_shape_gets_all_eight() {
        let l = stencil(&[(0, 0), (0, 1), (0, 2), (1, 2)]);

        assert_eq!(enumerate_orientations(&l, "L", false).names().collect_vec(), vec!["L", "L_cw", "L_ccw", "L_180"]);
        assert_eq!(
            enumerate_orientations(&l, "L", true).names().collect_vec(),
            vec!["L", "L_cw", "L_ccw", "L_180", "L_r", "L_r_cw", "L_r_ccw", "L_r_180"],
        );
    }

    #[test]
    fn half_turn_symmetric_shape() {
        let s = stencil(&[(0, 0), (0, 1), (1, 0), (-1, 1)]);
        assert_eq!(enumerate_orientations(&s, "S", true).names().collect_vec(), vec!["S", "S_cw", "S_r", "S_r_cw"]);
    }

    #[test]
    fn mirror_symmetric_shape_adds_no_reflections() {
        let t = stencil(&[(0, 0), (1, 0), (-1, 0), (0, 1)]);
        assert_eq!(enumerate_orientations(&t, "T", true).names().collect_vec(), vec!["T", "T_cw", "T_ccw", "T_180"]);
    }

    #[test]
    fn orientations_are_canonical_and_distinct() {
        let f = stencil(&[(0, 0), (1, 0), (-1, 1), (0, 1), (0, 2)]);
        let orientations = enumerate_orientations(&f, "F", true);

        assert_eq!(orientations.len(), 8);
        assert!(orientations.iter().all(|(_, s)| s.canonicalize() == *s));
        assert!(orientations.iter().map(|(_, s)| s).all_unique());
    }
}
