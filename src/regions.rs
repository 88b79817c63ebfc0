use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, instrument};

/// One cell of a region grid: `(row, col, region)`, all 0-indexed.
pub type RegionCell = (usize, usize, usize);

/// Number the regions of a grid given as text lines, where each region is marked by its own character.
///
/// Regions are numbered from 0 in the order their character is first met, reading row by row. Cells whose character
/// appears in `excluded` are left out entirely.
#[instrument(level = "debug", skip(lines))]
pub fn map_cells<S: AsRef<str>>(lines: &[S], excluded: &str) -> Vec<RegionCell> {
    let mut numbering: HashMap<char, usize> = HashMap::new();
    let mut cells = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.as_ref().chars().enumerate() {
            if excluded.contains(ch) {
                continue;
            }

            let next = numbering.len();
            let region = *numbering.entry(ch).or_insert(next);
            cells.push((row, col, region));
        }
    }

    debug!(regions = numbering.len(), cells = cells.len(), "mapped region cells");
    cells
}

/// List `cells` as facts of the form `<predicate>(<col>,<row>,<region>).`, one per line.
pub fn cell_facts(predicate: &str, cells: &[RegionCell]) -> String {
    cells.iter()
        .map(|(row, col, region)| format!("{predicate}({col},{row},{region})."))
        .join("\n")
}
