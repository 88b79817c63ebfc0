use std::io::stdout;

use polyprep::output::{Palette, PaletteColor};
use polyprep::regions::{cell_facts, map_cells};
use polyprep::render::grid_from_lines;
use polyprep::{build_fact_catalog, Family, RenderConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> polyprep::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var("POLYPREP_CONFIG") {
        Ok(path) => RenderConfig::from_file(path)?,
        Err(_) => RenderConfig {
            colors: [
                ('L', PaletteColor::Red),
                ('I', PaletteColor::Green),
                ('T', PaletteColor::Yellow),
                ('S', PaletteColor::Blue),
            ].into_iter().collect::<Palette>(),
            ..RenderConfig::default()
        },
    };

    // a 6x6 lits board with four regions
    let regions = [
        "aaabbb",
        "aaabbb",
        "acccbb",
        "dccdbb",
        "dddddb",
        "dddddb",
    ];
    info!(rows = regions.len(), "preparing lits board");

    println!("{}", cell_facts("region", &map_cells(&regions, "")));
    println!("{}", build_fact_catalog(["L", "I", "T", "S"], true, Family::Tetromino)?);
    println!();

    let solution = grid_from_lines(&[
        "LLL..I",
        "L....I",
        "..TTTI",
        "S..T.I",
        "SS....",
        ".S....",
    ])?;
    config.render_to(&mut stdout(), &solution, Some(&grid_from_lines(&regions)?))?;

    Ok(())
}
