use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use ndarray::Array2;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::render::{buffer_grid, RegionRenderer};

/// The eight basic terminal colors a [`Palette`] can assign.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, strum::Display, strum::EnumString, strum::VariantArray)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

// the non-bright ANSI colors, 30 through 37
impl From<PaletteColor> for Color {
    fn from(value: PaletteColor) -> Self {
        match value {
            PaletteColor::Black => Color::Black,
            PaletteColor::Red => Color::DarkRed,
            PaletteColor::Green => Color::DarkGreen,
            PaletteColor::Yellow => Color::DarkYellow,
            PaletteColor::Blue => Color::DarkBlue,
            PaletteColor::Magenta => Color::DarkMagenta,
            PaletteColor::Cyan => Color::DarkCyan,
            PaletteColor::White => Color::Grey,
        }
    }
}

/// Which color each character is printed in. Characters without an entry are printed uncolored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Palette(HashMap<char, PaletteColor>);

impl Palette {
    /// Add or replace the color of `ch`.
    pub fn with(mut self, ch: char, color: PaletteColor) -> Self {
        self.0.insert(ch, color);
        self
    }

    /// The color assigned to `ch`, if any.
    pub fn color_of(&self, ch: char) -> Option<PaletteColor> {
        self.0.get(&ch).copied()
    }
}

impl FromIterator<(char, PaletteColor)> for Palette {
    fn from_iter<T: IntoIterator<Item = (char, PaletteColor)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Print `chars` one character at a time.
///
/// Unless `tabbed` is set, characters with a palette entry are wrapped in a color change and a reset. With `tabbed`
/// colors are ignored and every character is followed by a tab instead. Each row ends with a newline.
pub fn print_chars<W: Write>(out: &mut W, chars: &Array2<char>, palette: &Palette, tabbed: bool) -> Result<()> {
    for row in chars.rows() {
        for ch in row {
            if tabbed {
                queue!(out, Print(ch), Print('\t'))?;
                continue;
            }

            match palette.color_of(*ch) {
                Some(color) => queue!(out, SetForegroundColor(color.into()), Print(ch), ResetColor)?,
                None => queue!(out, Print(ch))?,
            }
        }
        queue!(out, Print('\n'))?;
    }

    out.flush()?;
    Ok(())
}

/// Print `chars` spread out by [`buffer_grid`], leaving room for connectors drawn between cells.
pub fn print_buffered<W: Write>(out: &mut W, chars: &Array2<char>, palette: &Palette) -> Result<()> {
    print_chars(out, &buffer_grid(chars), palette, false)
}

/// Print `chars`, boxing regions when a region grid is given.
///
/// Without `regions`, or with `tabbed` set, the grid is printed as is. Otherwise it is rendered through a
/// [`RegionRenderer`] first, with `outside` standing for every position beyond the grid.
#[instrument(level = "debug", skip(out, chars, regions, palette, outside))]
pub fn render_to<W: Write, R: PartialEq>(
    out: &mut W,
    chars: &Array2<char>,
    regions: Option<&Array2<R>>,
    palette: &Palette,
    tabbed: bool,
    outside: R,
) -> Result<()> {
    match regions {
        Some(regions) if !tabbed => {
            let rendered = RegionRenderer::new(regions, outside).render(chars)?;
            print_chars(out, rendered.as_array(), palette, false)
        }
        _ => print_chars(out, chars, palette, tabbed),
    }
}

/// How grids are printed, as read from a TOML file.
///
/// ```toml
/// tabbed = false
/// outside = "#"
///
/// [colors]
/// L = "red"
/// "." = "white"
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Print tab-separated characters instead of boxed regions.
    pub tabbed: bool,
    /// Region identifier given to every position beyond the grid.
    pub outside: char,
    /// Per-character colors.
    pub colors: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tabbed: false,
            outside: ' ',
            colors: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("failed to parse config: {e}")))
    }

    /// Load a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("failed to read config file: {e}")))?;
        let config = Self::from_toml_str(&text)?;

        debug!(colors = config.colors.0.len(), tabbed = config.tabbed, "config loaded");
        Ok(config)
    }

    /// [`render_to`] with this configuration's palette, tab mode and outside identifier.
    pub fn render_to<W: Write>(&self, out: &mut W, chars: &Array2<char>, regions: Option<&Array2<char>>) -> Result<()> {
        render_to(out, chars, regions, &self.colors, self.tabbed, self.outside)
    }
}
