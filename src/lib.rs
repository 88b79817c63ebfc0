#![warn(missing_docs)]

//! # `polyprep`
//!
//! Preparation and display helpers for polyomino and region puzzles handed to a declarative constraint solver.
//! The solver itself is not part of this crate; `polyprep` only builds the shape facts a solver program consumes and
//! draws the grids it answers with.
//!
//! ## Shapes
//! Pieces are described by a [`Stencil`], a list of `(x, y)` cell offsets with `y` growing downward.
//! [`enumerate_orientations`](orientation::enumerate_orientations) turns one stencil into every geometrically
//! distinct rotation (and, if asked, reflection) in canonical form, each under a deterministic name such as `L_cw` or
//! `L_r_180`. [`build_fact_catalog`](catalog::build_fact_catalog) does this for a selection of letters from the
//! built-in tetromino and pentomino tables and emits lines of `shape(<name>,<orientation>,<x>,<y>).` facts.
//!
//! ## Grids
//! [`RegionRenderer`](render::RegionRenderer) doubles the resolution of a character grid and draws box-drawing
//! lines wherever two neighboring cells belong to different regions, joining them with the matching corner and tee
//! glyphs. [`output`] prints the result in color, or tab-separated, according to a [`RenderConfig`].

pub use catalog::{build_fact_catalog, Family};
pub use error::{Error, Result};
pub use location::{Location, Offset};
pub use output::RenderConfig;
pub use render::{buffer_grid, RegionRenderer, RenderedGrid};
pub use shape::{Stencil, Turn};

pub mod catalog;
pub mod error;
pub mod glyph;
pub(crate) mod location;
pub mod orientation;
pub mod output;
pub mod regions;
pub mod render;
pub mod shape;
