/*!
This crate provides functionality to generate annotated grid plots: matrices
of colored square cells with optional centered text labels and outlined cells
of interest, flanked by row and column labels and a vertical colorbar. Grid
plots can be rendered as SVG, PNG, and PDF images.

Grid plots are useful for representing per-position frequency matrices.
*/

mod common;
mod gridplot;
mod image;
mod pdf;
mod png;
mod svg;

pub(crate) use common::prepare_svg_tree;
pub use gridplot::{Cell, Color, ColorBar, GridPlot, Tick};
pub use image::generate as generate_image;
