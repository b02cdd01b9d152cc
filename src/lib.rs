pub mod cli;
pub mod commands;
pub mod freq;
pub mod heatmap;
pub mod utils;
