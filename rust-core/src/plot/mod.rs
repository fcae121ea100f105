//! PNG plot rendering with plotters

pub mod render;

pub use render::{generate_plot, generate_plot_with, PlotConfig, MAX_PLOT_DIMENSION};
