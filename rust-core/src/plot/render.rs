//! Line plot rendering to PNG bytes
//!
//! Draws into an in-memory RGB buffer with plotters, then encodes the
//! buffer as PNG so callers receive a self-describing image.

use crate::error::{ensure_same_len, PipelineError, PipelineResult};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;
use std::ops::Range;

/// Largest accepted image side in pixels
pub const MAX_PLOT_DIMENSION: u32 = 16_384;

/// Plot appearance
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Title font size
    pub caption_font_size: f64,

    /// Margin around the chart in pixels
    pub margin: u32,

    /// Space reserved for axis labels in pixels
    pub label_area_size: u32,

    pub line_color: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            caption_font_size: 30.0,
            margin: 10,
            label_area_size: 40,
            line_color: RED,
        }
    }
}

/// Render an x/y line plot with the default configuration
///
/// # Arguments
/// * `x`, `y` - Point coordinates (equal length)
/// * `x_label`, `y_label` - Axis descriptions
/// * `title` - Chart caption
///
/// # Returns
/// PNG-encoded image bytes
pub fn generate_plot(
    x: &[f64],
    y: &[f64],
    x_label: &str,
    y_label: &str,
    title: &str,
) -> PipelineResult<Vec<u8>> {
    generate_plot_with(x, y, x_label, y_label, title, &PlotConfig::default())
}

/// Render an x/y line plot with an explicit configuration
pub fn generate_plot_with(
    x: &[f64],
    y: &[f64],
    x_label: &str,
    y_label: &str,
    title: &str,
    config: &PlotConfig,
) -> PipelineResult<Vec<u8>> {
    ensure_same_len(x.len(), y.len())?;
    if config.width == 0 || config.height == 0 {
        return Err(PipelineError::InvalidParameter(format!(
            "plot size must be non-zero, got {}x{}",
            config.width, config.height
        )));
    }

    let points: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .map(|(&px, &py)| (px, py))
        .filter(|(px, py)| px.is_finite() && py.is_finite())
        .collect();

    let x_range = axis_range(points.iter().map(|p| p.0));
    let y_range = axis_range(points.iter().map(|p| p.1));

    if config.width > MAX_PLOT_DIMENSION || config.height > MAX_PLOT_DIMENSION {
        return Err(PipelineError::InvalidParameter(format!(
            "plot size {}x{} exceeds {} pixels per side",
            config.width, config.height, MAX_PLOT_DIMENSION
        )));
    }

    let (width, height) = (config.width, config.height);
    let buffer_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| {
            PipelineError::InvalidParameter(format!(
                "plot size {}x{} is too large",
                width, height
            ))
        })?;
    let mut buffer: Vec<u8> = vec![0; buffer_len];
    {
        // The drawing area borrows `buffer` until it is dropped
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", config.caption_font_size))
            .margin(config.margin as i32)
            .x_label_area_size(config.label_area_size as i32)
            .y_label_area_size(config.label_area_size as i32)
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()
            .map_err(plot_error)?;

        chart
            .draw_series(LineSeries::new(points, config.line_color.stroke_width(2)))
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
    }

    let mut png_buffer = Vec::new();
    PngEncoder::new(&mut png_buffer).write_image(&buffer, width, height, ExtendedColorType::Rgb8)?;

    log::debug!(
        "Rendered '{}' ({}x{}, {} points, {} bytes)",
        title,
        width,
        height,
        x.len(),
        png_buffer.len()
    );
    Ok(png_buffer)
}

/// Axis range covering all values
///
/// A single distinct value is widened by 0.5 each side; no values gives 0..1.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if min > max {
        0.0..1.0
    } else if min == max {
        (min - 0.5)..(max + 0.5)
    } else {
        min..max
    }
}

fn plot_error<E: std::fmt::Display>(e: E) -> PipelineError {
    PipelineError::Plot(e.to_string())
}
