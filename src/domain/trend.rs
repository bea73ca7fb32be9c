//! Sparkline geometry.
//!
//! Pure mapping from a price series to pixel-space polyline points, kept free
//! of any UI types so it can be exercised without a window. The egui side
//! only strokes what this module computes.

/// Only the most recent samples are plotted; older history is dropped.
pub const MAX_SAMPLES: usize = 50;

/// Stroke width of the trend line, in pixels.
pub const TREND_STROKE_WIDTH: f32 = 2.0;

/// Computed plot geometry for one sparkline, in surface-local pixels
/// (origin top-left, y growing downward).
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPath {
    /// Polyline vertices in sample order. First point is at x=0, last at
    /// x=width.
    pub points: Vec<(f32, f32)>,
    /// Vertical center, where the faint reference line is drawn.
    pub midline_y: f32,
}

/// Maps `samples` onto a `width` x `height` surface.
///
/// Returns `None` when there is nothing to draw: no samples, or a surface
/// with no visible area. `null` samples count as zero. The value axis is
/// normalized over `max - min`, with `1` substituted for a flat series so a
/// constant price collapses onto the midline instead of dividing by zero.
pub fn trend_path(samples: &[Option<f64>], width: f32, height: f32) -> Option<TrendPath> {
    if samples.is_empty() || width <= 0.0 || height <= 0.0 {
        return None;
    }

    let recent = &samples[samples.len().saturating_sub(MAX_SAMPLES)..];
    let values: Vec<f64> = recent.iter().map(|v| v.unwrap_or(0.0)).collect();

    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let mid = (min + max) / 2.0;

    let w = width as f64;
    let h = height as f64;
    // A single sample has no horizontal span; it sits at x=0.
    let span = (values.len() - 1).max(1) as f64;

    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = i as f64 / span * w;
            // Centered form of `h - ((v - min) / range) * h`: identical for
            // any non-zero range, and a flat series lands on the midline.
            let y = h / 2.0 - ((v - mid) / range) * h;
            (x as f32, y as f32)
        })
        .collect();

    Some(TrendPath {
        points,
        midline_y: height / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 200.0;
    const H: f32 = 48.0;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn first_point_at_zero_last_at_width() {
        for n in [2usize, 7, 50] {
            let samples = some(&(0..n).map(|i| i as f64).collect::<Vec<_>>());
            let path = trend_path(&samples, W, H).unwrap();
            assert_eq!(path.points.len(), n);
            assert_eq!(path.points[0].0, 0.0);
            assert!((path.points[n - 1].0 - W).abs() < 1e-4);
        }
    }

    #[test]
    fn higher_values_plot_higher() {
        let path = trend_path(&some(&[1.0, 3.0, 2.0]), W, H).unwrap();
        // min maps to the bottom edge, max to the top edge.
        assert!((path.points[0].1 - H).abs() < 1e-4);
        assert!(path.points[1].1.abs() < 1e-4);
        // (min+max)/2 sits exactly on the midline.
        assert!((path.points[2].1 - H / 2.0).abs() < 1e-4);
    }

    #[test]
    fn flat_series_collapses_to_midline() {
        let path = trend_path(&some(&[42.0; 12]), W, H).unwrap();
        for &(_, y) in &path.points {
            assert!((y - H / 2.0).abs() < 1e-4);
        }
        assert_eq!(path.midline_y, H / 2.0);
    }

    #[test]
    fn single_sample_is_one_point_at_origin_column() {
        let path = trend_path(&some(&[57000.0]), W, H).unwrap();
        assert_eq!(path.points.len(), 1);
        assert_eq!(path.points[0].0, 0.0);
        assert!((path.points[0].1 - H / 2.0).abs() < 1e-4);
    }

    #[test]
    fn empty_or_degenerate_surface_draws_nothing() {
        assert!(trend_path(&[], W, H).is_none());
        assert!(trend_path(&some(&[1.0, 2.0]), 0.0, H).is_none());
        assert!(trend_path(&some(&[1.0, 2.0]), W, 0.0).is_none());
    }

    #[test]
    fn series_is_capped_to_most_recent_samples() {
        let samples = some(&(0..120).map(|i| i as f64).collect::<Vec<_>>());
        let path = trend_path(&samples, W, H).unwrap();
        assert_eq!(path.points.len(), MAX_SAMPLES);
        // The window is the ascending tail, so its first sample is the
        // window minimum (bottom edge) and its last the maximum (top edge).
        assert!((path.points[0].1 - H).abs() < 1e-4);
        assert!(path.points[MAX_SAMPLES - 1].1.abs() < 1e-4);
    }

    #[test]
    fn null_samples_count_as_zero() {
        let path = trend_path(&[Some(10.0), None, Some(10.0)], W, H).unwrap();
        // The coalesced zero is the window minimum and plots on the bottom.
        assert!((path.points[1].1 - H).abs() < 1e-4);
        assert!(path.points[0].1.abs() < 1e-4);
    }
}
