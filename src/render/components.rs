use bevy::prelude::*;

/// Space reserved around the plot area, in logical pixels.
pub const MARGIN_LEFT: f32 = 80.0;
pub const MARGIN_RIGHT: f32 = 24.0;
pub const MARGIN_TOP: f32 = 48.0;
pub const MARGIN_BOTTOM: f32 = 64.0;

/// Fraction of the data span added on each side of the fitted view.
pub const VIEW_PADDING: f32 = 0.05;

#[derive(Component)]
pub struct ChartCamera;

#[derive(Component)]
pub struct ChartRenderRoot;

/// World-space placement of the chart. The 2D camera maps one world unit to
/// one logical pixel with the origin at the window center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    /// Whole window
    pub window: Rect,
    /// Area inside the axes frame
    pub plot: Rect,
}

impl PlotRect {
    pub fn from_window(size: Vec2) -> Self {
        let window = Rect::from_center_size(Vec2::ZERO, size);
        let min = Vec2::new(window.min.x + MARGIN_LEFT, window.min.y + MARGIN_BOTTOM);
        let max = Vec2::new(window.max.x - MARGIN_RIGHT, window.max.y - MARGIN_TOP);
        // Rect::from_corners orders the corners, keep a degenerate area instead
        let plot = Rect {
            min,
            max: max.max(min),
        };
        Self { window, plot }
    }
}

/// Visible data range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotView {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for PlotView {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::ONE,
        }
    }
}

impl PlotView {
    /// Fit `[min, max]` with padding. A y range starting at zero keeps the
    /// zero line on the bottom edge.
    pub fn fit(min: [f32; 2], max: [f32; 2]) -> Self {
        let pad = |lo: f32, hi: f32| (hi - lo).max(1e-6) * VIEW_PADDING;
        let px = pad(min[0], max[0]);
        let py = pad(min[1], max[1]);

        let y_min = if min[1] == 0.0 { 0.0 } else { min[1] - py };

        Self {
            min: Vec2::new(min[0] - px, y_min),
            max: Vec2::new(max[0] + px, max[1] + py),
        }
    }

    pub fn span(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Convert data coordinates to world coordinates.
pub fn data_to_world(data: Vec2, rect: &PlotRect, view: &PlotView) -> Vec2 {
    let t = (data - view.min) / view.span();
    rect.plot.min + t * rect.plot.size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_inside_margins() {
        let r = PlotRect::from_window(Vec2::new(1000.0, 600.0));
        assert_eq!(r.window.min, Vec2::new(-500.0, -300.0));
        assert_eq!(r.plot.min, Vec2::new(-420.0, -236.0));
        assert_eq!(r.plot.max, Vec2::new(476.0, 252.0));
    }

    #[test]
    fn tiny_window_gives_empty_plot_area() {
        let r = PlotRect::from_window(Vec2::new(50.0, 50.0));
        assert_eq!(r.plot.size(), Vec2::ZERO);
    }

    #[test]
    fn fit_pads_and_pins_zero_baseline() {
        let v = PlotView::fit([-4.0, 0.0], [4.0, 0.4]);
        assert!((v.min.x + 4.4).abs() < 1e-5);
        assert!((v.max.x - 4.4).abs() < 1e-5);
        assert_eq!(v.min.y, 0.0);
        assert!((v.max.y - 0.42).abs() < 1e-5);

        let v = PlotView::fit([0.0, -1.0], [10.0, 1.0]);
        assert!((v.min.y + 1.1).abs() < 1e-5);
    }

    #[test]
    fn data_maps_onto_plot_corners() {
        let rect = PlotRect::from_window(Vec2::new(1000.0, 600.0));
        let view = PlotView {
            min: Vec2::new(-4.0, 0.0),
            max: Vec2::new(4.0, 0.5),
        };
        assert_eq!(data_to_world(view.min, &rect, &view), rect.plot.min);
        assert_eq!(data_to_world(view.max, &rect, &view), rect.plot.max);

        let mid = data_to_world(Vec2::new(0.0, 0.25), &rect, &view);
        assert_eq!(mid, rect.plot.center());
    }
}
