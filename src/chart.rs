use crate::core::{
    Chart2D, Color, Geometry2D, Layer2D, LineDash, Orientation, ReferenceLine, Style,
};
use bevy_math::Vec2;

pub fn chart() -> ChartBuilder {
    ChartBuilder {
        chart: Chart2D::new(),
        window: WindowSpec::default(),
        last: None,
    }
}

/// Window the chart is displayed in.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSpec {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background: Color::WHITE,
        }
    }
}

#[derive(Clone, Copy)]
enum Added {
    Layer,
    ReferenceLine,
}

pub struct ChartBuilder {
    chart: Chart2D,
    window: WindowSpec,
    last: Option<Added>,
}

impl ChartBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.chart.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.chart.meta.description = Some(text.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.chart.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.chart.y_label = Some(label.into());
        self
    }

    pub fn grid(mut self, on: bool) -> Self {
        self.chart.show_grid = on;
        self
    }

    pub fn legend(mut self, on: bool) -> Self {
        self.chart.show_legend = on;
        self
    }

    pub fn background_color(mut self, c: Color) -> Self {
        self.window.background = c;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width.max(1);
        self.window.height = height.max(1);
        self
    }

    pub fn line(mut self, xy: Vec<Vec2>, style: Style) -> Self {
        let mut layer = Layer2D::new(Geometry2D::Line, xy);
        layer.style = style;
        self.chart.layers.push(layer);
        self.last = Some(Added::Layer);
        self
    }

    pub fn fill_between(mut self, upper: Vec<Vec2>, lower: Vec<Vec2>, style: Style) -> Self {
        let mut layer = Layer2D::new(Geometry2D::FillBetween, upper);
        layer.lower_line = Some(lower);
        layer.style = style;
        self.chart.layers.push(layer);
        self.last = Some(Added::Layer);
        self
    }

    /// Fill between `upper` and the x-axis.
    pub fn fill_to_zero(self, upper: Vec<Vec2>, style: Style) -> Self {
        let lower = upper.iter().map(|p| Vec2::new(p.x, 0.0)).collect();
        self.fill_between(upper, lower, style)
    }

    pub fn vline(self, x: f32, style: Style, dash: LineDash) -> Self {
        self.reference_line(Orientation::Vertical, x, style, dash)
    }

    pub fn hline(self, y: f32, style: Style, dash: LineDash) -> Self {
        self.reference_line(Orientation::Horizontal, y, style, dash)
    }

    fn reference_line(
        mut self,
        orientation: Orientation,
        value: f32,
        style: Style,
        dash: LineDash,
    ) -> Self {
        self.chart.reference_lines.push(ReferenceLine {
            orientation,
            value,
            style,
            dash,
            label: None,
        });
        self.last = Some(Added::ReferenceLine);
        self
    }

    /// Attach a legend label to the most recently added layer or reference line.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        let label = Some(label.into());
        match self.last {
            Some(Added::Layer) => {
                if let Some(layer) = self.chart.layers.last_mut() {
                    layer.label = label;
                }
            }
            Some(Added::ReferenceLine) => {
                if let Some(line) = self.chart.reference_lines.last_mut() {
                    line.label = label;
                }
            }
            None => {}
        }
        self
    }

    /// Get the built chart without displaying it
    pub fn build(self) -> Chart2D {
        self.chart
    }

    pub fn window(&self) -> &WindowSpec {
        &self.window
    }

    /// Open a window and display the chart until it is closed
    pub fn show(self) -> crate::Result<()> {
        crate::runtime::run_chart(self.chart, self.window)
    }
}
