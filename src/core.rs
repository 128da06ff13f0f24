use bevy_math::Vec2;
use serde::{Deserialize, Serialize};

/// Common metadata for a chart
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the chart
    pub title: Option<String>,
    /// Logged when the chart is shown, not drawn
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// From 8-bit sRGB components.
    pub const fn rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const SKY_BLUE: Self = Self::rgb_u8(0x87, 0xCE, 0xEB);
    pub const TAB_BLUE: Self = Self::rgb_u8(0x1F, 0x77, 0xB4);
}

impl From<Color> for bevy::prelude::Color {
    #[inline]
    fn from(c: Color) -> Self {
        bevy::prelude::Color::srgba(c.r, c.g, c.b, c.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub size: f32,    // line width
    pub opacity: f32, // multiplied into alpha
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 2.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    #[inline]
    pub const fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    #[inline]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Color with opacity folded into alpha.
    pub fn resolved(&self) -> Color {
        self.color.with_a(self.color.a * self.opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry2D {
    Line,
    FillBetween, // fills area between two lines (xy = upper, lower_line = lower)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer2D {
    pub geometry: Geometry2D,
    pub xy: Vec<Vec2>,
    pub style: Style,
    /// For FillBetween geometry: the lower line (xy contains the upper line)
    pub lower_line: Option<Vec<Vec2>>,
    /// Legend entry, if any
    pub label: Option<String>,
}

impl Layer2D {
    pub fn new(geometry: Geometry2D, xy: Vec<Vec2>) -> Self {
        Self {
            geometry,
            xy,
            style: Style::default(),
            lower_line: None,
            label: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LineDash {
    Solid,
    /// Lengths in logical pixels
    Dashed { dash: f32, gap: f32 },
}

impl LineDash {
    pub const DEFAULT_DASHED: Self = Self::Dashed {
        dash: 8.0,
        gap: 5.0,
    };
}

/// Axis-aligned line spanning the whole plot area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    /// x for vertical lines, y for horizontal ones
    pub value: f32,
    pub style: Style,
    pub dash: LineDash,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Chart2D {
    pub meta: PlotMeta,
    pub layers: Vec<Layer2D>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart2D {
    pub fn new() -> Self {
        Self {
            meta: PlotMeta::default(),
            layers: vec![],
            reference_lines: vec![],
            x_label: None,
            y_label: None,
            show_grid: false,
            show_legend: false,
        }
    }

    pub fn with_layer(mut self, layer: Layer2D) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn bounds(&self) -> Option<([f32; 2], [f32; 2])> {
        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        let mut any = false;

        let points = self
            .layers
            .iter()
            .flat_map(|l| l.xy.iter().chain(l.lower_line.iter().flatten()));
        for p in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }
            min[0] = min[0].min(p.x);
            min[1] = min[1].min(p.y);
            max[0] = max[0].max(p.x);
            max[1] = max[1].max(p.y);
            any = true;
        }

        for line in &self.reference_lines {
            if !line.value.is_finite() {
                continue;
            }
            let axis = match line.orientation {
                Orientation::Vertical => 0,
                Orientation::Horizontal => 1,
            };
            min[axis] = min[axis].min(line.value);
            max[axis] = max[axis].max(line.value);
        }

        // A reference line alone cannot span both axes
        (any && min.iter().chain(max.iter()).all(|v| v.is_finite())).then_some((min, max))
    }

    /// Legend entries in draw order.
    pub fn legend_entries(&self) -> Vec<LegendEntry<'_>> {
        let layers = self.layers.iter().filter_map(|l| {
            l.label.as_deref().map(|label| LegendEntry {
                label,
                style: l.style,
                swatch: match l.geometry {
                    Geometry2D::Line => Swatch::Line(LineDash::Solid),
                    Geometry2D::FillBetween => Swatch::Patch,
                },
            })
        });
        let lines = self.reference_lines.iter().filter_map(|r| {
            r.label.as_deref().map(|label| LegendEntry {
                label,
                style: r.style,
                swatch: Swatch::Line(r.dash),
            })
        });
        layers.chain(lines).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Swatch {
    Line(LineDash),
    Patch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub style: Style,
    pub swatch: Swatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f32, f32)]) -> Layer2D {
        Layer2D::new(
            Geometry2D::Line,
            points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        )
    }

    #[test]
    fn bounds_cover_layers_and_lower_lines() {
        let mut fill = line(&[(0.0, 2.0), (1.0, 3.0)]);
        fill.geometry = Geometry2D::FillBetween;
        fill.lower_line = Some(vec![Vec2::new(0.0, -1.0), Vec2::new(1.0, -1.0)]);

        let chart = Chart2D::new()
            .with_layer(line(&[(-2.0, 0.5), (5.0, 0.25)]))
            .with_layer(fill);

        assert_eq!(chart.bounds(), Some(([-2.0, -1.0], [5.0, 3.0])));
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let chart = Chart2D::new().with_layer(line(&[(f32::NAN, 1.0), (1.0, 2.0), (3.0, 0.0)]));
        assert_eq!(chart.bounds(), Some(([1.0, 0.0], [3.0, 2.0])));
    }

    #[test]
    fn bounds_include_reference_lines() {
        let mut chart = Chart2D::new().with_layer(line(&[(0.0, 1.0), (1.0, 2.0)]));
        chart.reference_lines.push(ReferenceLine {
            orientation: Orientation::Vertical,
            value: 4.0,
            style: Style::default(),
            dash: LineDash::Solid,
            label: None,
        });
        chart.reference_lines.push(ReferenceLine {
            orientation: Orientation::Horizontal,
            value: -0.5,
            style: Style::default(),
            dash: LineDash::Solid,
            label: None,
        });
        assert_eq!(chart.bounds(), Some(([0.0, -0.5], [4.0, 2.0])));
    }

    #[test]
    fn empty_chart_has_no_bounds() {
        assert_eq!(Chart2D::new().bounds(), None);
        assert_eq!(Chart2D::new().with_layer(line(&[])).bounds(), None);
    }

    #[test]
    fn style_opacity_folds_into_alpha() {
        let s = Style::default().color(Color::SKY_BLUE).opacity(0.4);
        assert!((s.resolved().a - 0.4).abs() < 1e-6);
        assert_eq!(s.resolved().r, Color::SKY_BLUE.r);
    }
}
