//! Drawing utilities shared by the chart parts: frame, title, axes, grid.

#![allow(clippy::too_many_arguments)]

use crate::render::{PlotRect, PlotView, UnitMeshes, data_to_world};
use bevy::prelude::*;

pub const TITLE_FONT_SIZE: f32 = 18.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const TICK_FONT_SIZE: f32 = 11.0;

/// Rough width of `text` rendered at `font_size` with the default font.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.55
}

/// Transform of a unit quad stretched into the segment `a`–`b`.
pub fn segment_transform(a: Vec2, b: Vec2, width: f32, z: f32) -> Transform {
    let length = a.distance(b);
    let angle = (b.y - a.y).atan2(b.x - a.x);
    Transform {
        translation: ((a + b) * 0.5).extend(z),
        rotation: Quat::from_rotation_z(angle),
        scale: Vec3::new(length, width, 1.0),
    }
}

/// Dash intervals along `[start, end]`, the last one cut at `end`.
pub fn dash_spans(start: f32, end: f32, dash: f32, gap: f32) -> Vec<(f32, f32)> {
    if dash <= 0.0 || end <= start {
        return vec![(start, end)];
    }
    let mut spans = Vec::new();
    let mut t = start;
    while t < end {
        spans.push((t, (t + dash).min(end)));
        t += dash + gap.max(0.0);
    }
    spans
}

/// Draw a border around the plot area.
pub fn draw_frame(
    commands: &mut Commands,
    root: Entity,
    rect: &PlotRect,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    color: Color,
    z: f32,
) {
    let border_mat = materials.add(ColorMaterial::from(color));
    let border_thickness = 1.0;
    let center = rect.plot.center();
    let size = rect.plot.size();

    commands.entity(root).with_children(|parent| {
        for (dx, dy) in [(0.0, 0.5), (0.0, -0.5), (-0.5, 0.0), (0.5, 0.0)] {
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(border_mat.clone()),
                Transform {
                    translation: Vec3::new(center.x + dx * size.x, center.y + dy * size.y, z),
                    scale: if dx == 0.0 {
                        Vec3::new(size.x + border_thickness, border_thickness, 1.0)
                    } else {
                        Vec3::new(border_thickness, size.y + border_thickness, 1.0)
                    },
                    ..default()
                },
            ));
        }
    });
}

/// Draw the chart title centered above the plot area.
pub fn draw_title(
    commands: &mut Commands,
    root: Entity,
    meta: &crate::core::PlotMeta,
    rect: &PlotRect,
    ink: Color,
) {
    let Some(title) = &meta.title else {
        return;
    };

    let title_y = rect.plot.max.y + (rect.window.max.y - rect.plot.max.y) * 0.5;

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Text2d::new(title.clone()),
            TextFont {
                font_size: TITLE_FONT_SIZE,
                ..default()
            },
            TextColor(ink),
            Transform::from_translation(Vec3::new(rect.plot.center().x, title_y, 3.0)),
        ));
    });
}

/// Draw the x label under the tick labels and the y label rotated on the left.
pub fn draw_axis_labels(
    commands: &mut Commands,
    root: Entity,
    x_label: Option<&str>,
    y_label: Option<&str>,
    rect: &PlotRect,
    ink: Color,
) {
    commands.entity(root).with_children(|parent| {
        if let Some(x_label) = x_label {
            parent.spawn((
                Text2d::new(x_label),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(ink),
                Transform::from_translation(Vec3::new(
                    rect.plot.center().x,
                    rect.window.min.y + 18.0,
                    2.0,
                )),
            ));
        }

        if let Some(y_label) = y_label {
            parent.spawn((
                Text2d::new(y_label),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(ink),
                Transform {
                    translation: Vec3::new(rect.window.min.x + 18.0, rect.plot.center().y, 2.0),
                    rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
                    ..default()
                },
            ));
        }
    });
}

/// Calculate nice tick step for given range.
pub fn nice_step(range: f32, target_ticks: usize) -> f32 {
    if range <= 0.0 || !range.is_finite() || target_ticks == 0 {
        return 1.0;
    }
    let rough = range / target_ticks as f32;
    let exp = rough.log10().floor();
    let base = 10f32.powf(exp);

    let normalized = rough / base;
    let nice = if normalized <= 1.5 {
        1.0
    } else if normalized <= 3.0 {
        2.0
    } else if normalized <= 7.0 {
        5.0
    } else {
        10.0
    };

    nice * base
}

/// Multiples of `step` inside `[min, max]`.
pub fn tick_values(min: f32, max: f32, step: f32) -> Vec<f32> {
    if step.is_nan() || step <= 0.0 || !min.is_finite() || !max.is_finite() {
        return vec![];
    }
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end)
        .map(|i| {
            let v = i as f32 * step;
            // avoid "-0"
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Format tick value for display.
pub fn format_tick(val: f32, step: f32) -> String {
    if val == 0.0 {
        return "0".to_string();
    }
    if val.abs() < 0.001 || val.abs() >= 10_000.0 {
        return format!("{:.1e}", val);
    }
    let decimals = if step >= 1.0 {
        0
    } else {
        (-(step.log10() + 1e-4).floor()) as usize
    };
    format!("{:.*}", decimals, val)
}

/// Draw grid lines (optional), tick marks and tick labels on both axes.
pub fn draw_grid_and_ticks(
    commands: &mut Commands,
    root: Entity,
    rect: &PlotRect,
    view: &PlotView,
    show_grid: bool,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    ink: Color,
) {
    let grid_mat = materials.add(ColorMaterial::from(ink.with_alpha(0.15)));
    let tick_mat = materials.add(ColorMaterial::from(ink));
    let tick_length = 5.0;
    let tick_width = 1.0;

    let span = view.span();
    let x_step = nice_step(span.x, 8);
    let y_step = nice_step(span.y, 6);
    let size = rect.plot.size();
    let center = rect.plot.center();

    commands.entity(root).with_children(|parent| {
        for x_data in tick_values(view.min.x, view.max.x, x_step) {
            let x = data_to_world(Vec2::new(x_data, view.min.y), rect, view).x;

            if show_grid {
                parent.spawn((
                    Mesh2d(unit.quad.clone()),
                    MeshMaterial2d(grid_mat.clone()),
                    Transform {
                        translation: Vec3::new(x, center.y, 0.1),
                        scale: Vec3::new(1.0, size.y, 1.0),
                        ..default()
                    },
                ));
            }

            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(tick_mat.clone()),
                Transform {
                    translation: Vec3::new(x, rect.plot.min.y - tick_length * 0.5, 0.8),
                    scale: Vec3::new(tick_width, tick_length, 1.0),
                    ..default()
                },
            ));

            parent.spawn((
                Text2d::new(format_tick(x_data, x_step)),
                TextFont {
                    font_size: TICK_FONT_SIZE,
                    ..default()
                },
                TextColor(ink),
                Transform::from_translation(Vec3::new(
                    x,
                    rect.plot.min.y - tick_length - 10.0,
                    2.0,
                )),
            ));
        }

        for y_data in tick_values(view.min.y, view.max.y, y_step) {
            let y = data_to_world(Vec2::new(view.min.x, y_data), rect, view).y;

            if show_grid {
                parent.spawn((
                    Mesh2d(unit.quad.clone()),
                    MeshMaterial2d(grid_mat.clone()),
                    Transform {
                        translation: Vec3::new(center.x, y, 0.1),
                        scale: Vec3::new(size.x, 1.0, 1.0),
                        ..default()
                    },
                ));
            }

            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(tick_mat.clone()),
                Transform {
                    translation: Vec3::new(rect.plot.min.x - tick_length * 0.5, y, 0.8),
                    scale: Vec3::new(tick_length, tick_width, 1.0),
                    ..default()
                },
            ));

            let label = format_tick(y_data, y_step);
            let half_width = text_width(&label, TICK_FONT_SIZE) * 0.5;
            parent.spawn((
                Text2d::new(label),
                TextFont {
                    font_size: TICK_FONT_SIZE,
                    ..default()
                },
                TextColor(ink),
                Transform::from_translation(Vec3::new(
                    rect.plot.min.x - tick_length - 4.0 - half_width,
                    y,
                    2.0,
                )),
            ));
        }
    });
}
