#![allow(clippy::too_many_arguments)]

use super::common::text_width;
use super::layers::draw_dashed_segment;
use crate::core::{LegendEntry, LineDash, Swatch};
use crate::render::{PlotRect, UnitMeshes};
use bevy::prelude::*;

const FONT_SIZE: f32 = 12.0;
const ROW_HEIGHT: f32 = 20.0;
const SWATCH_WIDTH: f32 = 28.0;
const PADDING: f32 = 8.0;
const INSET: f32 = 10.0;
const Z: f32 = 4.0;

/// Legend box size for `entries`.
pub fn legend_size(entries: &[LegendEntry<'_>]) -> Vec2 {
    let text = entries
        .iter()
        .map(|e| text_width(e.label, FONT_SIZE))
        .fold(0.0, f32::max);
    Vec2::new(
        PADDING * 3.0 + SWATCH_WIDTH + text,
        PADDING * 2.0 + ROW_HEIGHT * entries.len() as f32,
    )
}

/// Legend anchored in the upper-right corner of the plot area.
pub fn legend_rect(entries: &[LegendEntry<'_>], rect: &PlotRect) -> Rect {
    let size = legend_size(entries);
    let max = rect.plot.max - Vec2::splat(INSET);
    Rect::from_corners(max - size, max)
}

pub fn draw_legend(
    commands: &mut Commands,
    root: Entity,
    entries: &[LegendEntry<'_>],
    rect: &PlotRect,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    background: Color,
    ink: Color,
) {
    if entries.is_empty() {
        return;
    }

    let frame = legend_rect(entries, rect);
    let box_mat = materials.add(ColorMaterial::from(background.with_alpha(0.85)));
    let border_mat = materials.add(ColorMaterial::from(ink.with_alpha(0.3)));

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh2d(unit.quad.clone()),
            MeshMaterial2d(border_mat),
            Transform {
                translation: frame.center().extend(Z),
                scale: (frame.size() + Vec2::splat(2.0)).extend(1.0),
                ..default()
            },
        ));
        parent.spawn((
            Mesh2d(unit.quad.clone()),
            MeshMaterial2d(box_mat),
            Transform {
                translation: frame.center().extend(Z + 0.01),
                scale: frame.size().extend(1.0),
                ..default()
            },
        ));
    });

    for (i, entry) in entries.iter().enumerate() {
        let y = frame.max.y - PADDING - ROW_HEIGHT * (i as f32 + 0.5);
        let swatch_start = Vec2::new(frame.min.x + PADDING, y);
        let swatch_end = swatch_start + Vec2::new(SWATCH_WIDTH, 0.0);
        let mat = materials.add(ColorMaterial::from(Color::from(entry.style.resolved())));

        match entry.swatch {
            Swatch::Line(dash) => {
                // shorter dashes so the pattern shows inside the swatch
                let dash = match dash {
                    LineDash::Dashed { dash, gap } => LineDash::Dashed {
                        dash: dash.min(6.0),
                        gap: gap.min(4.0),
                    },
                    LineDash::Solid => LineDash::Solid,
                };
                draw_dashed_segment(
                    commands,
                    root,
                    swatch_start,
                    swatch_end,
                    dash,
                    entry.style.size.max(1.5),
                    Z + 0.1,
                    unit,
                    &mat,
                );
            }
            Swatch::Patch => {
                commands.entity(root).with_children(|parent| {
                    parent.spawn((
                        Mesh2d(unit.quad.clone()),
                        MeshMaterial2d(mat),
                        Transform {
                            translation: ((swatch_start + swatch_end) * 0.5).extend(Z + 0.1),
                            scale: Vec3::new(SWATCH_WIDTH, ROW_HEIGHT * 0.6, 1.0),
                            ..default()
                        },
                    ));
                });
            }
        }

        let text_x = swatch_end.x + PADDING + text_width(entry.label, FONT_SIZE) * 0.5;
        commands.entity(root).with_children(|parent| {
            parent.spawn((
                Text2d::new(entry.label),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(ink),
                Transform::from_translation(Vec3::new(text_x, y, Z + 0.2)),
            ));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Style;

    fn entry(label: &str) -> LegendEntry<'_> {
        LegendEntry {
            label,
            style: Style::default(),
            swatch: Swatch::Patch,
        }
    }

    #[test]
    fn legend_grows_with_rows_and_text() {
        let one = [entry("Z = 1.25")];
        let three = [
            entry("Z = 1.25"),
            entry("P(Z < 1.25)"),
            entry("Standard Normal Distribution"),
        ];
        let a = legend_size(&one);
        let b = legend_size(&three);
        assert!(b.y > a.y);
        assert!(b.x > a.x);
        assert_eq!(b.y, PADDING * 2.0 + ROW_HEIGHT * 3.0);
    }

    #[test]
    fn legend_sits_inside_upper_right() {
        let rect = PlotRect::from_window(Vec2::new(1000.0, 600.0));
        let frame = legend_rect(&[entry("P(Z < 1.25)")], &rect);
        assert_eq!(frame.max, rect.plot.max - Vec2::splat(INSET));
        assert!(frame.min.x > rect.plot.min.x);
        assert!(frame.min.y > rect.plot.min.y);
    }
}
