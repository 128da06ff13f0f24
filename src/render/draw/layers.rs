//! Data layers: density lines, filled regions and reference lines.

#![allow(clippy::too_many_arguments)]

use super::common::{dash_spans, segment_transform};
use crate::core::{Geometry2D, Layer2D, LineDash, Orientation, ReferenceLine};
use crate::render::{PlotRect, PlotView, UnitMeshes, data_to_world};
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

const Z_FILL: f32 = 0.2;
const Z_LINE: f32 = 0.4;
const Z_REFERENCE: f32 = 0.5;

/// Draw every layer in order, fills beneath lines.
pub fn draw_layers(
    commands: &mut Commands,
    root: Entity,
    layers: &[Layer2D],
    rect: &PlotRect,
    view: &PlotView,
    unit: &UnitMeshes,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    for layer in layers {
        let mat = materials.add(ColorMaterial::from(Color::from(layer.style.resolved())));

        match layer.geometry {
            Geometry2D::Line => {
                draw_line_layer(commands, root, layer, rect, view, unit, &mat);
            }
            Geometry2D::FillBetween => {
                draw_fill_between_layer(commands, root, layer, rect, view, meshes, &mat);
            }
        }
    }
}

fn draw_line_layer(
    commands: &mut Commands,
    root: Entity,
    layer: &Layer2D,
    rect: &PlotRect,
    view: &PlotView,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
) {
    if layer.xy.len() < 2 {
        return;
    }

    let bounds_min = rect.plot.min;
    let bounds_max = rect.plot.max;

    commands.entity(root).with_children(|parent| {
        for window in layer.xy.windows(2) {
            let a = data_to_world(window[0], rect, view);
            let b = data_to_world(window[1], rect, view);

            // Skip line segments entirely outside the plot area
            if (a.x < bounds_min.x && b.x < bounds_min.x)
                || (a.x > bounds_max.x && b.x > bounds_max.x)
                || (a.y < bounds_min.y && b.y < bounds_min.y)
                || (a.y > bounds_max.y && b.y > bounds_max.y)
            {
                continue;
            }

            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat.clone()),
                segment_transform(a, b, layer.style.size, Z_LINE),
            ));
        }
    });
}

/// Triangle strip between the upper and lower lines, as flat vertex and
/// index buffers in world space.
pub fn fill_between_geometry(
    upper: &[Vec2],
    lower: &[Vec2],
    rect: &PlotRect,
    view: &PlotView,
) -> Option<(Vec<[f32; 3]>, Vec<u32>)> {
    let n = upper.len().min(lower.len());
    if n < 2 {
        return None;
    }

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n * 2);
    let mut indices: Vec<u32> = Vec::with_capacity((n - 1) * 6);

    // Upper points first, then lower points
    for p in &upper[..n] {
        let w = data_to_world(*p, rect, view);
        positions.push([w.x, w.y, 0.0]);
    }
    for p in &lower[..n] {
        let w = data_to_world(*p, rect, view);
        positions.push([w.x, w.y, 0.0]);
    }

    for i in 0..(n - 1) {
        let u0 = i as u32;
        let u1 = (i + 1) as u32;
        let l0 = (n + i) as u32;
        let l1 = (n + i + 1) as u32;

        // CCW winding
        indices.extend_from_slice(&[u0, l1, l0]);
        indices.extend_from_slice(&[u0, u1, l1]);
    }

    Some((positions, indices))
}

fn draw_fill_between_layer(
    commands: &mut Commands,
    root: Entity,
    layer: &Layer2D,
    rect: &PlotRect,
    view: &PlotView,
    meshes: &mut Assets<Mesh>,
    mat: &Handle<ColorMaterial>,
) {
    let Some(lower) = &layer.lower_line else {
        return;
    };
    let Some((positions, indices)) = fill_between_geometry(&layer.xy, lower, rect, view) else {
        return;
    };

    let vertex_count = positions.len();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; vertex_count];
    let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0]; vertex_count];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    let fill_mesh = meshes.add(mesh);

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh2d(fill_mesh),
            MeshMaterial2d(mat.clone()),
            Transform::from_translation(Vec3::new(0.0, 0.0, Z_FILL)),
        ));
    });
}

/// World-space end points of a reference line across the plot area, or
/// `None` when its value lies outside the view.
pub fn reference_line_ends(
    line: &ReferenceLine,
    rect: &PlotRect,
    view: &PlotView,
) -> Option<(Vec2, Vec2)> {
    let v = line.value;
    match line.orientation {
        Orientation::Vertical => {
            if v < view.min.x || v > view.max.x {
                return None;
            }
            let x = data_to_world(Vec2::new(v, view.min.y), rect, view).x;
            Some((Vec2::new(x, rect.plot.min.y), Vec2::new(x, rect.plot.max.y)))
        }
        Orientation::Horizontal => {
            if v < view.min.y || v > view.max.y {
                return None;
            }
            let y = data_to_world(Vec2::new(view.min.x, v), rect, view).y;
            Some((Vec2::new(rect.plot.min.x, y), Vec2::new(rect.plot.max.x, y)))
        }
    }
}

pub fn draw_reference_lines(
    commands: &mut Commands,
    root: Entity,
    lines: &[ReferenceLine],
    rect: &PlotRect,
    view: &PlotView,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
) {
    for line in lines {
        let Some((start, end)) = reference_line_ends(line, rect, view) else {
            continue;
        };
        let mat = materials.add(ColorMaterial::from(Color::from(line.style.resolved())));
        draw_dashed_segment(
            commands,
            root,
            start,
            end,
            line.dash,
            line.style.size,
            Z_REFERENCE,
            unit,
            &mat,
        );
    }
}

/// Straight segment from `start` to `end`, broken into dashes if requested.
pub fn draw_dashed_segment(
    commands: &mut Commands,
    root: Entity,
    start: Vec2,
    end: Vec2,
    dash: LineDash,
    width: f32,
    z: f32,
    unit: &UnitMeshes,
    mat: &Handle<ColorMaterial>,
) {
    let length = start.distance(end);
    if length <= 0.0 {
        return;
    }
    let dir = (end - start) / length;

    let spans = match dash {
        LineDash::Solid => vec![(0.0, length)],
        LineDash::Dashed { dash, gap } => dash_spans(0.0, length, dash, gap),
    };

    commands.entity(root).with_children(|parent| {
        for (s, e) in spans {
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat.clone()),
                segment_transform(start + dir * s, start + dir * e, width, z),
            ));
        }
    });
}
