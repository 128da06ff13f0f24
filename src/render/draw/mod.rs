//! Drawing functions for the chart.
//!
//! - `common`: frame, title, axis labels, grid and ticks
//! - `layers`: lines, fills and reference lines
//! - `legend`: legend box

#![allow(clippy::too_many_arguments)]

mod common;
mod layers;
mod legend;

pub use common::{
    dash_spans, draw_axis_labels, draw_frame, draw_grid_and_ticks, draw_title, format_tick,
    nice_step, segment_transform, text_width, tick_values,
};
pub use layers::{
    draw_dashed_segment, draw_layers, draw_reference_lines, fill_between_geometry,
    reference_line_ends,
};
pub use legend::{draw_legend, legend_rect, legend_size};

use crate::render::{ChartRes, PlotRect, UnitMeshes};
use bevy::prelude::*;

/// Draw the whole chart under `root`.
pub fn draw_chart(
    commands: &mut Commands,
    root: Entity,
    res: &ChartRes,
    rect: &PlotRect,
    unit: &UnitMeshes,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    let chart = &res.chart;
    let view = &res.view;
    let ink: Color = res.ink().into();
    let background: Color = res.window.background.into();

    draw_grid_and_ticks(
        commands,
        root,
        rect,
        view,
        chart.show_grid,
        unit,
        materials,
        ink,
    );
    draw_layers(
        commands,
        root,
        &chart.layers,
        rect,
        view,
        unit,
        meshes,
        materials,
    );
    draw_reference_lines(
        commands,
        root,
        &chart.reference_lines,
        rect,
        view,
        unit,
        materials,
    );
    draw_frame(commands, root, rect, unit, materials, ink, 0.8);
    draw_title(commands, root, &chart.meta, rect, ink);
    draw_axis_labels(
        commands,
        root,
        chart.x_label.as_deref(),
        chart.y_label.as_deref(),
        rect,
        ink,
    );

    if chart.show_legend {
        draw_legend(
            commands,
            root,
            &chart.legend_entries(),
            rect,
            unit,
            materials,
            background,
            ink,
        );
    }
}
