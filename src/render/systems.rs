use super::*;
use bevy::log::{debug, info};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub fn log_chart_summary(chart: Res<ChartRes>) {
    let meta = &chart.chart.meta;
    info!(
        "showing {:?}: {} layers, {} reference lines, x in [{}, {}]",
        meta.title.as_deref().unwrap_or("untitled chart"),
        chart.chart.layers.len(),
        chart.chart.reference_lines.len(),
        chart.view.min.x,
        chart.view.max.x
    );
    if let Some(description) = &meta.description {
        info!("{}", description);
    }
}

/// Recompute the plot rect when the window size changes
pub fn update_chart_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<ChartLayout>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let size = Vec2::new(window.width(), window.height());
    if size == layout.window_size || size.x <= 0.0 || size.y <= 0.0 {
        return;
    }

    let rect = PlotRect::from_window(size);
    debug!(
        "layout {}x{}: plot area {:?}..{:?}",
        size.x, size.y, rect.plot.min, rect.plot.max
    );

    layout.window_size = size;
    layout.rect = Some(rect);
    layout.dirty = true;
}

/// Redraw the chart after a layout change
pub fn draw_dirty_chart(
    mut commands: Commands,
    mut layout: ResMut<ChartLayout>,
    roots: Query<Entity, With<ChartRenderRoot>>,
    chart: Res<ChartRes>,
    unit: Res<UnitMeshes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !layout.dirty {
        return;
    }
    layout.dirty = false;

    let Some(rect) = layout.rect else {
        return;
    };

    // Despawning the root removes its descendants
    for root in roots.iter() {
        commands.entity(root).try_despawn();
    }

    let root = commands
        .spawn((ChartRenderRoot, Transform::default(), Visibility::default()))
        .id();

    draw_chart(
        &mut commands,
        root,
        &chart,
        &rect,
        &unit,
        &mut meshes,
        &mut materials,
    );

    debug!(
        "drew {} layers, {} reference lines",
        chart.chart.layers.len(),
        chart.chart.reference_lines.len()
    );
}
