use super::components::{PlotRect, PlotView};
use crate::chart::WindowSpec;
use crate::core::{Chart2D, Color};
use bevy::prelude::*;

#[derive(Resource, Clone)]
pub struct ChartRes {
    pub chart: Chart2D,
    pub window: WindowSpec,
    pub view: PlotView,
}

impl ChartRes {
    pub fn new(chart: Chart2D, window: WindowSpec) -> Self {
        let view = chart
            .bounds()
            .map(|(min, max)| PlotView::fit(min, max))
            .unwrap_or_default();
        Self {
            chart,
            window,
            view,
        }
    }

    /// Text and frame color readable on the window background.
    pub fn ink(&self) -> Color {
        ink_for(self.window.background)
    }
}

pub fn ink_for(background: Color) -> Color {
    let luma = 0.2126 * background.r + 0.7152 * background.g + 0.0722 * background.b;
    if luma > 0.5 {
        Color::rgb(0.1, 0.1, 0.12)
    } else {
        Color::rgb(0.9, 0.9, 0.92)
    }
}

#[derive(Resource, Default)]
pub struct ChartLayout {
    pub window_size: Vec2,
    pub rect: Option<PlotRect>,
    pub dirty: bool,
}

#[derive(Resource)]
pub struct UnitMeshes {
    pub quad: Handle<Mesh>,
}

pub fn setup_chart_camera(mut commands: Commands) {
    commands.spawn((Camera2d, super::components::ChartCamera));
}

pub fn setup_unit_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let quad = meshes.add(Mesh::from(Rectangle::new(1.0, 1.0)));
    commands.insert_resource(UnitMeshes { quad });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_contrasts_with_background() {
        assert!(ink_for(Color::WHITE).r < 0.5);
        assert!(ink_for(Color::BLACK).r > 0.5);
    }

    #[test]
    fn view_fits_chart_bounds() {
        let chart = Chart2D::new().with_layer(crate::core::Layer2D::new(
            crate::core::Geometry2D::Line,
            vec![Vec2::new(-1.0, 0.0), Vec2::new(1.0, 2.0)],
        ));
        let res = ChartRes::new(chart, WindowSpec::default());
        assert_eq!(res.view.min.y, 0.0);
        assert!((res.view.min.x + 1.1).abs() < 1e-5);
    }

    #[test]
    fn empty_chart_uses_unit_view() {
        let res = ChartRes::new(Chart2D::new(), WindowSpec::default());
        assert_eq!(res.view, PlotView::default());
    }
}
