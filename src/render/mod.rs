pub mod components;
pub mod draw;
pub mod resources;
pub mod systems;

pub use components::*;
use draw::*;
pub use resources::*;
use systems::*;

use bevy::prelude::*;

#[derive(Default)]
pub struct ChartRenderPlugin;

impl Plugin for ChartRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChartLayout>()
            .add_systems(Startup, (setup_chart_camera, setup_unit_meshes, log_chart_summary))
            .add_systems(Update, (update_chart_layout, draw_dirty_chart).chain());
    }
}
