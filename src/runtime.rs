use bevy::prelude::*;
use error_stack::Report;

use crate::ZPlotError;
use crate::chart::WindowSpec;
use crate::core::Chart2D;
use crate::render::{ChartRenderPlugin, ChartRes};

/// Open a window showing `chart` and block until it is closed.
pub fn run_chart(chart: Chart2D, window: WindowSpec) -> crate::Result<()> {
    let bg = window.background;
    let title = chart
        .meta
        .title
        .clone()
        .unwrap_or_else(|| "zplot".to_string());
    let resolution = (window.width, window.height);

    let exit = App::new()
        .insert_resource(ClearColor(Color::srgb(bg.r, bg.g, bg.b)))
        .insert_resource(ChartRes::new(chart, window))
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title,
                    resolution: resolution.into(),
                    ..default()
                }),
                ..default()
            }),
            ChartRenderPlugin,
        ))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(Report::new(ZPlotError)
            .attach("chart window exited with an error")
            .attach(format!("exit code: {}", code))),
    }
}
