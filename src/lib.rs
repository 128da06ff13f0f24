pub mod chart;
pub mod config;
pub mod core;
pub mod normal;
pub mod render;
pub mod runtime;
pub mod zscore;

use std::fmt;

#[derive(Debug)]
pub struct ZPlotError;

impl fmt::Display for ZPlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZPlotError")
    }
}

impl std::error::Error for ZPlotError {}

pub type Result<T> = std::result::Result<T, error_stack::Report<ZPlotError>>;

pub mod prelude {
    pub use crate::chart::*;
    pub use crate::config::*;
    pub use crate::core::*;
    pub use crate::normal::*;
    pub use crate::render::ChartRenderPlugin;
    pub use crate::runtime::*;
    pub use crate::zscore::*;
}
