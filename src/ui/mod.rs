//! Live terminal table for interactive mode.
mod input;
pub mod model;
pub mod render;


pub use model::{TableLayout, TableRow, UiEvent, UiRenderData};
pub use render::{Dashboard, RenderState, TICK_PERIOD, drive, run_dashboard};
