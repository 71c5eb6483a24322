mod dashboard;
mod frame;
mod lifecycle;
mod theme;

pub use dashboard::{Ui, UiActions};
pub use frame::draw_frame;
pub use lifecycle::{Dashboard, RenderState, TICK_PERIOD, drive, run_dashboard};
