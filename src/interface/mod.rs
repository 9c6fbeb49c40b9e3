pub mod prompts;
pub mod render;
pub mod surface;

pub use prompts::{prompt_ingredient, prompt_slot, prompt_yes_no};
pub use render::write_chart;
pub use surface::{ChartHandle, ChartSurface, JsonSurface, TerminalSurface};
