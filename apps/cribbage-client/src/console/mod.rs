pub mod commands;
pub mod render;

pub use commands::{parse_command, Command, HELP};
pub use render::{render_error, render_notice, render_prompt, render_table, RenderOptions};
