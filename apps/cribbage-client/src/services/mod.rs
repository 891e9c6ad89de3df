pub mod game_flow;
pub mod session_driver;

pub use game_flow::{Effect, Event, FlowStatus, GameFlow, Notice, Prompt};
pub use session_driver::SessionDriver;
