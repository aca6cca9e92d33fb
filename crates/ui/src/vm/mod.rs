mod game_vm;
mod time_fmt;

pub use game_vm::{GameIntent, GameVm};
pub use time_fmt::format_elapsed;
