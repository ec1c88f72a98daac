pub mod collision;
pub mod handoff;
pub mod movement;

pub use collision::*;
pub use handoff::*;
pub use movement::*;
