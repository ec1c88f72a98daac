//! Core game logic for two-board infrared Pong.
//!
//! Each board shows a 5x7 slice of the court: its own paddle on column 4 and
//! the shared border on column 0. The ball lives on exactly one board at a
//! time and is handed over the IR link when it leaves through the border.

pub mod board;
pub mod components;
pub mod config;
pub mod fsm;
pub mod hal;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod session;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;
pub use session::*;
pub use systems::*;
