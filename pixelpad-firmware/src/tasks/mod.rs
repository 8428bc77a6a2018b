//! Embassy async tasks
//!
//! The main task brings up the bus peripherals, spawns the edge handler on
//! the interrupt executor and then runs the update loop itself.

pub mod buttons;
pub mod fatal;
pub mod update;

pub use buttons::buttons_task;
pub use fatal::fatal_task;
pub use update::main_task;
