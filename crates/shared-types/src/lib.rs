pub mod error;

// Dashboard configuration
pub mod config;

// To-do domain
pub mod board;
pub mod duration;
pub mod progress;
pub mod todo;

pub use error::*;

pub use board::*;
pub use config::*;
pub use duration::*;
pub use progress::*;
pub use todo::*;
