// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod input;

// Primitive wrappers
pub mod avatar;
pub mod checkbox;
pub mod dialog;
pub mod label;
pub mod progress;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use dialog::*;
pub use form::*;
pub use input::*;
pub use label::*;
pub use progress::*;
