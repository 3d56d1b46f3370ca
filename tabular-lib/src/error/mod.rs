//! Error types

mod change;
mod view;

pub use change::*;
pub use view::*;
