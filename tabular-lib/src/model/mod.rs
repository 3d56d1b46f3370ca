//! Item and column models

mod column;
mod path;
mod record;
mod value;

pub use column::*;
pub use path::*;
pub use record::*;
pub use value::*;
