//! Tabular view library
//!
//! Pure data-shaping for tabular client data: filtering, sorting and
//! pagination of records, plus a reducer that turns user changes into new
//! view parameters.

pub mod change;
pub mod error;
pub mod model;
pub mod view;

mod params;

pub use params::*;
