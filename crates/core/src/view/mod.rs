//! View module
//!
//! Selection state and the pure projection from tasks to what is rendered.

mod model;
mod projection;

pub use model::*;
pub use projection::*;
