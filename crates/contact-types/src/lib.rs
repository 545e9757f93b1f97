pub mod names;
pub mod results;

pub use names::*;
pub use results::*;
