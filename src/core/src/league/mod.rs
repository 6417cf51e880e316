mod promotion;
pub mod schedule;
mod table;

pub use promotion::*;
pub use schedule::*;
pub use table::*;
