mod generator;
mod round_robin;
mod week_offsets;

pub use generator::*;
pub use round_robin::*;
pub use week_offsets::*;
