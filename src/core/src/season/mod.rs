mod calendar;
mod season;

pub use calendar::*;
pub use season::*;
