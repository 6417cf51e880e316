mod fixture;
mod result;
mod simulator;

pub use fixture::*;
pub use result::*;
pub use simulator::*;
