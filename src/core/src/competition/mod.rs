mod competition;
mod registrations;

pub use competition::*;
pub use registrations::*;
