mod engine;
mod settings;
mod snapshot;
mod state;

pub use engine::*;
pub use settings::*;
pub use snapshot::*;
pub use state::*;
