mod generators;
mod loaders;
mod snapshot;

pub use generators::*;
pub use loaders::*;
pub use snapshot::*;
