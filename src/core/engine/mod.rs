pub mod generators;
pub mod guard;
pub mod rng;
pub mod traits;
