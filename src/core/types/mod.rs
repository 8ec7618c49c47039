pub mod config;
mod error;
mod finding;
mod kind;
mod noise;
mod summary;

pub use error::*;
pub use finding::*;
pub use kind::*;
pub use noise::*;
pub use summary::*;
