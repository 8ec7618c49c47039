pub mod average;
pub mod chunks;
pub mod dates;
pub mod dump;
pub mod median;
pub mod numeric;
