pub mod round;
pub mod serialization;
pub mod store;
