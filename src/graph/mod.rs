pub mod random;
pub mod store;
