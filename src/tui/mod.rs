pub mod input;
pub mod screen;
pub mod session;
