pub mod classify;
pub mod describe;
pub mod induce;
pub mod validate;
