// Shared modules for the block ordering checker
pub mod l1;
pub mod shared;
pub mod utils;
