pub mod input;
pub mod platform;
pub mod render;
pub mod storage;
