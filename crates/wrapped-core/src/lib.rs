#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod input;
pub mod meter;
pub mod render;
pub mod slides;
pub mod stats;
pub mod text_policy;
