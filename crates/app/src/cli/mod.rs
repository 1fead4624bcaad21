pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Doc, Health, Init, Open, Version};
