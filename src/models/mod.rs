// src/models/mod.rs

pub mod draft;
pub mod quiz;
pub mod result;
