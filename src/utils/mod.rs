// src/utils/mod.rs

pub mod basic_auth;
pub mod credentials;
