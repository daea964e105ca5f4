// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
#[macro_use]
pub mod log;

pub mod cache;
pub mod directory;
pub mod filter;
pub mod geocode;
pub mod gui;
pub mod model;
pub mod progress;
