// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod specs;

pub mod clean;
pub mod csv;
pub mod join;
pub mod map_data;
pub mod render;
pub mod stats;

pub mod cli;
pub mod file;
pub mod gui;
pub mod pipeline;
pub mod progress;
