// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod progress;

pub mod catalog;
pub mod pick;
pub mod query;
pub mod shell;

pub mod extract;
pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
