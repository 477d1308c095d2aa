// src/gui/components/mod.rs
pub mod assistant;
pub mod data_table;
pub mod sort_bar;
pub mod toolbar;
