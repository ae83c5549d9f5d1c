pub mod app;
pub mod config;
pub mod geometry;
pub mod graph;
pub mod input;
pub mod schedule;
