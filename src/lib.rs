pub mod cell;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod io;
pub mod pattern;
pub mod render;
pub mod rule_set;
pub mod terminal;
pub mod world;
