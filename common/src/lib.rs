pub mod config;
pub mod maze;
