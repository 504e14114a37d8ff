pub mod config;
pub mod display;
pub mod error;
pub mod food;
pub mod font;
pub mod game;
pub mod input;
pub mod snake;
pub mod terminal_runtime;
