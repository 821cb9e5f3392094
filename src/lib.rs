//! Core state machine and terminal shell for a wrap-around snake game.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
