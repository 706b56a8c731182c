pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod input;
pub mod keypad;
pub mod screen;
pub mod session;
