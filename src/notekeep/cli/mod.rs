mod commands;
mod menu;
mod render;
mod setup;
mod styles;

pub use commands::run;
