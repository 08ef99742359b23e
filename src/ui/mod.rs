//! Terminal UI: event loop, input handling, and rendering.

mod help;
mod input;
mod list;
mod loop_runner;
mod render;
mod status;

pub use loop_runner::run;
