//! Interactive terminal shell around a chat `Session`.

mod commands;
mod export;
mod render;
mod repl;

pub use repl::Shell;
