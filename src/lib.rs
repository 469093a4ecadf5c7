pub mod api;
pub mod cli;
pub mod config;
pub mod format;
pub mod global;
pub mod text_io;
