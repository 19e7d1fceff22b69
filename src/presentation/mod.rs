// Presentation layer - CLI and terminal output
pub mod cli;
pub mod terminal;
