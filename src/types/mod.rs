// Tabshell shared type definitions
// Each submodule defines types used across the shell core.

pub mod bookmark;
pub mod download;
pub mod errors;
pub mod settings;
pub mod tab;
