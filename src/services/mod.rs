// Tabshell services
// Cross-cutting concerns that are not state managers.

pub mod settings_engine;
