/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The per-session record of the last result (session.rs)
/// - Wiring user input to the filter engine and session (controller.rs)

pub mod controller;
pub mod data;
pub mod session;
