//! KF2 Stats - Killing Floor 2 player statistics from the Steam Web API

pub mod app;
pub mod core;
pub mod stats;
pub mod steam;
pub mod ui;
