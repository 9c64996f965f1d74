//! Menu front-end that starts Fallout 3 through one of four configured
//! targets: the vanilla launcher, the FOSE loader, Mod Organizer, or a
//! user-defined custom entry.

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod discovery;
pub mod errors;
pub mod launch;
pub mod menu;
pub mod runlog;
pub mod telemetry;
