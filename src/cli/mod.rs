//! CLI entrypoint module structure.

pub mod args;

pub use args::{AutoStartArg, LauncherArgs};
