//! Append-only run log, mirrored to the console on demand.
//!
//! The log is a product artifact the user reads after the fact: one
//! START/END banner pair per run, timestamped lines in between, flushed as
//! they are written.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use chrono::Local;

use crate::console::Console;

pub const LOG_FILE: &str = "FalloutLauncher.log";

const START_BANNER: &str = "================ START ================";
const END_BANNER: &str = "================= END =================";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct RunLog {
    file: File,
}

impl RunLog {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self { file })
    }

    /// Timestamped line, log file only.
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(self.file, "[{stamp}] {message}")
    }

    /// Timestamped line mirrored to the console.
    pub fn write_and_log(&mut self, console: &mut dyn Console, message: &str) -> io::Result<()> {
        console.write_line(message)?;
        self.line(message)
    }

    pub fn start_banner(&mut self, version: &str) -> io::Result<()> {
        self.raw_line(START_BANNER)?;
        self.line(&format!("v{version}"))
    }

    pub fn end_banner(&mut self) -> io::Result<()> {
        self.raw_line(END_BANNER)?;
        self.raw_line("")
    }

    fn raw_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{line}")
    }
}
