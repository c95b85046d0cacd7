//! Framed console output
//!
//! Every response is printed between two separator rules with each line
//! indented.

use colored::Colorize;
use std::io::{self, Write};

use crate::error::GordonError;

/// Rule printed above and below each response
pub const SEPARATOR: &str =
    "    ___________________________________________________________________________________";

/// Prefix for every message line
pub const INDENTATION: &str = "     ";

const BANNER: [&str; 8] = [
    r"    _____                                   _____               _              ",
    r"   / ____|                                 / ____|             | |             ",
    r"  | |  __ _ __ _   _ _ __ ___  _ __  _   _| |  __  ___  _ __ __| | ___  _ __   ",
    r"  | | |_ | '__| | | | '_ ` _ \| '_ \| | | | | |_ |/ _ \| '__/ _` |/ _ \| '_ \  ",
    r"  | |__| | |  | |_| | | | | | | |_) | |_| | |__| | (_) | | | (_| | (_) | | | | ",
    r"   \_____|_|   \__,_|_| |_| |_| .__/ \__, |\_____|\___/|_|  \__,_|\___/|_| |_| ",
    r"                              | |     __/ |                                    ",
    r"                              |_|    |___/                                     ",
];

pub const INTRO: &str = "Oi! I'm Grumpy Gordon. Why are you bothering me?";

pub const OUTRO: &str = "Bye. Hope to never see you again.";

/// Writes framed responses to any writer (stdout in the binary, a buffer in tests)
pub struct Ui<W: Write> {
    writer: W,
    color: bool,
}

impl Ui<io::Stdout> {
    /// Ui on standard output
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Ui<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Banner and greeting shown once at startup
    pub fn show_intro(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", SEPARATOR)?;
        for line in BANNER {
            writeln!(self.writer, "{}{}", INDENTATION, line)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}{}", INDENTATION, INTRO)?;
        writeln!(self.writer, "{}", SEPARATOR)?;
        self.writer.flush()
    }

    /// Farewell shown when the session ends with `bye`
    pub fn show_outro(&mut self) -> io::Result<()> {
        self.show_command_message(OUTRO)
    }

    /// Show a recoverable error
    pub fn show_error(&mut self, err: &GordonError) -> io::Result<()> {
        let message = err.to_string();
        if self.color {
            self.framed(&message.red().to_string())
        } else {
            self.framed(&message)
        }
    }

    /// Show the result of a command; multi-line messages are indented line by line
    pub fn show_command_message(&mut self, message: &str) -> io::Result<()> {
        self.framed(message)
    }

    fn framed(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", SEPARATOR)?;
        for line in message.lines() {
            writeln!(self.writer, "{}{}", INDENTATION, line)?;
        }
        writeln!(self.writer, "{}", SEPARATOR)?;
        self.writer.flush()
    }
}
