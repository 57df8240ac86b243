//! Output sinks for `print`
//!
//! The interpreter never writes to the process directly; every printed line
//! goes through an [`Output`] supplied at construction.

use std::io::Write;

/// Destination for printed lines. Printing cannot fail.
pub trait Output {
    /// Emit one line of program output (without a trailing newline)
    fn print(&mut self, text: &str);
}

/// Writes each line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn print(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout is not a program error
        let _ = writeln!(out, "{}", text);
    }
}

/// Records printed lines in memory
impl Output for Vec<String> {
    fn print(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn print(&mut self, text: &str) {
        (**self).print(text);
    }
}
