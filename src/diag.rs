//! Diagnostic sink consumed by the parser.
//!
//! The parser reports recoverable oddities (malformed tag payloads) through
//! this trait and never decides where they go; the binary wires up stderr.

pub trait Diagnostics {
    fn emit(&self, message: &str);
}

/// Prints each diagnostic to stderr as a warning.
pub struct Stderr;

impl Diagnostics for Stderr {
    fn emit(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

/// Discards all diagnostics.
#[cfg(test)]
pub struct Silent;

#[cfg(test)]
impl Diagnostics for Silent {
    fn emit(&self, _message: &str) {}
}
