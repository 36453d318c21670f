//! Line classifier for documentation tags.
//!
//! A tag marker is recognized anywhere in the line, not just at the start.
//! The payload is everything after the marker with a single following space
//! delimiter skipped, so `@param x: int value` yields `x: int value`.

use regex::Regex;
use std::sync::LazyLock;

static RE_MODULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@module ?(.*)").unwrap());

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@function ?(.*)").unwrap());

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@param ?(.*)").unwrap());

static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@return ?(.*)").unwrap());

/// A recognized tag line, holding the payload after the marker.
#[derive(Debug, PartialEq, Eq)]
pub enum Tag<'a> {
    Module(&'a str),
    Function(&'a str),
    Param(&'a str),
    Return(&'a str),
}

/// Classify one line. Returns `None` for plain text.
///
/// `@module` is checked first so the scanner can consume it in any state;
/// the remaining markers follow the extraction order of the block parser.
pub fn classify(line: &str) -> Option<Tag<'_>> {
    if let Some(caps) = RE_MODULE.captures(line) {
        return Some(Tag::Module(caps.get(1).unwrap().as_str()));
    }
    if let Some(caps) = RE_FUNCTION.captures(line) {
        return Some(Tag::Function(caps.get(1).unwrap().as_str()));
    }
    if let Some(caps) = RE_PARAM.captures(line) {
        return Some(Tag::Param(caps.get(1).unwrap().as_str()));
    }
    if let Some(caps) = RE_RETURN.captures(line) {
        return Some(Tag::Return(caps.get(1).unwrap().as_str()));
    }
    None
}
