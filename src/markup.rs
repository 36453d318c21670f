//! Minimal markup tree: named nodes with ordered attributes and children,
//! rendering themselves as indented XML.

use std::fmt;

/// Indent width per nesting level.
const INDENT: usize = 4;

/// One markup element. Attributes and children keep insertion order.
#[derive(Debug)]
pub struct Node {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: &str) -> Self {
        Node {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Values are escaped at render time.
    pub fn set(&mut self, key: &str, value: &str) {
        self.attrs.push((key.to_string(), value.to_string()));
    }

    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = depth * INDENT;
        write!(f, "{:pad$}<{}", "", self.name)?;
        for (key, value) in &self.attrs {
            write!(f, " {}=\"{}\"", key, escape(value))?;
        }

        if self.children.is_empty() {
            return write!(f, "/>");
        }

        writeln!(f, ">")?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
            writeln!(f)?;
        }
        write!(f, "{:pad$}</{}>", "", self.name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
