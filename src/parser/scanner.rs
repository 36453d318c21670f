//! Source scanner: walks a header line by line, finds documentation blocks
//! and module directives, and resolves names for unnamed blocks from the
//! declaration that follows them.

use crate::diag::Diagnostics;
use crate::model::FunctionRecord;
use crate::parser::block;
use crate::parser::line::{classify, Tag};

/// Opens a documentation block.
const BLOCK_OPEN: &str = "/***";
/// Closes a documentation block.
const BLOCK_CLOSE: &str = "*/";

enum State {
    Outside,
    InComment,
    /// Holds the index of the stored record still waiting for a name.
    AwaitingName(usize),
}

/// Scan a whole source text into function records.
///
/// Records keep their scan order. Unnamed records are kept here so a later
/// declaration can still resolve them; the assembler drops any that remain
/// unnamed.
pub fn scan(input: &str, diag: &dyn Diagnostics) -> Vec<FunctionRecord> {
    let mut records: Vec<FunctionRecord> = Vec::new();
    let mut state = State::Outside;
    let mut module = String::new();
    let mut buffer = String::new();

    for line in input.lines() {
        // Module directives apply in any state and are consumed here, so
        // they never end up in a block's description text.
        if let Some(Tag::Module(name)) = classify(line) {
            module = name.to_string();
            continue;
        }

        match state {
            State::Outside => {
                if line.contains(BLOCK_OPEN) {
                    state = State::InComment;
                }
            }
            State::InComment => {
                if line.contains(BLOCK_CLOSE) {
                    let mut record = block::extract(&buffer, diag);
                    record.module = module.clone();
                    buffer.clear();

                    let unnamed = record.name.is_empty();
                    records.push(record);
                    state = if unnamed {
                        State::AwaitingName(records.len() - 1)
                    } else {
                        State::Outside
                    };
                } else {
                    buffer.push_str(line);
                    buffer.push('\n');
                }
            }
            State::AwaitingName(index) => {
                if line.contains(BLOCK_OPEN) {
                    // A new block starts before any declaration showed up;
                    // the pending record stays unnamed and gets dropped at
                    // assembly time.
                    state = State::InComment;
                } else if let Some(paren) = line.find('(') {
                    let start = line[..paren].rfind(' ').map_or(0, |i| i + 1);
                    records[index].name = line[start..paren].to_string();
                    state = State::Outside;
                }
            }
        }
    }

    // End of input while inside a block discards the unterminated buffer.
    records
}
