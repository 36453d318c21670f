//! Comment-block extraction.
//!
//! Turns the raw text of one `/*** ... */` block into a [`FunctionRecord`].
//! Free-text lines before the first tag form the description; the first tag
//! closes description accumulation for good.

use crate::diag::Diagnostics;
use crate::model::FunctionRecord;
use crate::parser::field;
use crate::parser::line::{classify, Tag};

/// Marker joining description lines in the output. Two literal characters,
/// not a newline, so descriptions stay single-line in attributes.
const DESC_SEPARATOR: &str = "\\n";

/// Extract one record from a block's raw text. The module is left unset;
/// the scanner attaches it when the block closes.
pub fn extract(comment: &str, diag: &dyn Diagnostics) -> FunctionRecord {
    let mut record = FunctionRecord::default();
    let mut description: Vec<&str> = Vec::new();
    let mut in_description = true;

    for raw in comment.lines() {
        let line = raw.trim_start();

        match classify(line) {
            Some(Tag::Function(name)) => {
                in_description = false;
                record.name = name.to_string();
            }
            Some(Tag::Param(payload)) => {
                in_description = false;
                record.params.push(field::parse(payload, diag));
            }
            Some(Tag::Return(payload)) => {
                in_description = false;
                record.returns.push(field::parse(payload, diag));
            }
            // The scanner consumes @module lines before buffering; one
            // slipping through still counts as a tag.
            Some(Tag::Module(_)) => {
                in_description = false;
            }
            None => {
                if line.is_empty() || !in_description {
                    continue;
                }
                description.push(line);
            }
        }
    }

    if !description.is_empty() {
        record.description = Some(description.join(DESC_SEPARATOR));
    }

    record
}
