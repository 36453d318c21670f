//! Field extraction from `@param`/`@return` payloads.
//!
//! Payload grammar: `[<opt>]name: type description...`. The `<opt>` prefix
//! marks a parameter as optional. Malformed payloads never abort the run;
//! they produce a field with an empty name, which the assembler drops.

use crate::diag::Diagnostics;
use crate::model::Field;

const OPT_PREFIX: &str = "<opt>";

/// Parse one payload into a [`Field`].
///
/// Splits at the first colon, then at the first space of the remainder to
/// separate type from description. A payload with a type but no trailing
/// description keeps the type and leaves the description empty.
pub fn parse(payload: &str, diag: &dyn Diagnostics) -> Field {
    let Some((raw_name, rest)) = payload.split_once(':') else {
        diag.emit(&format!("field payload without ':' separator: {payload:?}"));
        return Field::default();
    };

    let (name, optional) = match raw_name.strip_prefix(OPT_PREFIX) {
        Some(stripped) => (stripped, true),
        None => (raw_name, false),
    };

    // One delimiter space after the colon, when present.
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let (type_name, description) = match rest.split_once(' ') {
        Some((type_name, description)) => (type_name.to_string(), Some(description.to_string())),
        None => (rest.trim().to_string(), None),
    };

    Field {
        name: name.to_string(),
        type_name,
        description: description.filter(|d| !d.is_empty()),
        optional,
    }
}
