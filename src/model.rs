//! Data model for extracted documentation, independent of input syntax
//! and output format.

/// One parameter or return value parsed from a `@param`/`@return` payload.
///
/// A field with an empty `name` is malformed and is filtered out at
/// assembly time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    pub description: Option<String>,
    /// Set by the `<opt>` name prefix; only meaningful for parameters.
    pub optional: bool,
}

/// A single documented function, built up while scanning one comment block.
///
/// `name` stays empty until a `@function` tag is seen or the scanner infers
/// it from the following declaration; records still unnamed at assembly
/// time are dropped. `module` is attached by the scanner when the block
/// closes.
#[derive(Debug, Default)]
pub struct FunctionRecord {
    pub module: String,
    pub name: String,
    /// Description lines joined by a literal `\n` marker (two characters),
    /// no trailing marker.
    pub description: Option<String>,
    pub params: Vec<Field>,
    pub returns: Vec<Field>,
}
