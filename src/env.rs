//! Environment classification types
//! The closed set of syntactic contexts a cursor can sit in

/// Syntactic context surrounding a cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKind {
    /// No recognized structure; the whole-line word fallback applies
    Simple,
    /// Array literal `[...]`
    Array,
    /// Object literal `{...}`
    Object,
    /// Function parameter or argument list `(...)`
    FunctionParams,
    /// Generic type-parameter list `<...>`
    TypeParams,
    /// Attribute list of a markup tag `<name ...>`
    TagAttributes,
    /// Boolean expression joined by `&&`/`||`
    Logical,
    /// Union type joined by `|`
    Union,
    /// Class names inside a `class`/`className` attribute value
    ClassList,
}

/// Result of environment detection
///
/// `scope` is an inclusive character range into the original line and never
/// includes the environment's own delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub env: EnvKind,
    pub scope: Option<(usize, usize)>,
}

impl Detection {
    /// Detection without a usable scope (whole-line fallback applies)
    pub fn bare(env: EnvKind) -> Self {
        Detection { env, scope: None }
    }

    pub fn scoped(env: EnvKind, scope: Option<(usize, usize)>) -> Self {
        Detection { env, scope }
    }
}
