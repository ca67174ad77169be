use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Whitespace-only lines are ignored instead of being parsed as values.
    pub skip_blank_lines: bool,

    /// Accept zero and negative values. Their log10 is `-inf` or `NaN`.
    pub allow_non_positive: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            allow_non_positive: false,
        }
    }
}
