use serde::{Deserialize, Serialize};

/// Process-wide conversion defaults. Per-declaration settings are OR-ed on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Keep `param` blocks naming parameters the declaration does not have
    pub keep_unknown_params: bool,

    /// Never translate; only frame the raw comment with continuation markers
    pub verbatim: bool,
}
