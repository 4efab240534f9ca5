use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering mode of a block: authoring form or read-only/interactive display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Edit,
    View,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Edit => "edit",
            Mode::View => "view",
        }
    }

    /// Decode a markup value. Anything other than `view` (including the
    /// legacy `author` default) is treated as `Edit`.
    pub fn from_markup(value: &str) -> Self {
        match value.trim() {
            "view" => Mode::View,
            _ => Mode::Edit,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Edit => Mode::View,
            Mode::View => Mode::Edit,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Mode::Edit)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
