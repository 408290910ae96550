//! Writer configuration

use serde::{Deserialize, Serialize};

/// XML output configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Character used for indentation, must be ASCII when indenting
    pub indent_char: char,
    /// Indent width per nesting level (0 disables pretty printing)
    pub indent_size: usize,
    /// Write an `<?xml ...?>` declaration before the first element
    pub declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent_char: ' ',
            indent_size: 0,
            declaration: false,
        }
    }
}

impl XmlConfig {
    /// Compact output on a single line
    pub fn compact() -> Self {
        Self::default()
    }

    /// Set indentation
    pub fn with_indent(mut self, indent_char: char, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }

    /// Emit an XML declaration
    pub fn with_declaration(mut self) -> Self {
        self.declaration = true;
        self
    }

    /// Whether pretty printing is enabled
    pub fn is_indented(&self) -> bool {
        self.indent_size > 0
    }
}
