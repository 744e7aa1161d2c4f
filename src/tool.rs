use std::fmt;

/// The active pointer-interaction mode. Exactly one at a time, owned
/// by the store alongside the scene; not persisted with it. Any tool
/// may switch to any other at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Pan,
    Text,
    Draw,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Pan, Tool::Text, Tool::Draw];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pan => "Pan",
            Tool::Text => "Text",
            Tool::Draw => "Draw",
        }
    }

    /// Keyboard shortcut shown next to the tool name.
    pub fn shortcut(&self) -> &'static str {
        match self {
            Tool::Select => "V",
            Tool::Pan => "H",
            Tool::Text => "T",
            Tool::Draw => "D",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
