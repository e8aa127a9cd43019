/// Cursor classes queued on the map container.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cursor {
    Add,
    Pointer,
    Neutral,
}

impl Cursor {
    pub fn as_str(self) -> &'static str {
        match self {
            Cursor::Add => "add",
            Cursor::Pointer => "pointer",
            Cursor::Neutral => "none",
        }
    }
}

/// Toolbar buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tool {
    Circle,
}

impl Tool {
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Circle => "circle",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModeName {
    SimpleSelect,
}

impl ModeName {
    pub fn as_str(self) -> &'static str {
        match self {
            ModeName::SimpleSelect => "simple_select",
        }
    }
}

pub const EVENT_CREATE: &str = "draw.create";

#[cfg(test)]
mod tests {
    use super::{Cursor, EVENT_CREATE, ModeName, Tool};

    #[test]
    fn host_tokens() {
        assert_eq!(Cursor::Add.as_str(), "add");
        assert_eq!(Cursor::Pointer.as_str(), "pointer");
        assert_eq!(Cursor::Neutral.as_str(), "none");
        assert_eq!(Tool::Circle.as_str(), "circle");
        assert_eq!(ModeName::SimpleSelect.as_str(), "simple_select");
        assert_eq!(EVENT_CREATE, "draw.create");
    }
}
