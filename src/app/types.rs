//! Type definitions for the application state.

/// Which UI component receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Kid list and portal shortcuts
    #[default]
    Kids,
    /// Viewer email field
    Viewer,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Kids => Focus::Viewer,
            Focus::Viewer => Focus::Kids,
        }
    }
}
