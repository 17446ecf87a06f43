//! AccordionState - Open Sections of a Form Accordion

use hashlink::LinkedHashSet;
use tracing::debug;

/// How many sections may be open at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one section open
    #[default]
    Single,
    /// Sections toggle independently
    Multiple,
}

/// Open section ids
#[derive(Debug, Clone)]
pub struct AccordionState {
    mode: AccordionMode,
    /// Whether the open section in single mode may be closed again
    collapsible: bool,
    open: LinkedHashSet<String>,
}

impl AccordionState {
    /// Create with the sections open by default.
    ///
    /// In single mode only the first default survives.
    pub fn new<I, S>(mode: AccordionMode, default_open: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut open = LinkedHashSet::new();
        for id in default_open {
            if mode == AccordionMode::Single && !open.is_empty() {
                break;
            }
            open.insert(id.into());
        }
        Self {
            mode,
            collapsible: false,
            open,
        }
    }

    /// Allow closing the open section in single mode
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Open section ids in the order they were opened
    pub fn open_ids(&self) -> Vec<String> {
        self.open.iter().cloned().collect()
    }

    /// Handle a click on a section trigger
    pub fn toggle(&mut self, id: &str) {
        let was_open = self.open.contains(id);
        match self.mode {
            AccordionMode::Multiple => {
                if was_open {
                    self.open.remove(id);
                } else {
                    self.open.insert(id.to_string());
                }
            }
            AccordionMode::Single => {
                if was_open {
                    if self.collapsible {
                        self.open.clear();
                    }
                } else {
                    self.open.clear();
                    self.open.insert(id.to_string());
                }
            }
        }
        debug!(section = id, open = self.open.contains(id), "Accordion toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_keeps_one_open() {
        let mut state = AccordionState::new(AccordionMode::Single, ["deals", "parties"]);
        assert_eq!(state.open_ids(), ["deals"]);

        state.toggle("parties");
        assert!(state.is_open("parties"));
        assert!(!state.is_open("deals"));

        state.toggle("parties");
        assert!(state.is_open("parties"));
    }

    #[test]
    fn test_single_mode_collapsible() {
        let mut state = AccordionState::new(AccordionMode::Single, ["deals"]).collapsible(true);
        state.toggle("deals");
        assert!(state.open_ids().is_empty());
    }

    #[test]
    fn test_multiple_mode_is_independent() {
        let mut state = AccordionState::new(AccordionMode::Multiple, ["a", "b"]);
        state.toggle("a");
        state.toggle("c");
        assert_eq!(state.open_ids(), ["b", "c"]);
    }
}
