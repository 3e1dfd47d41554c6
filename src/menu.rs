use crate::effects::Effect;

/// Mobile navigation panel. Page scroll is locked exactly while it is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Burger click.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        log::debug!("Mobile menu {}", if self.open { "opened" } else { "closed" });
        vec![Effect::LockScroll(self.open)]
    }

    /// A navigation link click only ever closes the menu.
    pub fn link_clicked(&mut self) -> Vec<Effect> {
        if self.open {
            self.toggle()
        } else {
            Vec::new()
        }
    }

    /// Classes for the burger button and the panel.
    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}
