/// What closes an open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub outside_click: bool,
    pub escape: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self { outside_click: true, escape: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Click { inside: bool },
    Escape,
    Key,
}

/// Open/closed state for a popup that closes on outside interaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dismissable {
    open: bool,
    policy: DismissPolicy,
}

impl Dismissable {
    pub fn new(policy: DismissPolicy) -> Self {
        Self { open: false, policy }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` if the interaction closed the overlay. A closed
    /// overlay ignores everything.
    pub fn handle(&mut self, interaction: Interaction) -> bool {
        if !self.open {
            return false;
        }
        let dismiss = match interaction {
            Interaction::Click { inside } => !inside && self.policy.outside_click,
            Interaction::Escape => self.policy.escape,
            Interaction::Key => false,
        };
        if dismiss {
            self.open = false;
        }
        dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_click_and_escape_close() {
        let mut d = Dismissable::new(DismissPolicy::default());
        assert!(!d.handle(Interaction::Escape));

        assert!(d.toggle());
        assert!(!d.handle(Interaction::Click { inside: true }));
        assert!(!d.handle(Interaction::Key));
        assert!(d.handle(Interaction::Click { inside: false }));
        assert!(!d.is_open());

        d.toggle();
        assert!(d.handle(Interaction::Escape));
        assert!(!d.is_open());
    }

    #[test]
    fn policy_can_keep_overlay_open() {
        let mut d = Dismissable::new(DismissPolicy { outside_click: false, escape: true });
        d.toggle();
        assert!(!d.handle(Interaction::Click { inside: false }));
        assert!(d.is_open());
    }
}
