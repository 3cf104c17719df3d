//! Mobile navigation disclosure (open/closed panel).

use tracing::debug;

/// User actions the mobile navigation reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The menu toggle control was activated.
    Toggle,
    /// A destination link inside the panel was activated.
    LinkActivated,
}

/// Open/closed condition of the mobile navigation panel.
///
/// This is the authoritative state; the panel's visual transition is derived
/// from it and always converges to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn apply(self, event: NavEvent) -> Self {
        let next = match (self, event) {
            (Disclosure::Closed, NavEvent::Toggle) => Disclosure::Open,
            (Disclosure::Open, NavEvent::Toggle) => Disclosure::Closed,
            (_, NavEvent::LinkActivated) => Disclosure::Closed,
        };
        debug!(?event, from = ?self, to = ?next, "nav disclosure");
        next
    }

    /// Fold a sequence of events starting from `self`.
    pub fn replay(self, events: impl IntoIterator<Item = NavEvent>) -> Self {
        events.into_iter().fold(self, Disclosure::apply)
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}
