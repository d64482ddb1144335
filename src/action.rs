//! Result of feeding an event to a widget.

/// Whether the host should redraw after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// State changed; the widget must be rendered again.
    Redraw,
    /// Nothing changed.
    NoOp,
}

impl Action {
    /// Check if this action asks for a redraw.
    #[must_use]
    pub const fn is_redraw(self) -> bool {
        matches!(self, Self::Redraw)
    }

    pub(crate) const fn from_changed(changed: bool) -> Self {
        if changed { Self::Redraw } else { Self::NoOp }
    }
}
