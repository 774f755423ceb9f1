//! Confirmation Gate
//!
//! Open/closed state behind the confirm dialog. A confirmed cycle runs the
//! action once; cancel or dismiss never runs it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmGate {
    #[default]
    Closed,
    Open,
}

impl ConfirmGate {
    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmGate::Open)
    }

    pub fn open(&mut self) {
        *self = ConfirmGate::Open;
    }

    /// Close; true if the action should run
    pub fn confirm(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ConfirmGate::Closed;
        was_open
    }

    pub fn cancel(&mut self) {
        *self = ConfirmGate::Closed;
    }
}
