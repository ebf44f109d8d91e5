//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Plain data behind an `RwSignal` in context. Pushing returns an id so the
//! caller can schedule the matching dismissal; rendering lives in
//! `components::toast_host`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Screen anchor for a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// CSS modifier class for the anchor.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::TopLeft => "toast--top-left",
            Self::TopCenter => "toast--top-center",
            Self::TopRight => "toast--top-right",
            Self::BottomLeft => "toast--bottom-left",
            Self::BottomCenter => "toast--bottom-center",
            Self::BottomRight => "toast--bottom-right",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub position: ToastPosition,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, position: ToastPosition) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), position });
        id
    }

    /// Remove a notification. Unknown ids are ignored since timers and clicks
    /// can both dismiss the same toast.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
