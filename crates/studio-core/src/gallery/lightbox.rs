//! Full-viewport image preview slot.
//!
//! Only one overlay may exist. Opening while one is shown swaps the image in
//! the existing overlay instead of stacking a second one.

/// What a call to [`LightboxSlot::open`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxChange {
    /// No overlay existed; one was created.
    Opened,
    /// The existing overlay now shows a different image.
    Replaced { previous: String },
    /// The requested image is already shown.
    Unchanged,
}

/// Tracks the currently open overlay, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxSlot {
    current: Option<String>,
}

impl LightboxSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn open(&mut self, url: impl Into<String>) -> LightboxChange {
        let url = url.into();
        match self.current.replace(url.clone()) {
            None => LightboxChange::Opened,
            Some(previous) if previous == url => LightboxChange::Unchanged,
            Some(previous) => LightboxChange::Replaced { previous },
        }
    }

    /// Closes the overlay, returning the image it showed.
    pub fn dismiss(&mut self) -> Option<String> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_dismiss() {
        let mut slot = LightboxSlot::new();
        assert_eq!(slot.open("/a.jpg"), LightboxChange::Opened);
        assert_eq!(slot.current(), Some("/a.jpg"));
        assert_eq!(slot.dismiss().as_deref(), Some("/a.jpg"));
        assert!(!slot.is_open());
    }

    #[test]
    fn test_second_open_replaces() {
        let mut slot = LightboxSlot::new();
        slot.open("/a.jpg");
        assert_eq!(
            slot.open("/b.jpg"),
            LightboxChange::Replaced {
                previous: "/a.jpg".to_string()
            }
        );
        assert_eq!(slot.open("/b.jpg"), LightboxChange::Unchanged);
        assert_eq!(slot.current(), Some("/b.jpg"));
    }

    #[test]
    fn test_dismiss_empty_is_noop() {
        let mut slot = LightboxSlot::new();
        assert_eq!(slot.dismiss(), None);
    }
}
