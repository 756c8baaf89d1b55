//! Popup window references
//!
//! The orchestration code that opens a login popup owns its lifecycle.
//! Errors only carry a shared handle so the caller can inspect or close
//! the window after a timeout or cancellation.

use std::fmt;
use std::sync::Arc;

/// A popup window opened by the login orchestration.
pub trait PopupWindow: fmt::Debug + Send + Sync {
    /// Whether the user (or anything else) has closed the window.
    fn is_closed(&self) -> bool;

    /// Close the window. No-op if it is already closed.
    fn close(&self);
}

/// Shared, non-owning handle to a popup window.
///
/// Cloning yields another handle to the same window.
#[derive(Clone)]
pub struct PopupHandle(Arc<dyn PopupWindow>);

impl PopupHandle {
    pub fn new(window: Arc<dyn PopupWindow>) -> Self {
        Self(window)
    }

    /// Whether both handles refer to the same window instance.
    pub fn same_window(&self, other: &PopupHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }

    pub fn close(&self) {
        self.0.close();
    }
}

impl<W: PopupWindow + 'static> From<Arc<W>> for PopupHandle {
    fn from(window: Arc<W>) -> Self {
        Self(window)
    }
}

impl fmt::Debug for PopupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PopupHandle").field(&self.0).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// In-memory popup used across the crate's tests.
    #[derive(Debug, Default)]
    pub(crate) struct FakePopup {
        closed: AtomicBool,
    }

    impl PopupWindow for FakePopup {
        fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }

        fn close(&self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }

    pub(crate) fn fake_handle() -> PopupHandle {
        PopupHandle::from(Arc::new(FakePopup::default()))
    }

    #[test]
    fn clones_share_the_window() {
        let handle = fake_handle();
        let clone = handle.clone();
        assert!(handle.same_window(&clone));

        clone.close();
        assert!(handle.is_closed(), "closing via a clone must close the shared window");
    }

    #[test]
    fn distinct_windows_are_not_the_same() {
        assert!(!fake_handle().same_window(&fake_handle()));
    }

    #[test]
    fn debug_shows_window_state() {
        let debug = format!("{:?}", fake_handle());
        assert!(debug.contains("PopupHandle"), "got: {debug}");
        assert!(debug.contains("FakePopup"), "got: {debug}");
    }
}
