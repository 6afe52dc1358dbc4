//! Delegate notified when an alert button is activated.
//!
//! The controller only keeps a `Weak` handle to its delegate, so the caller
//! owns the delegate's lifetime. Implementations receive `&self`; use
//! `Cell`/`RefCell` for any state they need to record.

use crate::controller::AlertController;

/// Receiver of alert button activations.
pub trait AlertDelegate {
    /// Called once per activation with the button's zero-based index.
    fn alert_action(&self, index: usize, controller: &AlertController);
}

impl<F> AlertDelegate for F
where
    F: Fn(usize, &AlertController),
{
    fn alert_action(&self, index: usize, controller: &AlertController) {
        self(index, controller)
    }
}
