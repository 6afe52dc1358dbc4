//! Error types for the alert presenter.

use thiserror::Error;

/// Errors returned by [`AlertController`](crate::AlertController) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    /// The view tree is built once; configuration cannot change afterwards.
    #[error("alert is already materialized")]
    AlreadyMaterialized,

    #[error("alert has not been materialized yet")]
    NotMaterialized,

    #[error("no button at index {index} (alert has {count} buttons)")]
    UnknownButton { index: usize, count: usize },
}
