//! Spark Alert Library
//!
//! A modal alert dialog for ratatui applications: a card with a title, a
//! message and a row of action buttons. The caller supplies a delegate that
//! is told which button was activated.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use ratatui::{Terminal, backend::TestBackend};
//! use spark_alert::AlertController;
//! use spark_alert_config::AlertConfiguration;
//!
//! let config = AlertConfiguration::new("Delete item?", "This cannot be undone", ["Cancel", "Delete"]);
//! let mut alert = AlertController::new(config);
//! let delegate = Rc::new(|index: usize, _: &AlertController| println!("tapped {index}"));
//! alert.set_delegate(&delegate);
//!
//! let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
//! terminal.draw(|f| alert.render(f)).unwrap();
//! ```

pub mod cli;
pub mod controller;
pub mod delegate;
pub mod error;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use controller::AlertController;
pub use delegate::AlertDelegate;
pub use error::AlertError;
pub use ui::{AlertLayout, AlertViews, ButtonId};
