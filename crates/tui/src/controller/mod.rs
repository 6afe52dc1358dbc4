//! The alert presenter.
//!
//! Responsibilities:
//! - Own the alert configuration and, once materialized, its visual tree.
//! - Hold a non-owning handle to the delegate and notify it on activation.
//! - Render through the host frame and route key/mouse input to buttons.
//!
//! Does NOT handle:
//! - Dismissal; the caller stops rendering the alert when it is done with it.
//! - Reconfiguration after materialization.
//!
//! Invariants:
//! - A controller always has a configuration.
//! - Materialization happens exactly once (Unmaterialized -> Materialized).
//! - Every activation produces exactly one synchronous delegate call.

mod input;
mod mouse;


use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::Frame;
use ratatui::layout::Rect;
use spark_alert_config::AlertConfiguration;

use crate::delegate::AlertDelegate;
use crate::error::AlertError;
use crate::ui::{AlertLayout, AlertViews, ButtonId, render_alert};

enum ViewState {
    Unmaterialized,
    Materialized(AlertViews),
}

/// Presents one alert and reports which button was activated.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use spark_alert::{AlertController, AlertDelegate};
/// use spark_alert_config::AlertConfiguration;
///
/// #[derive(Default)]
/// struct Choice(Cell<Option<usize>>);
///
/// impl AlertDelegate for Choice {
///     fn alert_action(&self, index: usize, _controller: &AlertController) {
///         self.0.set(Some(index));
///     }
/// }
///
/// let config = AlertConfiguration::new("Delete item?", "This cannot be undone", ["Cancel", "Delete"]);
/// let mut controller = AlertController::new(config);
/// let choice = Rc::new(Choice::default());
/// controller.set_delegate(&choice);
///
/// controller.materialize().unwrap();
/// controller.activate_index(1).unwrap();
/// assert_eq!(choice.0.get(), Some(1));
/// ```
pub struct AlertController {
    configuration: AlertConfiguration,
    delegate: Option<Weak<dyn AlertDelegate>>,
    state: ViewState,
    focused: Option<ButtonId>,
    last_area: Rect,
}

impl fmt::Debug for AlertController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertController")
            .field("title", &self.configuration.title())
            .field("materialized", &self.is_materialized())
            .field("delegate_attached", &self.delegate_attached())
            .field("focused", &self.focused)
            .finish()
    }
}

impl AlertController {
    pub fn new(configuration: AlertConfiguration) -> Self {
        Self {
            configuration,
            delegate: None,
            state: ViewState::Unmaterialized,
            focused: None,
            last_area: Rect::default(),
        }
    }

    pub fn configuration(&self) -> &AlertConfiguration {
        &self.configuration
    }

    /// Replace the configuration. Only allowed before materialization.
    pub fn set_configuration(
        &mut self,
        configuration: AlertConfiguration,
    ) -> Result<(), AlertError> {
        if self.is_materialized() {
            return Err(AlertError::AlreadyMaterialized);
        }
        self.configuration = configuration;
        Ok(())
    }

    /// Attach a delegate without taking ownership of it.
    pub fn set_delegate<D: AlertDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<dyn AlertDelegate> = Rc::<D>::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Whether a delegate is attached and still alive.
    pub fn delegate_attached(&self) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|delegate| delegate.strong_count() > 0)
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.state, ViewState::Materialized(_))
    }

    /// The visual tree, once materialized.
    pub fn views(&self) -> Option<&AlertViews> {
        match &self.state {
            ViewState::Materialized(views) => Some(views),
            ViewState::Unmaterialized => None,
        }
    }

    /// Build and populate the visual tree from the configuration.
    ///
    /// Returns `AlertError::AlreadyMaterialized` on every call after the first.
    pub fn materialize(&mut self) -> Result<(), AlertError> {
        if self.is_materialized() {
            return Err(AlertError::AlreadyMaterialized);
        }
        self.load_views();
        Ok(())
    }

    fn load_views(&mut self) {
        let views = AlertViews::build(&self.configuration);
        if views.button_row.is_empty() {
            tracing::warn!(
                title = self.configuration.title(),
                "Alert materialized without buttons; it cannot be answered"
            );
        }
        tracing::debug!(
            title = self.configuration.title(),
            buttons = views.button_row.len(),
            "Alert materialized"
        );

        self.focused = views.button_row.buttons().first().map(|b| b.id());
        self.state = ViewState::Materialized(views);
    }

    /// Draw the alert, materializing it on first display.
    pub fn render(&mut self, f: &mut Frame) {
        if !self.is_materialized() {
            self.load_views();
        }
        self.last_area = f.area();

        if let ViewState::Materialized(views) = &self.state {
            let layout = AlertLayout::compute(self.last_area, views);
            render_alert(f, views, &layout, self.focused);
        }
    }

    /// Geometry of the alert in the most recently rendered area.
    pub fn layout(&self) -> Option<AlertLayout> {
        self.views()
            .map(|views| AlertLayout::compute(self.last_area, views))
    }

    pub fn focused_button(&self) -> Option<ButtonId> {
        self.focused
    }

    /// Notify the delegate that `id` was activated.
    ///
    /// Returns whether a live delegate received the notification.
    pub fn activate(&self, id: ButtonId) -> Result<bool, AlertError> {
        let views = self.views().ok_or(AlertError::NotMaterialized)?;
        let button = views
            .button_row
            .get(id)
            .ok_or(AlertError::UnknownButton {
                index: id.index(),
                count: views.button_row.len(),
            })?;

        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            tracing::warn!(
                index = button.id().index(),
                "Alert button activated with no delegate attached"
            );
            return Ok(false);
        };

        tracing::debug!(
            index = button.id().index(),
            title = %button.title,
            "Alert button activated"
        );
        delegate.alert_action(button.id().index(), self);
        Ok(true)
    }

    /// Notify the delegate that the button at `index` was activated.
    pub fn activate_index(&self, index: usize) -> Result<bool, AlertError> {
        self.activate(ButtonId::new(index))
    }

    fn button_count(&self) -> usize {
        self.views().map_or(0, |views| views.button_row.len())
    }
}
