//! Presentation surface contract and a recording test double.

use crate::render::AssessmentView;

/// Passive rendering surface driven by the controller.
///
/// Each method addresses a stable presentation field; layout and styling are
/// the implementor's concern. Implementations must not fail: the surface is
/// a sink, never an error source.
pub trait RenderSurface {
    /// Enable or disable the activation control.
    fn set_control_enabled(&mut self, enabled: bool);

    /// Show or hide the busy indicator.
    fn set_busy_indicator(&mut self, visible: bool);

    /// Hide the previous success presentation.
    fn hide_result(&mut self);

    /// Hide the previous error presentation.
    fn hide_error(&mut self);

    /// Render a successful assessment: ticker label, badge with its tier
    /// class, metric fields, and the three probability bars.
    fn show_assessment(&mut self, view: &AssessmentView);

    /// Render a failure message into the error surface.
    fn show_error(&mut self, message: &str);
}

/// Everything a surface can be asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    ControlEnabled(bool),
    BusyIndicator(bool),
    ResultHidden,
    ErrorHidden,
    AssessmentShown(AssessmentView),
    ErrorShown(String),
}

/// Surface double that records every call for assertions.
#[derive(Debug)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    control_enabled: bool,
    busy_visible: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Fresh surface in the idle resting state: control enabled, no busy
    /// indicator, nothing recorded.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            control_enabled: true,
            busy_visible: false,
        }
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub const fn control_enabled(&self) -> bool {
        self.control_enabled
    }

    pub const fn busy_visible(&self) -> bool {
        self.busy_visible
    }

    /// Last rendered assessment, if any.
    pub fn last_assessment(&self) -> Option<&AssessmentView> {
        self.events.iter().rev().find_map(|event| match event {
            SurfaceEvent::AssessmentShown(view) => Some(view),
            _ => None,
        })
    }

    /// Last rendered error message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            SurfaceEvent::ErrorShown(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn set_control_enabled(&mut self, enabled: bool) {
        self.control_enabled = enabled;
        self.events.push(SurfaceEvent::ControlEnabled(enabled));
    }

    fn set_busy_indicator(&mut self, visible: bool) {
        self.busy_visible = visible;
        self.events.push(SurfaceEvent::BusyIndicator(visible));
    }

    fn hide_result(&mut self) {
        self.events.push(SurfaceEvent::ResultHidden);
    }

    fn hide_error(&mut self) {
        self.events.push(SurfaceEvent::ErrorHidden);
    }

    fn show_assessment(&mut self, view: &AssessmentView) {
        self.events.push(SurfaceEvent::AssessmentShown(view.clone()));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(SurfaceEvent::ErrorShown(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_starts_idle_with_control_enabled() {
        let surface = RecordingSurface::default();
        assert!(surface.control_enabled());
        assert!(!surface.busy_visible());
        assert!(surface.events().is_empty());
    }
}
