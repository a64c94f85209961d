//! Translates host pointer, keyboard and click events into color state
//! transitions.
//!
//! Each picker instance owns one [`InputController`]; nothing here is
//! global. Every handler that touches the color goes through
//! [`ColorState::update`] or [`ColorState::refresh`], so the returned
//! view always reflects the latest color.

pub mod drag;
pub mod elements;
pub mod panel;

use std::str::FromStr;

use crate::error::PickerError;
use crate::format::{decode_hex, normalize_hex_input, parse_color_input};
use crate::geometry::{Bounds, Point};
use crate::state::{ColorPatch, ColorState, ColorView, Hsva};
pub use drag::{DragSession, DragTarget};
pub use elements::{validate_elements, REQUIRED_ELEMENTS};
pub use panel::{ClickTarget, PanelState};

/// The two text entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Hex-only field; any text is repaired into a hex color.
    Hex,
    /// Combined hex/RGBA field; unparsable text is reverted.
    Format,
}

impl FromStr for TextField {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(TextField::Hex),
            "format" => Ok(TextField::Format),
            _ => Err(PickerError::UnknownField(s.to_string())),
        }
    }
}

/// What caused a text commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Enter,
    Blur,
}

/// Result of committing field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The text parsed and replaced the color
    Applied,
    /// The text was rejected; views show the previous canonical value
    Reverted,
}

/// Every input the host can forward.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    PointerDown {
        target: DragTarget,
        bounds: Bounds,
        position: Point,
    },
    PointerMove {
        position: Point,
    },
    PointerUp,
    KeyDown {
        field: TextField,
        key: String,
        text: String,
    },
    Blur {
        field: TextField,
        text: String,
    },
    Click {
        target: ClickTarget,
    },
}

/// Per-instance picker state: the color, the panel and the active drag.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    state: ColorState,
    panel: PanelState,
    drag: Option<DragSession>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(color: Hsva) -> Self {
        Self {
            state: ColorState::with_color(color),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn view(&self) -> &ColorView {
        self.state.view()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn active_drag(&self) -> Option<DragTarget> {
        self.drag.map(|session| session.target())
    }

    /// Start a drag on `target` and apply the pressed position at once.
    pub fn pointer_down(&mut self, target: DragTarget, bounds: Bounds, position: Point) -> &ColorView {
        if let Some(previous) = self.drag {
            log::debug!("pointer down replaced unfinished {:?} drag", previous.target());
        }
        let session = DragSession::start(target, bounds);
        self.drag = Some(session);
        log::debug!("started dragging {target:?}");
        self.state.update(session.patch_at(position))
    }

    /// Follow the pointer while a drag is active. Moves without an active
    /// drag are ignored and return `None`.
    pub fn pointer_move(&mut self, position: Point) -> Option<&ColorView> {
        let session = self.drag?;
        Some(self.state.update(session.patch_at(position)))
    }

    /// End the active drag. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        match self.drag.take() {
            Some(session) => {
                log::debug!("stopped dragging {:?}", session.target());
                true
            }
            None => false,
        }
    }

    /// Commit the text of `field`.
    ///
    /// The hex field is total: text is repaired into `#RRGGBB` and the
    /// current alpha is kept. The format field accepts hex or RGBA text;
    /// anything else leaves the color untouched and re-renders it.
    pub fn commit_text(&mut self, field: TextField, text: &str, trigger: CommitTrigger) -> CommitOutcome {
        let alpha = self.state.color().a;
        let parsed = match field {
            TextField::Hex => decode_hex(&normalize_hex_input(text)).map(|rgb| Hsva::from_rgb(rgb, alpha)),
            TextField::Format => {
                parse_color_input(text, alpha).map(|parsed| Hsva::from_rgb(parsed.rgb, parsed.alpha))
            }
        };

        match parsed {
            Some(color) => {
                self.state.update(ColorPatch::full(color));
                log::debug!("{field:?} field committed on {trigger:?}: {}", self.view().canonical);
                CommitOutcome::Applied
            }
            None => {
                self.state.refresh();
                log::debug!("{field:?} field text {text:?} rejected, reverted");
                CommitOutcome::Reverted
            }
        }
    }

    /// Key press in a text field. Only Enter commits.
    pub fn key_down(&mut self, field: TextField, key: &str, text: &str) -> Option<CommitOutcome> {
        if key == "Enter" {
            Some(self.commit_text(field, text, CommitTrigger::Enter))
        } else {
            None
        }
    }

    /// Apply a click. Opening the panel re-renders the view; the color
    /// itself never changes. Returns whether the panel is open.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        let was_open = self.panel.is_open();
        if self.panel.on_click(target) {
            self.state.refresh();
        }
        if was_open != self.panel.is_open() {
            log::debug!("panel {}", if self.panel.is_open() { "opened" } else { "closed" });
        }
        self.panel.is_open()
    }

    /// Dispatch any host event. Returns whether the view was re-rendered.
    pub fn handle(&mut self, event: PickerEvent) -> bool {
        match event {
            PickerEvent::PointerDown {
                target,
                bounds,
                position,
            } => {
                self.pointer_down(target, bounds, position);
                true
            }
            PickerEvent::PointerMove { position } => self.pointer_move(position).is_some(),
            PickerEvent::PointerUp => {
                self.pointer_up();
                false
            }
            PickerEvent::KeyDown { field, key, text } => self.key_down(field, &key, &text).is_some(),
            PickerEvent::Blur { field, text } => {
                self.commit_text(field, &text, CommitTrigger::Blur);
                true
            }
            PickerEvent::Click { target } => {
                let was_open = self.is_open();
                self.click(target) && !was_open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CanonicalFormat;

    const CANVAS: Bounds = Bounds::new(0.0, 0.0, 200.0, 200.0);
    const SLIDER: Bounds = Bounds::new(0.0, 220.0, 200.0, 12.0);

    #[test]
    fn canvas_click_at_center() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Canvas, CANVAS, Point::new(100.0, 100.0));
        let color = ctl.state().color();
        assert_eq!(color.s, 50.0);
        assert_eq!(color.v, 50.0);
        assert_eq!(color.h, 0.0);
    }

    #[test]
    fn drag_follows_pointer_outside_region() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Canvas, CANVAS, Point::new(10.0, 10.0));
        let view = ctl.pointer_move(Point::new(1000.0, 1000.0)).expect("drag active");
        assert_eq!(view.canvas_x_pct, 100.0);
        assert_eq!(ctl.state().color().s, 100.0);
        assert_eq!(ctl.state().color().v, 0.0);
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Hue, SLIDER, Point::new(50.0, 225.0));
        assert!(ctl.pointer_up());
        let before = ctl.state().color();
        assert!(ctl.pointer_move(Point::new(150.0, 225.0)).is_none());
        assert_eq!(ctl.state().color(), before);
        assert!(!ctl.pointer_up());
        assert_eq!(ctl.active_drag(), None);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut ctl = InputController::new();
        assert!(ctl.pointer_move(Point::new(10.0, 10.0)).is_none());
        assert_eq!(ctl.state().color(), Hsva::default());
    }

    #[test]
    fn hue_drag_past_right_edge_is_max() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Hue, SLIDER, Point::new(500.0, 225.0));
        assert_eq!(ctl.state().color().h, 1.0);
        assert_eq!(ctl.view().hue_pct, 100.0);
        assert_eq!(ctl.view().hex, "#FF0000");
    }

    #[test]
    fn alpha_drag_switches_canonical_form() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Alpha, SLIDER, Point::new(100.0, 225.0));
        assert_eq!(ctl.view().format, CanonicalFormat::Rgba);
        assert_eq!(ctl.view().canonical, "RGBA(255, 0, 0, 0.5)");
        ctl.pointer_move(Point::new(999.0, 225.0));
        assert_eq!(ctl.state().color().a, 1.0);
        assert_eq!(ctl.view().canonical, "#FF0000");
    }

    #[test]
    fn active_drag_reports_target() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Alpha, SLIDER, Point::new(0.0, 0.0));
        assert_eq!(ctl.active_drag(), Some(DragTarget::Alpha));
        ctl.pointer_down(DragTarget::Canvas, CANVAS, Point::new(0.0, 0.0));
        assert_eq!(ctl.active_drag(), Some(DragTarget::Canvas));
    }

    #[test]
    fn format_field_accepts_rgba() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Hue, SLIDER, Point::new(100.0, 225.0));
        ctl.pointer_up();
        let outcome = ctl.commit_text(TextField::Format, "rgba(255, 0, 0, 0.5)", CommitTrigger::Enter);
        assert_eq!(outcome, CommitOutcome::Applied);
        let color = ctl.state().color();
        assert_eq!((color.h, color.s, color.v, color.a), (0.0, 100.0, 100.0, 0.5));
        assert_eq!(ctl.view().canonical, "RGBA(255, 0, 0, 0.5)");
    }

    #[test]
    fn format_field_hex_keeps_alpha() {
        let mut ctl = InputController::new();
        ctl.pointer_down(DragTarget::Alpha, SLIDER, Point::new(50.0, 225.0));
        ctl.pointer_up();
        ctl.commit_text(TextField::Format, "#00f", CommitTrigger::Blur);
        assert_eq!(ctl.view().hex, "#0000FF");
        assert_eq!(ctl.state().color().a, 0.25);
    }

    #[test]
    fn format_field_garbage_reverts() {
        let mut ctl = InputController::new();
        let before = ctl.view().clone();
        let outcome = ctl.commit_text(TextField::Format, "not a color", CommitTrigger::Blur);
        assert_eq!(outcome, CommitOutcome::Reverted);
        assert_eq!(ctl.view(), &before);
        assert_eq!(ctl.state().color(), Hsva::default());
    }

    #[test]
    fn hex_field_repairs_any_text() {
        let mut ctl = InputController::new();
        assert_eq!(ctl.commit_text(TextField::Hex, "abc", CommitTrigger::Enter), CommitOutcome::Applied);
        assert_eq!(ctl.view().hex, "#AABBCC");
        assert_eq!(ctl.commit_text(TextField::Hex, "zzzz", CommitTrigger::Blur), CommitOutcome::Applied);
        assert_eq!(ctl.view().hex, "#FFFFFF");
    }

    #[test]
    fn only_enter_commits() {
        let mut ctl = InputController::new();
        assert_eq!(ctl.key_down(TextField::Hex, "a", "00f"), None);
        assert_eq!(ctl.view().hex, "#FF0000");
        assert_eq!(ctl.key_down(TextField::Hex, "Enter", "00f"), Some(CommitOutcome::Applied));
        assert_eq!(ctl.view().hex, "#0000FF");
    }

    #[test]
    fn panel_never_changes_color() {
        let mut ctl = InputController::new();
        assert!(ctl.click(ClickTarget::Trigger));
        assert!(ctl.click(ClickTarget::Panel));
        assert!(!ctl.click(ClickTarget::Outside));
        assert_eq!(ctl.state().color(), Hsva::default());
    }

    #[test]
    fn handle_dispatches_events() {
        let mut ctl = InputController::new();
        assert!(ctl.handle(PickerEvent::Click {
            target: ClickTarget::Trigger
        }));
        assert!(ctl.is_open());
        assert!(ctl.handle(PickerEvent::PointerDown {
            target: DragTarget::Canvas,
            bounds: CANVAS,
            position: Point::new(200.0, 0.0),
        }));
        assert!(ctl.handle(PickerEvent::PointerMove {
            position: Point::new(0.0, 0.0)
        }));
        assert!(!ctl.handle(PickerEvent::PointerUp));
        assert!(!ctl.handle(PickerEvent::PointerMove {
            position: Point::new(100.0, 100.0)
        }));
        assert_eq!(ctl.view().hex, "#FFFFFF");
        assert!(ctl.handle(PickerEvent::KeyDown {
            field: TextField::Format,
            key: "Enter".to_string(),
            text: "rgb(0, 128, 0)".to_string(),
        }));
        assert_eq!(ctl.view().hex, "#008000");
        assert!(ctl.handle(PickerEvent::Blur {
            field: TextField::Format,
            text: "???".to_string(),
        }));
        assert_eq!(ctl.view().hex, "#008000");
    }

    #[test]
    fn instances_are_independent() {
        let mut a = InputController::new();
        let b = InputController::new();
        a.commit_text(TextField::Hex, "000", CommitTrigger::Enter);
        assert_eq!(a.view().hex, "#000000");
        assert_eq!(b.view().hex, "#FF0000");
    }

    #[test]
    fn parse_field_names() {
        assert_eq!("Format".parse::<TextField>().unwrap(), TextField::Format);
        assert!("alpha".parse::<TextField>().is_err());
    }
}
