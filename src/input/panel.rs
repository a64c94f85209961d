use std::str::FromStr;

use crate::error::PickerError;

/// Where a click landed, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The swatch/trigger that opens the panel
    Trigger,
    /// Anywhere inside the open panel
    Panel,
    /// The hex text field next to the trigger
    HexField,
    /// Anything else in the document
    Outside,
}

impl FromStr for ClickTarget {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trigger" => Ok(ClickTarget::Trigger),
            "panel" => Ok(ClickTarget::Panel),
            "hex-field" | "hex" => Ok(ClickTarget::HexField),
            "outside" => Ok(ClickTarget::Outside),
            _ => Err(PickerError::UnknownClickTarget(s.to_string())),
        }
    }
}

/// Open/closed state of the dropdown panel. Has no effect on the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply a click and return whether the panel just opened.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Trigger => {
                self.open = !self.open;
                self.open
            }
            ClickTarget::Outside => {
                self.open = false;
                false
            }
            ClickTarget::Panel | ClickTarget::HexField => false,
        }
    }
}
