use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
pub enum Dialog {
  AddEvent,
  AddProject,
  ThemePicker
}

impl Dialog {
  pub fn all() -> [Self; 3] {
    [
      Self::AddEvent,
      Self::AddProject,
      Self::ThemePicker
    ]
  }
}

/// Bounding box, in viewport pixels, of
/// the element that opened the theme
/// picker.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Default,
  Serialize,
  Deserialize,
)]
pub struct AnchorRect {
  pub left:   f64,
  pub top:    f64,
  pub width:  f64,
  pub height: f64
}

impl AnchorRect {
  /// Top-left corner for a popover
  /// hanging just below the anchor.
  pub fn popover_position(
    &self
  ) -> (f64, f64) {
    (self.left, self.top + self.height)
  }
}

/// Visibility of the three dialogs.
///
/// Each flag moves on its own: opening
/// one dialog never closes another.
#[derive(
  Debug, Clone, Copy, PartialEq, Default,
)]
pub struct ModalGate {
  event_open:   bool,
  project_open: bool,
  theme_open:   bool,
  theme_anchor: Option<AnchorRect>
}

impl ModalGate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn open_event(&mut self) {
    self.event_open = true;
    trace!("add-event dialog opened");
  }

  pub fn close_event(&mut self) {
    self.event_open = false;
  }

  pub fn open_project(&mut self) {
    self.project_open = true;
    trace!("add-project dialog opened");
  }

  pub fn close_project(&mut self) {
    self.project_open = false;
  }

  pub fn open_theme(
    &mut self,
    anchor: Option<AnchorRect>
  ) {
    self.theme_anchor = anchor;
    self.theme_open = true;
    trace!(?anchor, "theme picker opened");
  }

  pub fn close_theme(&mut self) {
    self.theme_open = false;
  }

  pub fn theme_anchor(
    &self
  ) -> Option<AnchorRect> {
    self.theme_anchor
  }

  pub fn is_open(
    &self,
    dialog: Dialog
  ) -> bool {
    match dialog {
      | Dialog::AddEvent => self.event_open,
      | Dialog::AddProject => {
        self.project_open
      }
      | Dialog::ThemePicker => {
        self.theme_open
      }
    }
  }

  pub fn open_dialogs(&self) -> Vec<Dialog> {
    Dialog::all()
      .into_iter()
      .filter(|dialog| self.is_open(*dialog))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn opening_project_leaves_event_flag_alone(
  ) {
    let mut gate = ModalGate::new();
    gate.open_event();
    gate.open_project();

    assert!(gate.is_open(Dialog::AddEvent));
    assert!(gate.is_open(Dialog::AddProject));
    assert_eq!(
      gate.open_dialogs(),
      vec![Dialog::AddEvent, Dialog::AddProject]
    );
  }

  #[test]
  fn closing_only_flips_its_own_flag() {
    let mut gate = ModalGate::new();
    gate.open_event();
    gate.open_project();
    gate.open_theme(None);

    gate.close_project();

    assert!(gate.is_open(Dialog::AddEvent));
    assert!(!gate.is_open(Dialog::AddProject));
    assert!(gate.is_open(Dialog::ThemePicker));
  }

  #[test]
  fn theme_anchor_is_recorded_and_kept_after_close(
  ) {
    let anchor = AnchorRect {
      left:   12.0,
      top:    40.0,
      width:  24.0,
      height: 24.0
    };
    let mut gate = ModalGate::new();
    gate.open_theme(Some(anchor));
    gate.close_theme();

    assert!(!gate.is_open(Dialog::ThemePicker));
    assert_eq!(gate.theme_anchor(), Some(anchor));
    assert_eq!(
      anchor.popover_position(),
      (12.0, 64.0)
    );
  }
}
