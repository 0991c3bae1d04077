//! Class-based style rules for chrome
//! nodes that render outside any theme
//! aware component.

use crate::theme::ThemeColor;

pub const SYNC_SELECTOR: &str = ".add-event-button, .view-mode-buttons \
                                 button, .more-profiles, .badge, \
                                 .dropdown";

const WHITE: &str = "white";
const BLACK: &str = "black";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum StyleRule {
  Dropdown,
  Active,
  ViewModeButton,
  Accent
}

impl StyleRule {
  /// First match wins, in the order
  /// `dropdown`, `active`,
  /// `view-mode-button`.
  pub fn classify<'a, I>(
    classes: I
  ) -> Self
  where
    I: IntoIterator<Item = &'a str>
  {
    let mut dropdown = false;
    let mut active = false;
    let mut view_mode = false;
    for class in classes {
      match class {
        | "dropdown" => dropdown = true,
        | "active" => active = true,
        | "view-mode-button" => {
          view_mode = true
        }
        | _ => {}
      }
    }

    if dropdown {
      Self::Dropdown
    } else if active {
      Self::Active
    } else if view_mode {
      Self::ViewModeButton
    } else {
      Self::Accent
    }
  }

  pub fn patch(
    self,
    theme: &ThemeColor
  ) -> StylePatch {
    let accent =
      Some(theme.as_str().to_string());
    match self {
      | Self::Dropdown => {
        StylePatch {
          border_bottom_color: accent,
          ..StylePatch::default()
        }
      }
      | Self::Active => StylePatch {
        background_color: accent,
        color: Some(WHITE.to_string()),
        ..StylePatch::default()
      },
      | Self::ViewModeButton => {
        StylePatch {
          background_color: Some(
            WHITE.to_string()
          ),
          color: Some(BLACK.to_string()),
          ..StylePatch::default()
        }
      }
      | Self::Accent => StylePatch {
        background_color: accent,
        ..StylePatch::default()
      }
    }
  }
}

/// Inline style properties to assign.
/// `None` leaves the property untouched.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct StylePatch {
  pub background_color:    Option<String>,
  pub color:               Option<String>,
  pub border_bottom_color: Option<String>
}

impl StylePatch {
  pub fn properties(
    &self
  ) -> Vec<(&'static str, &str)> {
    [
      (
        "background-color",
        self.background_color.as_deref()
      ),
      ("color", self.color.as_deref()),
      (
        "border-bottom-color",
        self.border_bottom_color.as_deref()
      )
    ]
    .into_iter()
    .filter_map(|(name, value)| {
      value.map(|value| (name, value))
    })
    .collect()
  }
}

pub fn style_for_classes(
  class_attr: &str,
  theme: &ThemeColor
) -> StylePatch {
  StyleRule::classify(
    class_attr.split_whitespace()
  )
  .patch(theme)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn theme() -> ThemeColor {
    ThemeColor::new("#4CAF50")
  }

  #[test]
  fn dropdown_only_gets_a_border() {
    let patch = style_for_classes(
      "dropdown active",
      &theme()
    );
    assert_eq!(
      patch.properties(),
      vec![("border-bottom-color", "#4CAF50")]
    );
  }

  #[test]
  fn active_view_button_uses_accent() {
    let patch = style_for_classes(
      "view-mode-button active",
      &theme()
    );
    assert_eq!(
      patch,
      StylePatch {
        background_color:    Some(
          "#4CAF50".to_string()
        ),
        color:               Some(
          "white".to_string()
        ),
        border_bottom_color: None
      }
    );
  }

  #[test]
  fn idle_view_button_is_white_on_black() {
    let patch = style_for_classes(
      "view-mode-button",
      &theme()
    );
    assert_eq!(
      patch.properties(),
      vec![
        ("background-color", "white"),
        ("color", "black"),
      ]
    );
  }

  #[test]
  fn other_nodes_get_accent_background() {
    for class_attr in
      ["add-event-button", "badge", "", "more-profiles"]
    {
      assert_eq!(
        StyleRule::classify(
          class_attr.split_whitespace()
        ),
        StyleRule::Accent
      );
    }
    assert_eq!(
      style_for_classes("badge", &theme())
        .properties(),
      vec![("background-color", "#4CAF50")]
    );
  }
}
