use anyhow::Context;
use chrono::Weekday;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  info,
  warn
};

use crate::model::CalendarViewMode;
use crate::theme::{
  NamedTheme,
  ThemeColor,
  builtin_palette
};

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PlannerConfig {
  #[serde(default)]
  pub version:           u32,
  #[serde(default = "default_storage_key")]
  pub theme_storage_key: String,
  #[serde(default = "default_theme_name")]
  pub default_theme:     String,
  #[serde(default = "default_view_key")]
  pub default_view:      String,
  #[serde(default = "config_true")]
  pub sidebar_open:      bool,
  #[serde(default = "default_week_start")]
  pub week_start:        String,
  #[serde(default)]
  pub timezone:          Option<String>,
  #[serde(default = "builtin_palette")]
  pub themes:            Vec<NamedTheme>
}

fn config_true() -> bool {
  true
}

fn default_storage_key() -> String {
  "themeColor".to_string()
}

fn default_theme_name() -> String {
  "Default".to_string()
}

fn default_view_key() -> String {
  "month".to_string()
}

fn default_week_start() -> String {
  "sunday".to_string()
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      version:           1,
      theme_storage_key: default_storage_key(),
      default_theme:     default_theme_name(),
      default_view:      default_view_key(),
      sidebar_open:      true,
      week_start:        default_week_start(),
      timezone:          None,
      themes:            builtin_palette()
    }
  }
}

impl PlannerConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<Self>(raw)
        .context("invalid planner config")?;
    config.sanitize();
    info!(
      version = config.version,
      default_theme = %config.default_theme,
      default_view = %config.default_view,
      themes = config.themes.len(),
      "loaded planner config"
    );
    Ok(config)
  }

  /// Parse the embedded config, or fall
  /// back to defaults when it is broken.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => config,
      | Err(error) => {
        tracing::error!(
          error = ?error,
          "failed parsing planner config; \
           using defaults"
        );
        Self::default()
      }
    }
  }

  pub fn sanitize(&mut self) {
    self.themes.retain(|theme| {
      !theme.name.trim().is_empty()
        && !theme.color.as_str().trim().is_empty()
    });
    if self.themes.is_empty() {
      warn!(
        "planner config has no themes; \
         using built-in palette"
      );
      self.themes = builtin_palette();
    }

    if self.theme_storage_key.trim().is_empty()
    {
      self.theme_storage_key =
        default_storage_key();
    }

    if CalendarViewMode::from_key(
      &self.default_view
    )
    .is_none()
    {
      warn!(
        view = %self.default_view,
        "unknown default view; using month"
      );
      self.default_view = default_view_key();
    }

    let known_theme = self
      .themes
      .iter()
      .any(|theme| {
        theme.name == self.default_theme
      });
    if !known_theme
      && let Some(first) = self.themes.first()
    {
      warn!(
        theme = %self.default_theme,
        fallback = %first.name,
        "unknown default theme"
      );
      self.default_theme = first.name.clone();
    }

    if self
      .timezone
      .as_deref()
      .is_some_and(|tz| tz.trim().is_empty())
    {
      self.timezone = None;
    }
  }

  pub fn default_color(&self) -> ThemeColor {
    self
      .themes
      .iter()
      .find(|theme| {
        theme.name == self.default_theme
      })
      .or_else(|| self.themes.first())
      .map(|theme| theme.color.clone())
      .unwrap_or_else(|| {
        ThemeColor::new("#003cff")
      })
  }

  pub fn default_view_mode(
    &self
  ) -> CalendarViewMode {
    CalendarViewMode::from_key(
      &self.default_view
    )
    .unwrap_or(CalendarViewMode::Month)
  }

  pub fn week_start_day(&self) -> Weekday {
    if self
      .week_start
      .trim()
      .eq_ignore_ascii_case("monday")
    {
      Weekday::Mon
    } else {
      Weekday::Sun
    }
  }

  /// Configured IANA zone. `None` means
  /// the browser's local time.
  pub fn resolved_timezone(
    &self
  ) -> Option<Tz> {
    let raw = self.timezone.as_deref()?;
    match raw.trim().parse::<Tz>() {
      | Ok(tz) => Some(tz),
      | Err(error) => {
        warn!(
          timezone = %raw,
          %error,
          "invalid timezone; using local time"
        );
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let config =
      PlannerConfig::from_toml_str("")
        .expect("parse empty config");
    assert_eq!(
      config.theme_storage_key,
      "themeColor"
    );
    assert_eq!(
      config.default_color(),
      ThemeColor::new("#003cff")
    );
    assert_eq!(
      config.default_view_mode(),
      CalendarViewMode::Month
    );
    assert!(config.sidebar_open);
    assert_eq!(
      config.week_start_day(),
      Weekday::Sun
    );
    assert_eq!(config.themes.len(), 3);
  }

  #[test]
  fn sanitize_repairs_unknown_values() {
    let raw = r##"
version = 2
theme_storage_key = "  "
default_theme = "Purple"
default_view = "year"
timezone = ""

[[themes]]
name = "Teal"
color = "#008080"

[[themes]]
name = ""
color = "#ffffff"
"##;
    let config =
      PlannerConfig::from_toml_str(raw)
        .expect("parse config");

    assert_eq!(config.version, 2);
    assert_eq!(
      config.theme_storage_key,
      "themeColor"
    );
    assert_eq!(config.themes.len(), 1);
    assert_eq!(config.default_theme, "Teal");
    assert_eq!(
      config.default_color(),
      ThemeColor::new("#008080")
    );
    assert_eq!(config.default_view, "month");
    assert_eq!(config.timezone, None);
  }

  #[test]
  fn broken_toml_falls_back_to_defaults() {
    let config = PlannerConfig::load_or_default(
      "themes = 12"
    );
    assert_eq!(config, PlannerConfig::default());
  }

  #[test]
  fn timezone_resolution_tolerates_garbage() {
    let mut config = PlannerConfig {
      timezone: Some(
        "Asia/Seoul".to_string()
      ),
      ..PlannerConfig::default()
    };
    assert_eq!(
      config.resolved_timezone(),
      Some(chrono_tz::Asia::Seoul)
    );

    config.timezone =
      Some("Mars/Olympus".to_string());
    assert_eq!(
      config.resolved_timezone(),
      None
    );
  }
}
