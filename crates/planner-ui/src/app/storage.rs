use anyhow::{
  Context,
  anyhow
};
use planner_core::{
  PlannerConfig,
  ThemeStorage
};

const PLANNER_CONFIG_TOML: &str =
  include_str!("../../config/planner.toml");

pub fn load_planner_config()
-> PlannerConfig {
  PlannerConfig::load_or_default(
    PLANNER_CONFIG_TOML
  )
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
  fn storage(
    &self
  ) -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
      .context("no window")?
      .local_storage()
      .map_err(|error| {
        anyhow!("{error:?}")
      })?
      .context("local storage disabled")
  }
}

impl ThemeStorage for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(key)
      .map_err(|error| {
        anyhow!("{error:?}")
      })
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(key, value)
      .map_err(|error| {
        anyhow!("{error:?}")
      })
  }
}
