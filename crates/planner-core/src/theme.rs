use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  error,
  warn
};

/// An accent color as the browser
/// understands it (`#003cff`, `#333`,
/// `rebeccapurple`, ...). Never
/// validated.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ThemeColor(String);

impl ThemeColor {
  pub fn new(
    value: impl Into<String>
  ) -> Self {
    Self(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ThemeColor {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct NamedTheme {
  pub name:  String,
  pub color: ThemeColor
}

pub fn builtin_palette() -> Vec<NamedTheme>
{
  [
    ("Default", "#003cff"),
    ("Dark", "#333"),
    ("Green", "#4CAF50")
  ]
  .into_iter()
  .map(|(name, color)| NamedTheme {
    name:  name.to_string(),
    color: ThemeColor::new(color)
  })
  .collect()
}

/// Resolve a palette name for a color,
/// `None` for custom colors.
pub fn palette_name<'a>(
  palette: &'a [NamedTheme],
  color: &ThemeColor
) -> Option<&'a str> {
  palette
    .iter()
    .find(|entry| {
      entry
        .color
        .as_str()
        .eq_ignore_ascii_case(color.as_str())
    })
    .map(|entry| entry.name.as_str())
}

pub trait ThemeStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// Map-backed storage. Clones share the
/// same map, which lets a second store
/// observe what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  items: Rc<RefCell<BTreeMap<String, String>>>
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ThemeStorage for MemoryStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.items.borrow().get(key).cloned())
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .items
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    Ok(())
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
)]
pub struct SubscriptionId(u64);

type ThemeListener = Rc<dyn Fn(&ThemeColor)>;

/// Persisted accent color plus the
/// components listening for changes.
pub struct ThemeStore<S> {
  storage:     S,
  key:         String,
  fallback:    ThemeColor,
  listeners:   Vec<(SubscriptionId, ThemeListener)>,
  next_listener: u64
}

impl<S: ThemeStorage> ThemeStore<S> {
  pub fn new(
    storage: S,
    key: impl Into<String>,
    fallback: ThemeColor
  ) -> Self {
    Self {
      storage,
      key: key.into(),
      fallback,
      listeners: Vec::new(),
      next_listener: 0
    }
  }

  pub fn get(&self) -> ThemeColor {
    match self.read() {
      | Ok(Some(stored))
        if !stored.trim().is_empty() =>
      {
        ThemeColor::new(stored)
      }
      | Ok(_) => self.fallback.clone(),
      | Err(error) => {
        warn!(
          %error,
          key = %self.key,
          "failed reading theme color; \
           using default"
        );
        self.fallback.clone()
      }
    }
  }

  pub fn set(
    &mut self,
    color: ThemeColor
  ) {
    if let Err(error) = self
      .storage
      .set_item(&self.key, color.as_str())
      .with_context(|| {
        format!(
          "failed writing `{}`",
          self.key
        )
      })
    {
      error!(
        ?error,
        "theme color not persisted"
      );
    }

    debug!(
      color = %color,
      listeners = self.listeners.len(),
      "theme color changed"
    );
    let listeners = self
      .listeners
      .iter()
      .map(|(_, listener)| listener.clone())
      .collect::<Vec<_>>();
    for listener in listeners {
      listener(&color);
    }
  }

  pub fn subscribe(
    &mut self,
    listener: impl Fn(&ThemeColor) + 'static
  ) -> SubscriptionId {
    let id = SubscriptionId(self.next_listener);
    self.next_listener += 1;
    self.listeners.push((id, Rc::new(listener)));
    id
  }

  pub fn unsubscribe(
    &mut self,
    id: SubscriptionId
  ) {
    self
      .listeners
      .retain(|(listener_id, _)| *listener_id != id);
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.len()
  }

  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    self
      .storage
      .get_item(&self.key)
      .with_context(|| {
        format!("failed reading `{}`", self.key)
      })
  }
}
