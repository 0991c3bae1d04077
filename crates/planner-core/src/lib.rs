pub mod calendar;
pub mod config;
pub mod form;
pub mod modal;
pub mod model;
pub mod store;
pub mod style;
pub mod theme;

pub use config::PlannerConfig;
pub use form::EventFormInput;
pub use modal::{
  AnchorRect,
  Dialog,
  ModalGate
};
pub use model::{
  CalendarViewMode,
  Event,
  EventDraft,
  Project,
  ProjectId
};
pub use store::PlannerStore;
pub use style::{
  SYNC_SELECTOR,
  StylePatch,
  StyleRule,
  style_for_classes
};
pub use theme::{
  MemoryStorage,
  NamedTheme,
  SubscriptionId,
  ThemeColor,
  ThemeStorage,
  ThemeStore,
  palette_name
};
