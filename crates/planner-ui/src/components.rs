mod event_form;
mod header;
mod icon_bar;
mod modal;
mod project_form;
mod project_selection;
mod sidebar;
mod theme_modal;

use planner_core::AnchorRect;
use yew::NodeRef;

pub use event_form::EventForm;
pub use header::Header;
pub use icon_bar::IconBar;
pub use modal::Modal;
pub use project_form::ProjectForm;
pub use project_selection::{
  ProjectCard,
  ProjectSelection
};
pub use sidebar::Sidebar;
pub use theme_modal::ThemeModal;

/// Viewport box of a rendered node, used
/// to place the theme popover.
fn anchor_of(
  node: &NodeRef
) -> Option<AnchorRect> {
  let element =
    node.cast::<web_sys::Element>()?;
  let rect =
    element.get_bounding_client_rect();
  Some(AnchorRect {
    left:   rect.left(),
    top:    rect.top(),
    width:  rect.width(),
    height: rect.height()
  })
}
