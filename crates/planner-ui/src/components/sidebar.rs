use planner_core::AnchorRect;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_node_ref
};
use yew_router::prelude::Link;

use super::anchor_of;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub open:          bool,
  pub active:        Route,
  pub on_toggle:     Callback<()>,
  pub on_open_theme:
    Callback<Option<AnchorRect>>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let theme_button = use_node_ref();

  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(())
    })
  };
  let on_theme = {
    let on_open_theme =
      props.on_open_theme.clone();
    let theme_button = theme_button.clone();
    Callback::from(move |_: MouseEvent| {
      on_open_theme
        .emit(anchor_of(&theme_button))
    })
  };

  let make_item =
    |route: Route, label: &str| {
      let active = props.active.as_key()
        == route.as_key();
      html! {
          <Link<Route> to={route} classes={classes!("item", active.then_some("active"))}>
              { label.to_string() }
          </Link<Route>>
      }
    };

  html! {
      <aside class={classes!("sidebar", props.open.then_some("open"))}>
          <div class="sidebar-head">
              <span class="header">{ "Planner" }</span>
              <button type="button" class="btn sidebar-toggle" onclick={on_toggle}>{ "«" }</button>
          </div>
          <nav class="sidebar-nav">
              { make_item(Route::Projects, "Projects") }
              { make_item(Route::Calendar, "Calendar") }
          </nav>
          <button
              type="button"
              class="btn sidebar-theme"
              ref={theme_button}
              onclick={on_theme}
          >
              { "Theme" }
          </button>
      </aside>
  }
}
