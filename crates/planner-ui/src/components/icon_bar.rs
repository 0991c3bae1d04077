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
pub struct IconBarProps {
  pub on_toggle:     Callback<()>,
  pub on_open_theme:
    Callback<Option<AnchorRect>>
}

/// Collapsed stand-in for the sidebar.
#[function_component(IconBar)]
pub fn icon_bar(
  props: &IconBarProps
) -> Html {
  let theme_icon = use_node_ref();

  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(())
    })
  };
  let on_theme = {
    let on_open_theme =
      props.on_open_theme.clone();
    let theme_icon = theme_icon.clone();
    Callback::from(move |_: MouseEvent| {
      on_open_theme
        .emit(anchor_of(&theme_icon))
    })
  };

  html! {
      <div class="icon-bar">
          <button type="button" class="icon-btn" title="Open sidebar" onclick={on_toggle}>{ "☰" }</button>
          <Link<Route> to={Route::Projects} classes={classes!("icon-btn")}>{ "▦" }</Link<Route>>
          <Link<Route> to={Route::Calendar} classes={classes!("icon-btn")}>{ "▤" }</Link<Route>>
          <button
              type="button"
              class="icon-btn"
              title="Theme"
              ref={theme_icon}
              onclick={on_theme}
          >
              { "◐" }
          </button>
      </div>
  }
}
