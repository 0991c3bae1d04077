use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub title: String
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  html! {
      <header class="header">
          <div class="header-brand">{ props.title.clone() }</div>
          <nav class="header-menu">
              <span class="dropdown">{ "Workspace" }</span>
          </nav>
          <div class="header-profiles">
              <span class="profile">{ "ME" }</span>
              <span class="more-profiles">{ "+" }</span>
          </div>
      </header>
  }
}
