use yew::{
  Callback,
  Children,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
  pub on_close: Callback<()>,
  #[prop_or_default]
  pub class:    Option<String>,
  #[prop_or_default]
  pub children: Children
}

/// Overlay that closes on a backdrop
/// click. Mount it only while open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
  let on_backdrop = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(())
    })
  };

  html! {
      <div class="modal-overlay" onclick={on_backdrop}>
          <div
              class={classes!("modal", props.class.clone())}
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              { for props.children.iter() }
          </div>
      </div>
  }
}
