use planner_core::form::project_name;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct ProjectFormProps {
  pub on_save:   Callback<String>,
  pub on_cancel: Callback<()>
}

#[function_component(ProjectForm)]
pub fn project_form(
  props: &ProjectFormProps
) -> Html {
  let name = use_state(String::new);

  let on_input = {
    let name = name.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        name.set(input.value());
      }
    )
  };
  let on_submit = {
    let name = name.clone();
    let on_save = props.on_save.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if let Some(name) = project_name(&name)
      {
        on_save.emit(name);
      }
    })
  };
  let on_cancel = {
    let on_cancel = props.on_cancel.clone();
    Callback::from(move |_: MouseEvent| {
      on_cancel.emit(())
    })
  };

  html! {
      <form class="project-form" onsubmit={on_submit}>
          <div class="header">{ "New Project" }</div>
          <div class="field">
              <label>{ "Project Name" }</label>
              <input
                  value={(*name).clone()}
                  oninput={on_input}
                  placeholder="Project name"
              />
          </div>
          <div class="footer">
              <button type="button" class="btn" onclick={on_cancel}>{ "Cancel" }</button>
              <button
                  type="submit"
                  class="btn primary"
                  disabled={project_name(&name).is_none()}
              >
                  { "Create" }
              </button>
          </div>
      </form>
  }
}
