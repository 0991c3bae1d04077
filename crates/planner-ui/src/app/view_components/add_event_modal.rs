#[derive(Properties, PartialEq)]
struct AddEventModalProps {
  open:             bool,
  project_id:       Option<ProjectId>,
  initial_date:     NaiveDate,
  multi_day:        bool,
  on_set_multi_day: Callback<bool>,
  on_save: Callback<(
    EventDraft,
    Option<ProjectId>
  )>,
  on_close:         Callback<()>
}

#[function_component(AddEventModal)]
fn add_event_modal(
  props: &AddEventModalProps
) -> Html {
  if !props.open {
    return html! {};
  }

  let on_save = {
    let on_save = props.on_save.clone();
    let project_id =
      props.project_id.clone();
    Callback::from(
      move |draft: EventDraft| {
        on_save.emit((
          draft,
          project_id.clone()
        ))
      }
    )
  };
  let toggle = |value: bool| {
    let on_set_multi_day =
      props.on_set_multi_day.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        on_set_multi_day.emit(value)
      }
    )
  };

  html! {
      <Modal on_close={props.on_close.clone()}>
          <div class="event-type-selector">
              <div class="event-type-btn-wrapper">
                  <button
                      type="button"
                      class={classes!((!props.multi_day).then_some("active"))}
                      onclick={toggle(false)}
                  >
                      { "Single Day" }
                  </button>
                  <button
                      type="button"
                      class={classes!(props.multi_day.then_some("active"))}
                      onclick={toggle(true)}
                  >
                      { "Multi Day" }
                  </button>
              </div>
          </div>
          <EventForm
              initial_date={props.initial_date}
              multi_day={props.multi_day}
              on_save={on_save}
              on_cancel={props.on_close.clone()}
          />
      </Modal>
  }
}
