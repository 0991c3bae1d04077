use chrono::NaiveDate;
use planner_core::{
  EventDraft,
  EventFormInput
};
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
pub struct EventFormProps {
  pub initial_date: NaiveDate,
  pub multi_day:    bool,
  pub on_save:      Callback<EventDraft>,
  pub on_cancel:    Callback<()>
}

#[function_component(EventForm)]
pub fn event_form(
  props: &EventFormProps
) -> Html {
  let input = {
    let initial_date = props.initial_date;
    let multi_day = props.multi_day;
    use_state(move || {
      EventFormInput::new(
        initial_date,
        multi_day
      )
    })
  };
  let error = use_state(|| None::<String>);

  let field = |apply: fn(
    &mut EventFormInput,
    String
  )| {
    let input = input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let target: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*input).clone();
        apply(&mut next, target.value());
        input.set(next);
      }
    )
  };

  let on_submit = {
    let input = input.clone();
    let error = error.clone();
    let on_save = props.on_save.clone();
    let multi_day = props.multi_day;
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let mut current = (*input).clone();
      current.set_multi_day(multi_day);
      match current.into_draft() {
        | Ok(draft) => {
          error.set(None);
          on_save.emit(draft);
        }
        | Err(err) => {
          tracing::debug!(
            error = %format!("{err:#}"),
            "event form rejected"
          );
          error.set(Some(format!("{err:#}")));
        }
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
      <form class="event-form" onsubmit={on_submit}>
          <div class="field">
              <label>{ "Title" }</label>
              <input
                  value={input.title.clone()}
                  oninput={field(|form, value| form.title = value)}
                  placeholder="Event title"
              />
          </div>
          <div class="field-row">
              <div class="field">
                  <label>{ if props.multi_day { "Start date" } else { "Date" } }</label>
                  <input
                      type="date"
                      value={input.start_date.clone()}
                      oninput={field(|form, value| form.start_date = value)}
                  />
              </div>
              <div class="field">
                  <label>{ "Start time" }</label>
                  <input
                      type="time"
                      value={input.start_time.clone()}
                      oninput={field(|form, value| form.start_time = value)}
                  />
              </div>
          </div>
          <div class="field-row">
              {
                  if props.multi_day {
                      html! {
                          <div class="field">
                              <label>{ "End date" }</label>
                              <input
                                  type="date"
                                  value={input.end_date.clone()}
                                  oninput={field(|form, value| form.end_date = value)}
                              />
                          </div>
                      }
                  } else {
                      html! {}
                  }
              }
              <div class="field">
                  <label>{ "End time" }</label>
                  <input
                      type="time"
                      value={input.end_time.clone()}
                      oninput={field(|form, value| form.end_time = value)}
                  />
              </div>
          </div>
          {
              if let Some(message) = (*error).clone() {
                  html! { <div class="form-error">{ message }</div> }
              } else {
                  html! {}
              }
          }
          <div class="footer">
              <button type="button" class="btn" onclick={on_cancel}>{ "Cancel" }</button>
              <button type="submit" class="btn primary">{ "Save" }</button>
          </div>
      </form>
  }
}
