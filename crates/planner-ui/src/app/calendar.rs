use chrono::{
  Datelike,
  NaiveDate,
  Weekday
};
use planner_core::calendar::{
  month_grid,
  period_title,
  shift_focus,
  week_days,
  weekday_labels
};
use planner_core::{
  CalendarViewMode,
  Event,
  PlannerStore,
  ProjectId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

const MAX_BADGES_PER_CELL: usize = 3;

#[derive(Properties, PartialEq)]
pub struct CalendarPanelProps {
  pub focus:        NaiveDate,
  pub today:        NaiveDate,
  pub view:         CalendarViewMode,
  pub week_start:   Weekday,
  pub store:        PlannerStore,
  #[prop_or_default]
  pub scope:        Option<ProjectId>,
  #[prop_or_default]
  pub heading:      Option<String>,
  pub on_navigate:  Callback<NaiveDate>,
  pub on_view:
    Callback<CalendarViewMode>,
  pub on_add_event: Callback<()>
}

#[function_component(CalendarPanel)]
pub fn calendar_panel(
  props: &CalendarPanelProps
) -> Html {
  let step = |delta: i64| {
    let on_navigate =
      props.on_navigate.clone();
    let focus = props.focus;
    let view = props.view;
    Callback::from(move |_: MouseEvent| {
      on_navigate.emit(shift_focus(
        focus, view, delta
      ))
    })
  };
  let on_today = {
    let on_navigate =
      props.on_navigate.clone();
    let today = props.today;
    Callback::from(move |_: MouseEvent| {
      on_navigate.emit(today)
    })
  };
  let on_add_event = {
    let on_add_event =
      props.on_add_event.clone();
    Callback::from(move |_: MouseEvent| {
      on_add_event.emit(())
    })
  };
  let on_drill = {
    let on_navigate =
      props.on_navigate.clone();
    let on_view = props.on_view.clone();
    Callback::from(
      move |(day, view): (
        NaiveDate,
        CalendarViewMode
      )| {
        on_navigate.emit(day);
        on_view.emit(view);
      }
    )
  };

  html! {
      <div class="calendar-panel">
          {
              if let Some(heading) = props.heading.clone() {
                  html! { <h2 class="calendar-heading">{ heading }</h2> }
              } else {
                  html! {}
              }
          }
          <div class="calendar-toolbar">
              <div class="calendar-nav">
                  <button type="button" class="btn" onclick={step(-1)}>{ "‹" }</button>
                  <button type="button" class="btn" onclick={on_today}>{ "Today" }</button>
                  <button type="button" class="btn" onclick={step(1)}>{ "›" }</button>
              </div>
              <div class="calendar-title">
                  { period_title(props.view, props.focus, props.week_start) }
              </div>
              <div class="view-mode-buttons">
                  {
                      for CalendarViewMode::all().into_iter().map(|view| {
                          let on_view = props.on_view.clone();
                          let is_active = props.view == view;
                          html! {
                              <button
                                  type="button"
                                  class={classes!("view-mode-button", is_active.then_some("active"))}
                                  onclick={Callback::from(move |_| on_view.emit(view))}
                              >
                                  { view.label() }
                              </button>
                          }
                      })
                  }
              </div>
              <button type="button" class="add-event-button" onclick={on_add_event}>{ "+ Add Event" }</button>
          </div>
          { render_calendar_view(props.view, props.focus, props.today, props.week_start, &props.store, props.scope.as_ref(), on_drill) }
      </div>
  }
}

include!("calendar_views/render_calendar_view.rs");
include!("calendar_views/render_calendar_month_view.rs");
include!("calendar_views/render_calendar_week_view.rs");
include!("calendar_views/render_calendar_day_view.rs");
include!("calendar_views/render_event_badges.rs");
