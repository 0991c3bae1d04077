mod calendar;
mod storage;
mod style_sync;

use std::rc::Rc;

use chrono::{
  NaiveDate,
  Weekday
};
use gloo::console::log;
use planner_core::calendar::today;
use planner_core::{
  AnchorRect,
  CalendarViewMode,
  Dialog,
  EventDraft,
  ModalGate,
  PlannerConfig,
  PlannerStore,
  ProjectId,
  ThemeColor,
  ThemeStore
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Switch,
  use_route
};

use self::calendar::CalendarPanel;
use self::storage::{
  BrowserStorage,
  load_planner_config
};
use self::style_sync::sync_theme_styles;
use crate::components::{
  EventForm,
  Header,
  IconBar,
  Modal,
  ProjectCard,
  ProjectForm,
  ProjectSelection,
  Sidebar,
  ThemeModal
};
use crate::route::Route;

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_memo((), |_| load_planner_config());
  let today_date = {
    let config = config.clone();
    use_memo((), move |_| {
      today(config.resolved_timezone())
    })
  };
  let theme_store = {
    let config = config.clone();
    use_mut_ref(move || {
      ThemeStore::new(
        BrowserStorage,
        config.theme_storage_key.clone(),
        config.default_color()
      )
    })
  };
  let theme = {
    let theme_store = theme_store.clone();
    use_state(move || theme_store.borrow().get())
  };
  let sidebar_open = {
    let open = config.sidebar_open;
    use_state(move || open)
  };
  let focus_date = {
    let today_date = *today_date;
    use_state(move || today_date)
  };
  let view = {
    let initial = config.default_view_mode();
    use_state(move || initial)
  };
  let store = use_state(PlannerStore::new);
  let modals = use_state(ModalGate::new);
  let multi_day = use_state(|| false);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let theme_store = theme_store.clone();
    let theme = theme.clone();
    use_effect_with((), move |_| {
      let subscription = theme_store
        .borrow_mut()
        .subscribe(move |color| {
          theme.set(color.clone())
        });
      move || {
        theme_store
          .borrow_mut()
          .unsubscribe(subscription)
      }
    });
  }

  let on_toggle_sidebar = {
    let sidebar_open = sidebar_open.clone();
    Callback::from(move |()| {
      sidebar_open.set(!*sidebar_open)
    })
  };

  let on_navigate = {
    let focus_date = focus_date.clone();
    Callback::from(move |date: NaiveDate| {
      focus_date.set(date)
    })
  };

  let on_view_change = {
    let view = view.clone();
    Callback::from(
      move |next: CalendarViewMode| {
        tracing::debug!(
          view = %next.as_key(),
          "calendar view changed"
        );
        view.set(next)
      }
    )
  };

  let on_open_event = {
    let modals = modals.clone();
    Callback::from(move |()| {
      let mut gate = *modals;
      gate.open_event();
      modals.set(gate);
    })
  };

  let on_close_event = {
    let modals = modals.clone();
    Callback::from(move |()| {
      let mut gate = *modals;
      gate.close_event();
      modals.set(gate);
    })
  };

  let on_save_event = {
    let store = store.clone();
    let modals = modals.clone();
    Callback::from(
      move |(draft, project_id): (
        EventDraft,
        Option<ProjectId>
      )| {
        let mut next = (*store).clone();
        let event =
          next.add_event(draft, project_id);
        ui_debug(
          "event.saved",
          &format!(
            "{} ({} events)",
            event.title,
            next.events().len()
          )
        );
        store.set(next);

        let mut gate = *modals;
        gate.close_event();
        modals.set(gate);
      }
    )
  };

  let on_open_project = {
    let modals = modals.clone();
    Callback::from(move |()| {
      let mut gate = *modals;
      gate.open_project();
      modals.set(gate);
    })
  };

  let on_close_project = {
    let modals = modals.clone();
    Callback::from(move |()| {
      let mut gate = *modals;
      gate.close_project();
      modals.set(gate);
    })
  };

  let on_save_project = {
    let store = store.clone();
    let modals = modals.clone();
    Callback::from(move |name: String| {
      let mut next = (*store).clone();
      let project = next.add_project(name);
      ui_debug(
        "project.saved",
        &format!(
          "{} {}",
          project.id, project.name
        )
      );
      store.set(next);

      let mut gate = *modals;
      gate.close_project();
      modals.set(gate);
    })
  };

  let on_open_theme = {
    let modals = modals.clone();
    Callback::from(
      move |anchor: Option<AnchorRect>| {
        let mut gate = *modals;
        gate.open_theme(anchor);
        modals.set(gate);
      }
    )
  };

  let on_close_theme = {
    let modals = modals.clone();
    Callback::from(move |()| {
      let mut gate = *modals;
      gate.close_theme();
      modals.set(gate);
    })
  };

  let on_select_theme = {
    let theme_store = theme_store.clone();
    let modals = modals.clone();
    Callback::from(move |color: ThemeColor| {
      theme_store.borrow_mut().set(color);

      let mut gate = *modals;
      gate.close_theme();
      modals.set(gate);
    })
  };

  let on_set_multi_day = {
    let multi_day = multi_day.clone();
    Callback::from(move |value: bool| {
      multi_day.set(value)
    })
  };

  html! {
      <BrowserRouter>
          <AppShell
              config={config.clone()}
              today={*today_date}
              sidebar_open={*sidebar_open}
              focus_date={*focus_date}
              view={*view}
              store={(*store).clone()}
              modals={*modals}
              theme={(*theme).clone()}
              multi_day={*multi_day}
              {on_toggle_sidebar}
              {on_navigate}
              {on_view_change}
              {on_open_event}
              {on_close_event}
              {on_save_event}
              {on_open_project}
              {on_close_project}
              {on_save_project}
              {on_open_theme}
              {on_close_theme}
              {on_select_theme}
              {on_set_multi_day}
          />
      </BrowserRouter>
  }
}

/// Everything the routed pages read,
/// paired with the callbacks that
/// write it back into `App`.
#[derive(Properties, PartialEq, Clone)]
struct AppShellProps {
  config:            Rc<PlannerConfig>,
  today:             NaiveDate,
  sidebar_open:      bool,
  focus_date:        NaiveDate,
  view:              CalendarViewMode,
  store:             PlannerStore,
  modals:            ModalGate,
  theme:             ThemeColor,
  multi_day:         bool,
  on_toggle_sidebar: Callback<()>,
  on_navigate:       Callback<NaiveDate>,
  on_view_change:
    Callback<CalendarViewMode>,
  on_open_event:     Callback<()>,
  on_close_event:    Callback<()>,
  on_save_event: Callback<(
    EventDraft,
    Option<ProjectId>
  )>,
  on_open_project:   Callback<()>,
  on_close_project:  Callback<()>,
  on_save_project:   Callback<String>,
  on_open_theme:
    Callback<Option<AnchorRect>>,
  on_close_theme:    Callback<()>,
  on_select_theme:   Callback<ThemeColor>,
  on_set_multi_day:  Callback<bool>
}

/// Everything that can add, drop or
/// restyle a node matched by
/// `SYNC_SELECTOR`. The shell re-syncs
/// theme styles whenever this changes.
#[derive(Debug, Clone, PartialEq)]
struct StyleSyncKey {
  theme:        ThemeColor,
  view:         CalendarViewMode,
  focus_date:   NaiveDate,
  sidebar_open: bool,
  projects:     usize,
  events:       usize
}

impl AppShellProps {
  fn week_start(&self) -> Weekday {
    self.config.week_start_day()
  }

  fn sync_key(&self) -> StyleSyncKey {
    StyleSyncKey {
      theme:        self.theme.clone(),
      view:         self.view,
      focus_date:   self.focus_date,
      sidebar_open: self.sidebar_open,
      projects:     self.store.projects().len(),
      events:       self.store.events().len()
    }
  }
}

#[function_component(AppShell)]
fn app_shell(
  props: &AppShellProps
) -> Html {
  let route = use_route::<Route>()
    .unwrap_or(Route::NotFound);

  {
    use_effect_with(
      (props.sync_key(), route.clone()),
      move |(key, route)| {
        sync_theme_styles(&key.theme);
        ui_debug(
          "theme.sync",
          &format!(
            "theme={} route={} view={} \
             events={}",
            key.theme,
            route.as_key(),
            key.view.as_key(),
            key.events
          )
        );
        || ()
      }
    );
  }

  let render = {
    let props = props.clone();
    move |route: Route| {
      render_route(route, &props)
    }
  };
  let open = props.sidebar_open;

  html! {
      <div class="App" style={format!("background-color: {0}; --theme-color: {0};", props.theme)}>
          <div class={classes!("container", open.then_some("sidebar-open"))}>
              <div class="inner-container">
                  <Header title="Planner" />
                  <div class="main-content">
                      <div class={classes!("sidebar-container", if open { "open" } else { "hidden" })}>
                          <Sidebar
                              open={open}
                              active={route.clone()}
                              on_toggle={props.on_toggle_sidebar.clone()}
                              on_open_theme={props.on_open_theme.clone()}
                          />
                      </div>
                      <div class={classes!("icon-bar-container", if open { "hidden" } else { "open" })}>
                          <IconBar
                              on_toggle={props.on_toggle_sidebar.clone()}
                              on_open_theme={props.on_open_theme.clone()}
                          />
                      </div>
                      <Switch<Route> render={render} />
                  </div>
              </div>
          </div>
          { render_project_modal(props) }
          { render_theme_modal(props) }
      </div>
  }
}

fn render_route(
  route: Route,
  props: &AppShellProps
) -> Html {
  match route {
    | Route::Projects => {
      render_projects_page(props)
    }
    | Route::Calendar => {
      render_calendar_page(props, None)
    }
    | Route::ProjectCalendar {
      ..
    } => {
      render_calendar_page(
        props,
        route.project_scope()
      )
    }
    | Route::NotFound => {
      html! { <div class="content-wrapper" /> }
    }
  }
}

include!("app/view_components/projects_page.rs");
include!("app/view_components/calendar_page.rs");
include!("app/view_components/add_event_modal.rs");
include!("app/view_components/project_modal.rs");
include!("app/view_components/theme_modal.rs");

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
