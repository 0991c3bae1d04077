use planner_core::Project;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::route::Route;

#[derive(Clone, PartialEq)]
pub struct ProjectCard {
  pub project:     Project,
  pub event_count: usize
}

#[derive(Properties, PartialEq)]
pub struct ProjectSelectionProps {
  pub projects:       Vec<ProjectCard>,
  pub on_add_project: Callback<()>
}

#[function_component(ProjectSelection)]
pub fn project_selection(
  props: &ProjectSelectionProps
) -> Html {
  let on_add = {
    let on_add_project =
      props.on_add_project.clone();
    Callback::from(move |_: MouseEvent| {
      on_add_project.emit(())
    })
  };

  html! {
      <section class="project-selection">
          <div class="project-selection-head">
              <h2>{ "Projects" }</h2>
              <button type="button" class="add-event-button" onclick={on_add}>{ "+ Add Project" }</button>
          </div>
          {
              if props.projects.is_empty() {
                  html! { <div class="empty">{ "No projects yet." }</div> }
              } else {
                  html! {
                      <div class="project-grid">
                          {
                              for props.projects.iter().map(|card| {
                                  let route = Route::ProjectCalendar {
                                      project_id: card.project.id.to_string(),
                                  };
                                  html! {
                                      <Link<Route> to={route} classes={classes!("project-card")}>
                                          <span class="project-name">{ card.project.name.clone() }</span>
                                          <span class="badge">{ card.event_count }</span>
                                      </Link<Route>>
                                  }
                              })
                          }
                      </div>
                  }
              }
          }
      </section>
  }
}
