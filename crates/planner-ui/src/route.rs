use planner_core::ProjectId;
use yew_router::Routable;

#[derive(
  Clone, Debug, PartialEq, Routable,
)]
pub enum Route {
  #[at("/")]
  Projects,
  #[at("/calendar")]
  Calendar,
  #[at("/calendar/:project_id")]
  ProjectCalendar {
    project_id: String
  },
  #[not_found]
  #[at("/404")]
  NotFound
}

impl Route {
  /// Project the calendar is scoped to.
  /// `None` on every route but the
  /// per-project calendar.
  pub fn project_scope(
    &self
  ) -> Option<ProjectId> {
    match self {
      | Self::ProjectCalendar {
        project_id
      } => Some(ProjectId::new(
        project_id.as_str()
      )),
      | _ => None
    }
  }

  pub fn as_key(&self) -> &'static str {
    match self {
      | Self::Projects => "projects",
      | Self::Calendar => "calendar",
      | Self::ProjectCalendar {
        ..
      } => "project-calendar",
      | Self::NotFound => "not-found"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognizes_the_three_pages() {
    assert_eq!(
      Route::recognize("/"),
      Some(Route::Projects)
    );
    assert_eq!(
      Route::recognize("/calendar"),
      Some(Route::Calendar)
    );
    assert_eq!(
      Route::recognize("/calendar/abc-123"),
      Some(Route::ProjectCalendar {
        project_id: "abc-123".to_string()
      })
    );
  }

  #[test]
  fn only_project_calendar_is_scoped() {
    let id = ProjectId::generate();
    let route = Route::ProjectCalendar {
      project_id: id.to_string()
    };
    assert_eq!(route.project_scope(), Some(id));
    assert_eq!(
      Route::Calendar.project_scope(),
      None
    );
    assert_eq!(
      Route::Projects.project_scope(),
      None
    );
  }

  #[test]
  fn project_route_renders_its_path() {
    let route = Route::ProjectCalendar {
      project_id: "p1".to_string()
    };
    assert_eq!(route.to_path(), "/calendar/p1");
  }
}
