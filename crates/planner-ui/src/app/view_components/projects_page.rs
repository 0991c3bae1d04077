fn render_projects_page(
  props: &AppShellProps
) -> Html {
  let cards = props
    .store
    .projects()
    .iter()
    .map(|project| ProjectCard {
      project:     project.clone(),
      event_count: props
        .store
        .event_count_for(&project.id)
    })
    .collect::<Vec<_>>();

  html! {
      <div class={classes!("content-wrapper", "project-content-wrapper", props.sidebar_open.then_some("sidebar-open"))}>
          <ProjectSelection
              projects={cards}
              on_add_project={props.on_open_project.clone()}
          />
      </div>
  }
}
