fn render_project_modal(
  props: &AppShellProps
) -> Html {
  if !props.modals.is_open(Dialog::AddProject)
  {
    return html! {};
  }

  html! {
      <Modal on_close={props.on_close_project.clone()} class="modal-sm">
          <ProjectForm
              on_save={props.on_save_project.clone()}
              on_cancel={props.on_close_project.clone()}
          />
      </Modal>
  }
}
