fn render_theme_modal(
  props: &AppShellProps
) -> Html {
  if !props.modals.is_open(Dialog::ThemePicker)
  {
    return html! {};
  }

  html! {
      <ThemeModal
          palette={props.config.themes.clone()}
          current={props.theme.clone()}
          anchor={props.modals.theme_anchor()}
          on_close={props.on_close_theme.clone()}
          on_select={props.on_select_theme.clone()}
      />
  }
}
