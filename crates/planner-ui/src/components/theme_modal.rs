use planner_core::{
  AnchorRect,
  NamedTheme,
  ThemeColor,
  palette_name
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ThemeModalProps {
  pub palette:   Vec<NamedTheme>,
  pub current:   ThemeColor,
  pub anchor:    Option<AnchorRect>,
  pub on_close:  Callback<()>,
  pub on_select: Callback<ThemeColor>
}

/// Color picker popover, hung below
/// whichever control opened it.
#[function_component(ThemeModal)]
pub fn theme_modal(
  props: &ThemeModalProps
) -> Html {
  let on_backdrop = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(())
    })
  };
  let on_custom = {
    let on_select = props.on_select.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      on_select.emit(ThemeColor::new(
        input.value()
      ));
    })
  };
  let selected_name =
    selected_swatch(&props.palette, &props.current);
  let position = props
    .anchor
    .map(|anchor| {
      let (left, top) =
        anchor.popover_position();
      format!(
        "position: fixed; left: {left}px; \
         top: {top}px;"
      )
    })
    .unwrap_or_default();

  html! {
      <div class="theme-modal-overlay" onclick={on_backdrop}>
          <div
              class="theme-modal"
              style={position}
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              <div class="header">{ "Theme" }</div>
              <div class="theme-swatches">
                  {
                      for props.palette.iter().map(|theme| {
                          let color = theme.color.clone();
                          let selected = selected_name == Some(theme.name.as_str());
                          let swatch_style = format!("background-color: {color};");
                          let on_select = props.on_select.clone();
                          html! {
                              <button
                                  type="button"
                                  class={classes!("theme-swatch", selected.then_some("selected"))}
                                  style={swatch_style}
                                  title={theme.name.clone()}
                                  onclick={Callback::from(move |_| on_select.emit(color.clone()))}
                              >
                                  { theme.name.clone() }
                              </button>
                          }
                      })
                  }
              </div>
              <label class="theme-custom">
                  <span>{ "Custom" }</span>
                  <input
                      type="color"
                      value={props.current.to_string()}
                      onchange={on_custom}
                  />
              </label>
          </div>
      </div>
  }
}

/// Palette entry matching the current
/// color, ignoring hex case.
fn selected_swatch<'a>(
  palette: &'a [NamedTheme],
  current: &ThemeColor
) -> Option<&'a str> {
  palette_name(palette, current)
}

#[cfg(test)]
mod tests {
  use planner_core::theme::builtin_palette;

  use super::*;

  #[test]
  fn stored_color_case_still_marks_its_swatch() {
    let palette = builtin_palette();
    assert_eq!(
      selected_swatch(
        &palette,
        &ThemeColor::new("#4caf50")
      ),
      Some("Green")
    );
    assert_eq!(
      selected_swatch(
        &palette,
        &ThemeColor::new("#003CFF")
      ),
      Some("Default")
    );
    assert_eq!(
      selected_swatch(
        &palette,
        &ThemeColor::new("#abcdef")
      ),
      None
    );
  }
}
