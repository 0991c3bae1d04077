use planner_core::{
  SYNC_SELECTOR,
  ThemeColor,
  style_for_classes
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Re-apply the accent color to every
/// chrome node matched by
/// `SYNC_SELECTOR`, plus the page body.
///
/// Must run after render, once the nodes
/// of the current route exist.
pub fn sync_theme_styles(
  theme: &ThemeColor
) {
  let Some(document) = web_sys::window()
    .and_then(|window| window.document())
  else {
    return;
  };

  if let Some(body) = document.body() {
    let _ = body.style().set_property(
      "background-color",
      theme.as_str()
    );
  }

  let nodes = match document
    .query_selector_all(SYNC_SELECTOR)
  {
    | Ok(nodes) => nodes,
    | Err(error) => {
      tracing::error!(
        ?error,
        "theme selector query failed"
      );
      return;
    }
  };

  let mut patched = 0_u32;
  for index in 0..nodes.length() {
    let Some(element) = nodes
      .item(index)
      .and_then(|node| {
        node.dyn_into::<HtmlElement>().ok()
      })
    else {
      continue;
    };

    let patch = style_for_classes(
      &element.class_name(),
      theme
    );
    let style = element.style();
    for (name, value) in patch.properties() {
      let _ = style.set_property(name, value);
    }
    patched += 1;
  }

  tracing::trace!(
    theme = %theme,
    patched,
    "synced theme styles"
  );
}

#[cfg(test)]
mod tests {
  const STYLES_CSS: &str =
    include_str!("../../styles.css");

  fn rule_body(selector: &str) -> &'static str {
    let start = STYLES_CSS
      .find(&format!("{selector} {{"))
      .expect("rule present");
    let body = &STYLES_CSS[start..];
    let end = body.find('}').expect("rule closed");
    &body[..end]
  }

  #[test]
  fn late_badges_and_primary_buttons_have_a_themed_background(
  ) {
    for selector in [
      ".badge",
      ".add-event-button",
      ".event-type-btn-wrapper button.active"
    ] {
      assert!(
        rule_body(selector).contains(
          "background-color: var(--theme-color"
        ),
        "{selector} lacks a themed background"
      );
    }
    assert!(STYLES_CSS.contains(
      ".btn.primary,\n.add-event-button {"
    ));
  }
}
