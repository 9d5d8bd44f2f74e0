//! Static marketing site fragments.
//!
//! Each fragment is a custom element whose markup and styles live in a
//! declarative shadow root, so host page CSS and ids never collide with it.
//! The trailing script only touches nodes inside that root.

pub mod footer;
pub mod navbar;

/// Swaps `data-feather` placeholders inside `root` for inline SVG.
/// `feather.replace()` only walks the light DOM.
const ICONS_FN: &str = r#"function renderIcons(root) {
      if (!window.feather) { return; }
      root.querySelectorAll('[data-feather]').forEach(function (el) {
        const icon = feather.icons[el.getAttribute('data-feather')];
        if (icon) { el.outerHTML = icon.toSvg({ class: el.getAttribute('class') || '' }); }
      });
    }"#;

/// Wraps `style` and `markup` in `<tag>` with an open shadow root, followed by
/// a script that runs `body` with `host`, `root` and `renderIcons` in scope.
pub(crate) fn shadow_fragment(tag: &str, style: &str, markup: &str, body: &str) -> String {
    format!(
        r#"<{tag}>
<template shadowrootmode="open">
{style}
{markup}
</template>
</{tag}>
<script>
  (function () {{
    const host = document.currentScript.previousElementSibling;
    const root = host.shadowRoot || host.attachShadow({{ mode: 'open' }});
    if (!root.firstElementChild) {{
      const template = host.querySelector('template');
      if (template) {{ root.appendChild(template.content.cloneNode(true)); template.remove(); }}
    }}
    {ICONS_FN}
    {body}
    renderIcons(root);
  }})();
</script>"#
    )
}
