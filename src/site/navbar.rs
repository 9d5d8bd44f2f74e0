use super::shadow_fragment;

/// Scroll offset in pixels past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

impl MenuIcon {
    /// Feather icon name
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Menu => "menu",
            MenuIcon::Close => "x",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavbarState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Flips the mobile menu and returns the icon to show afterwards.
    pub fn toggle_menu(&mut self) -> MenuIcon {
        self.menu_open = !self.menu_open;
        self.icon()
    }

    pub fn icon(&self) -> MenuIcon {
        if self.menu_open {
            MenuIcon::Close
        } else {
            MenuIcon::Menu
        }
    }
}

const BRAND: &str = "SelfieBox Eventz";
const INSTAGRAM_URL: &str = "https://www.instagram.com/selfieebox_eventz?igsh=ZjdteW1xZm55ZDAx";
const SECTIONS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#services", "Services"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

const STYLE: &str = r#"<style>
  .navbar { transition: all 0.3s ease; }
  .navbar.scrolled {
    background-color: rgba(107, 70, 193, 0.95);
    backdrop-filter: blur(10px);
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  }
  .nav-link { position: relative; }
  .nav-link:after {
    content: '';
    position: absolute;
    width: 0;
    height: 2px;
    bottom: -2px;
    left: 0;
    background-color: white;
    transition: width 0.3s ease;
  }
  .nav-link:hover:after { width: 100%; }
  .mobile-menu { max-height: 0; overflow: hidden; transition: max-height 0.3s ease-out; }
  .mobile-menu.open { max-height: 300px; }
</style>"#;

fn section_links(extra_class: &str) -> String {
    SECTIONS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}" class="nav-link{extra_class}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Renders the navbar for `state` as a `<wageflow-navbar>` element, with a
/// script that keeps it in sync client-side.
pub fn render_navbar(state: &NavbarState) -> String {
    let nav_class = if state.scrolled { "navbar scrolled" } else { "navbar" };
    let menu_class = if state.menu_open { "mobile-menu open" } else { "mobile-menu" };

    let markup = format!(
        r##"<nav class="{nav_class} fixed w-full z-50 text-white py-4 px-6 md:px-12">
  <div class="container mx-auto flex justify-between items-center">
    <a href="/" class="flex items-center gap-2">
      <div class="bg-white text-purple-600 p-2 rounded-lg"><i data-feather="camera" class="w-6 h-6"></i></div>
      <span class="text-xl font-bold">{BRAND}</span>
    </a>
    <div class="hidden md:flex items-center gap-8">
      {desktop_links}
      <a href="{INSTAGRAM_URL}" target="_blank" class="bg-white text-purple-600 hover:bg-gray-100 px-6 py-2 rounded-full font-medium flex items-center gap-2"><i data-feather="instagram" class="w-4 h-4"></i> Follow Us</a>
    </div>
    <button class="md:hidden focus:outline-none" id="mobile-menu-button"><i data-feather="{icon}" class="w-6 h-6"></i></button>
  </div>
  <div class="{menu_class} container mx-auto md:hidden" id="mobile-menu">
    <div class="flex flex-col gap-4 py-4">
      {mobile_links}
      <a href="{INSTAGRAM_URL}" target="_blank" class="flex items-center gap-2 py-2"><i data-feather="instagram" class="w-4 h-4"></i> Follow Us</a>
    </div>
  </div>
</nav>"##,
        desktop_links = section_links(""),
        mobile_links = section_links(" block py-2"),
        icon = state.icon().glyph(),
    );

    let script = format!(
        r#"const button = root.getElementById('mobile-menu-button');
    const menu = root.getElementById('mobile-menu');
    const navbar = root.querySelector('.navbar');
    button.addEventListener('click', function () {{
      menu.classList.toggle('open');
      const glyph = menu.classList.contains('open') ? '{close}' : '{open}';
      button.innerHTML = '<i data-feather="' + glyph + '" class="w-6 h-6"></i>';
      renderIcons(button);
    }});
    window.addEventListener('scroll', function () {{
      navbar.classList.toggle('scrolled', window.scrollY > {threshold});
    }});"#,
        close = MenuIcon::Close.glyph(),
        open = MenuIcon::Menu.glyph(),
        threshold = SCROLL_THRESHOLD,
    );

    shadow_fragment("wageflow-navbar", STYLE, &markup, &script)
}
