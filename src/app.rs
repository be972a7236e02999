use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

use crate::browser::{load_site_config, viewport_width, BrowserTheme};
use crate::config::SiteConfig;
use crate::pages::{Contact, NotFound, Overview, Projects};
use crate::sidebar::SidebarState;
use crate::theme::{Mode, ThemeStore};

#[derive(Clone, Copy)]
pub struct ThemeHandle(RwSignal<ThemeStore<BrowserTheme>>);

impl ThemeHandle {
    pub fn mode(&self) -> Mode {
        self.0.with(|store| store.mode())
    }

    pub fn toggle(&self) {
        self.0.update(|store| {
            store.toggle();
        });
    }

    pub fn set(&self, mode: Mode) {
        self.0.update(|store| {
            store.set(mode);
        });
    }
}

#[derive(Clone, Copy)]
pub struct SidebarHandle(RwSignal<SidebarState>);

impl SidebarHandle {
    pub fn is_open(&self) -> bool {
        self.0.get().is_open
    }

    pub fn open(&self) {
        self.0.update(|s| {
            s.open();
        });
    }

    pub fn close(&self) {
        self.0.update(|s| {
            s.close();
        });
    }

    pub fn toggle(&self) {
        self.0.update(|s| {
            s.toggle();
        });
    }

    fn navigated(&self, breakpoint: f64) {
        let width = viewport_width();
        self.0.update(|s| {
            s.navigated(width, breakpoint);
        });
    }
}

struct NavItem {
    path: &'static str,
    label: &'static str,
    description: &'static str,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem { path: "/", label: "Overview", description: "Dashboard & Stats" },
    NavItem { path: "/projects", label: "Projects", description: "Featured Work" },
    NavItem { path: "/contact", label: "Contact", description: "Get In Touch" },
];

#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    let theme = ThemeHandle(RwSignal::new(ThemeStore::initialize(BrowserTheme::new(
        config.theme_storage_key.clone(),
    ))));
    let sidebar = SidebarHandle(RwSignal::new(SidebarState::default()));

    provide_context(config);
    provide_context(theme);
    provide_context(sidebar);

    view! {
        <Router>
            <div class="app-layout">
                <Navbar/>
                <div style="display: flex;">
                    <Sidebar/>
                    <main class="app-main" style="flex: 1; position: relative; padding: 2rem;">
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=path!("/") view=Overview/>
                            <Route path=path!("/projects") view=Projects/>
                            <Route path=path!("/contact") view=Contact/>
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let sidebar = expect_context::<SidebarHandle>();
    let config = expect_context::<SiteConfig>();
    let navigate = use_navigate();

    view! {
        <nav class="navbar">
            <div style="display: flex; align-items: center; gap: 1rem;">
                <button class="ghost" title="Menu" on:click=move |_| sidebar.toggle()>
                    "\u{2630}"
                </button>
                <a href="/" class="brand">
                    <img src="/public/logo.svg" alt="Logo" class="logo"/>
                    <div class="brand-text">
                        <h1>{config.owner_name.clone()}</h1>
                        <div class="muted small">{config.headline.clone()}</div>
                    </div>
                </a>
            </div>
            <div style="display: flex; align-items: center; gap: 1rem;">
                <span class="availability">
                    <span class="pulse"></span>
                    "Available for work"
                </span>
                <button
                    class="ghost"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.mode() == Mode::Light { "\u{263E}" } else { "\u{2600}" }}
                </button>
                <button class="primary" on:click=move |_| navigate("/contact", Default::default())>
                    "Let's Talk"
                </button>
            </div>
        </nav>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<SidebarHandle>();
    let theme = expect_context::<ThemeHandle>();
    let config = expect_context::<SiteConfig>();
    let pathname = use_location().pathname;
    let breakpoint = config.compact_breakpoint_px;

    view! {
        <Show when=move || sidebar.is_open()>
            <div class="overlay" on:click=move |_| sidebar.close()></div>
        </Show>
        <aside class=move || if sidebar.is_open() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <div class="brand">
                    <img src="/public/logo.svg" alt="Logo" class="logo"/>
                    <div class="brand-text">
                        <h2>{config.owner_name.clone()}</h2>
                        <div class="muted small">{config.headline.clone()}</div>
                    </div>
                </div>
                <button class="ghost" title="Close" on:click=move |_| sidebar.close()>
                    "\u{2715}"
                </button>
            </div>
            <nav style="flex: 1; padding: 2rem 1.5rem;">
                {NAV_ITEMS.iter().map(|item| {
                    let path = item.path;
                    let is_active = move || pathname.get() == path;
                    view! {
                        <a
                            href=path
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| sidebar.navigated(breakpoint)
                        >
                            <div style="flex: 1;">
                                <div style="font-weight: 500;">{item.label}</div>
                                <div class="muted small">{item.description}</div>
                            </div>
                            <Show when=is_active>
                                <span class="active-dot"></span>
                            </Show>
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </nav>
            <div class="sidebar-footer">
                <div class="hire-card">
                    <span class="pulse"></span>
                    <div>
                        <div style="font-weight: 500;">"Available for hire"</div>
                        <div class="muted small">"Ready for new projects"</div>
                    </div>
                </div>
                <div class="mode-switch">
                    {[Mode::Light, Mode::Dark].into_iter().map(|mode| view! {
                        <button
                            class=move || if theme.mode() == mode { "chip active" } else { "chip" }
                            on:click=move |_| theme.set(mode)
                        >
                            {mode.as_str()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="muted small" style="text-align: center; margin-top: 1rem;">
                    "Built with Rust & Leptos"
                </div>
            </div>
        </aside>
    }
}
