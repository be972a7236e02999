mod app;
mod browser;
mod catalog;
mod config;
mod contact;
mod content;
mod filter;
mod pages;
mod sidebar;
mod theme;

use app::*;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! {
            <App/>
        }
    })
}
