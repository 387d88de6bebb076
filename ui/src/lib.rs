use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

mod api;
mod components;
mod types;

pub use components::highlight::{highlight_runs, HighlightRun, HighlightedLabel};
pub use components::outside_click::on_outside_click;
pub use components::select_dropdown::{
    filter_options, is_selected, parse_options, OptionsError, SelectDropdown, SelectOption,
    SelectionMode,
};
pub use types::Dataset;

use components::datasets::Datasets;
use components::playground::Playground;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-64 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">"Picklist"</h1>
                    <nav class="space-y-1 flex-1">
                        <NavLink href="/" label="Playground" />
                        <NavLink href="/datasets" label="Datasets" />
                    </nav>
                    <div class="text-xs text-gray-500 mt-4">
                        "Picklist Select Dropdown"
                    </div>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Playground/>
                        <Route path=path!("/datasets") view=Datasets/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
            {label}
        </A>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
