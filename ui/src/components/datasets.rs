//! Dropdowns driven by datasets served from the demo host.

use leptos::prelude::*;

use super::select_dropdown::{parse_options, SelectDropdown, SelectionMode};
use crate::api;
use crate::types::Dataset;

#[component]
pub fn Datasets() -> impl IntoView {
    let (datasets, set_datasets) = signal(Option::<Result<Vec<Dataset>, String>>::None);

    wasm_bindgen_futures::spawn_local(async move {
        set_datasets.set(Some(api::get_datasets().await));
    });

    view! {
        <div class="p-6 max-w-3xl">
            <h2 class="text-2xl font-bold mb-6">"Datasets"</h2>
            {move || match datasets.get() {
                None => view! { <p class="text-gray-500">"Loading datasets..."</p> }.into_any(),
                Some(Err(error)) => view! {
                    <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                        {error}
                    </div>
                }
                .into_any(),
                Some(Ok(datasets)) if datasets.is_empty() => view! {
                    <p class="text-gray-500">"No datasets configured on the host."</p>
                }
                .into_any(),
                Some(Ok(datasets)) => view! {
                    <div class="space-y-8">
                        {datasets
                            .into_iter()
                            .map(|dataset| view! { <DatasetCard dataset=dataset /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn DatasetCard(dataset: Dataset) -> impl IntoView {
    // The host validates datasets at startup; parsing again here keeps the
    // page honest when it talks to an older or hand-edited host.
    let parsed = parse_options(
        &dataset.options,
        dataset.track_by.as_deref(),
        dataset.label.as_deref(),
    );
    let mode = if dataset.multiple {
        SelectionMode::Multi
    } else {
        SelectionMode::Single
    };

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="flex items-center gap-2 mb-3">
                <h3 class="font-semibold">{dataset.name.clone()}</h3>
                {dataset.searchable.then(|| view! {
                    <span class="px-1.5 py-0.5 rounded text-[10px] font-medium bg-emerald-100 text-emerald-700">
                        "searchable"
                    </span>
                })}
                {dataset.multiple.then(|| view! {
                    <span class="px-1.5 py-0.5 rounded text-[10px] font-medium bg-indigo-100 text-indigo-700">
                        "multiple"
                    </span>
                })}
            </div>
            {match parsed {
                Ok(options) => view! {
                    <SelectDropdown
                        options=RwSignal::new(options)
                        searchable=dataset.searchable
                        mode=mode
                    />
                }
                .into_any(),
                Err(error) => view! {
                    <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm">
                        {format!("Invalid dataset: {error}")}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
