//! Static showcase of the dropdown configurations.

use leptos::prelude::*;

use super::select_dropdown::{SelectDropdown, SelectOption, SelectionMode};

fn fruit_options() -> Vec<SelectOption> {
    ["Apple", "Banana", "Cherry", "Mango", "Blueberry", "Peach"]
        .into_iter()
        .map(SelectOption::text)
        .collect()
}

fn color_options() -> Vec<SelectOption> {
    vec![
        SelectOption::keyed("1", "Red"),
        SelectOption::keyed("2", "Blue"),
        SelectOption::keyed("3", "Green"),
        SelectOption::keyed("4", "Yellow"),
    ]
}

#[component]
pub fn Playground() -> impl IntoView {
    let fruits = RwSignal::new(fruit_options());
    let colors = RwSignal::new(color_options());
    let (picked, set_picked) = signal(Vec::<SelectOption>::new());

    view! {
        <div class="p-6 max-w-3xl">
            <h2 class="text-2xl font-bold mb-6">"Playground"</h2>
            <div class="space-y-10">
                <DemoSection
                    title="Plain list"
                    description="Click to open and pick an option. Picking it again deselects."
                >
                    <SelectDropdown options=fruits />
                </DemoSection>

                <DemoSection
                    title="Searchable"
                    description="Type to filter; matches are marked in the rows."
                >
                    <SelectDropdown options=fruits searchable=true />
                </DemoSection>

                <DemoSection
                    title="Multi-select"
                    description="Each pick closes the list; reopen to add more. Chips remove single entries."
                >
                    <SelectDropdown options=fruits searchable=true mode=SelectionMode::Multi />
                </DemoSection>

                <DemoSection
                    title="Keyed options with change notifications"
                    description="Options carry an identity key separate from the label."
                >
                    <SelectDropdown
                        options=colors
                        mode=SelectionMode::Multi
                        on_change=Callback::new(move |selection: Vec<SelectOption>| {
                            set_picked.set(selection)
                        })
                    />
                    <p class="mt-3 text-sm text-gray-600">
                        "Last notification: "
                        {move || {
                            let picked = picked.get();
                            if picked.is_empty() {
                                "(empty selection)".to_string()
                            } else {
                                picked
                                    .iter()
                                    .map(|option| option.label().to_string())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }
                        }}
                    </p>
                </DemoSection>
            </div>
        </div>
    }
}

#[component]
fn DemoSection(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <h3 class="font-semibold mb-1">{title}</h3>
            <p class="text-sm text-gray-500 mb-4">{description}</p>
            {children()}
        </div>
    }
}
