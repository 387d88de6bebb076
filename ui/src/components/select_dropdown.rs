//! Searchable single/multi-select dropdown.
//!
//! The widget owns all of its state: the open/closed flag, the search text
//! and the selection list. The visible option list is always derived from
//! the full option list plus the current search text, never stored on its
//! own. Selected entries render as removable chips above the list.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::highlight::HighlightedLabel;
use super::outside_click::on_outside_click;

/// A selectable entry: either a plain string or a keyed, labeled record.
///
/// Keyed options compare by `key`, plain options by value. A single option
/// list never mixes the two shapes; `parse_options` enforces that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOption {
    Text(String),
    Keyed { key: String, label: String },
}

impl SelectOption {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn keyed(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Keyed {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Display text shown in option rows and chips.
    pub fn label(&self) -> &str {
        match self {
            Self::Text(value) => value,
            Self::Keyed { label, .. } => label,
        }
    }

    /// Identity comparison: tracking key for keyed options, value equality
    /// for plain ones. Options of different shapes never match.
    pub fn matches(&self, other: &SelectOption) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Keyed { key: a, .. }, Self::Keyed { key: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Errors raised when an option list cannot be built from raw values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("options are objects but no `track_by` key is configured")]
    MissingTrackBy,

    #[error("options are objects but no `label` key is configured")]
    MissingLabel,

    #[error("option {index} is missing the `{field}` field")]
    MissingField { index: usize, field: String },

    #[error("option {index} has a non-string `{field}` field")]
    InvalidField { index: usize, field: String },

    #[error("option list mixes string and object entries (first mismatch at {index})")]
    MixedShapes { index: usize },

    #[error("option {index} is neither a string nor an object")]
    UnsupportedValue { index: usize },
}

/// Builds a typed option list from raw JSON values.
///
/// String entries become [`SelectOption::Text`]. Object entries require the
/// `track_by` and `label` key names and become [`SelectOption::Keyed`];
/// numeric tracking values are canonicalized to strings. Any shape mismatch
/// is a hard error rather than a silently broken widget.
pub fn parse_options(
    values: &[Value],
    track_by: Option<&str>,
    label: Option<&str>,
) -> Result<Vec<SelectOption>, OptionsError> {
    // true = keyed objects, false = plain strings
    let mut shape: Option<bool> = None;
    let mut parsed = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let option = match value {
            Value::String(text) => {
                if shape == Some(true) {
                    return Err(OptionsError::MixedShapes { index });
                }
                shape = Some(false);
                SelectOption::text(text.clone())
            }
            Value::Object(fields) => {
                if shape == Some(false) {
                    return Err(OptionsError::MixedShapes { index });
                }
                shape = Some(true);

                let track_key = track_by.ok_or(OptionsError::MissingTrackBy)?;
                let label_key = label.ok_or(OptionsError::MissingLabel)?;

                let key = match fields.get(track_key) {
                    Some(Value::String(text)) => text.clone(),
                    Some(Value::Number(number)) => number.to_string(),
                    Some(_) => {
                        return Err(OptionsError::InvalidField {
                            index,
                            field: track_key.to_string(),
                        })
                    }
                    None => {
                        return Err(OptionsError::MissingField {
                            index,
                            field: track_key.to_string(),
                        })
                    }
                };

                let text = match fields.get(label_key) {
                    Some(Value::String(text)) => text.clone(),
                    Some(_) => {
                        return Err(OptionsError::InvalidField {
                            index,
                            field: label_key.to_string(),
                        })
                    }
                    None => {
                        return Err(OptionsError::MissingField {
                            index,
                            field: label_key.to_string(),
                        })
                    }
                };

                SelectOption::Keyed { key, label: text }
            }
            _ => return Err(OptionsError::UnsupportedValue { index }),
        };
        parsed.push(option);
    }

    Ok(parsed)
}

/// Selection strategy for the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one selected entry; selecting replaces it.
    #[default]
    Single,
    /// Selected entries accumulate in insertion order.
    Multi,
}

impl SelectionMode {
    /// Toggles `option` within `selection`.
    ///
    /// An already-selected option is removed in either mode. Otherwise
    /// Single replaces the whole selection and Multi appends at the end.
    pub fn toggle(&self, mut selection: Vec<SelectOption>, option: &SelectOption) -> Vec<SelectOption> {
        if let Some(position) = selection.iter().position(|entry| entry.matches(option)) {
            selection.remove(position);
            return selection;
        }
        match self {
            SelectionMode::Single => vec![option.clone()],
            SelectionMode::Multi => {
                selection.push(option.clone());
                selection
            }
        }
    }
}

/// Case-insensitive substring filter over option labels.
/// An empty query passes every option through unchanged.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    if query.is_empty() {
        return options.to_vec();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Whether `option` matches any entry of the current selection.
pub fn is_selected(selection: &[SelectOption], option: &SelectOption) -> bool {
    selection.iter().any(|entry| entry.matches(option))
}

/// Searchable single/multi-select dropdown.
///
/// Renders the current selection as removable chips and, while open, an
/// option list with highlighted search matches. Every select or deselect
/// closes the list, in both modes. A document-level listener closes the
/// list on any click outside the widget; it is registered when the
/// component mounts and removed when it unmounts.
#[component]
pub fn SelectDropdown(
    /// Full option list to choose from
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Show a text input that filters the option list
    #[prop(default = false)]
    searchable: bool,
    /// Single (replace) or Multi (append) selection
    #[prop(default = SelectionMode::Single)]
    mode: SelectionMode,
    /// Invoked with the full selection after every change
    #[prop(optional, into)]
    on_change: Option<Callback<Vec<SelectOption>>>,
    /// Placeholder for the search input
    #[prop(default = "Search here")]
    placeholder: &'static str,
) -> impl IntoView {
    let (search_text, set_search_text) = signal(String::new());
    let (is_open, set_is_open) = signal(false);
    let (selected, set_selected) = signal(Vec::<SelectOption>::new());
    let root_ref = NodeRef::<leptos::html::Div>::new();

    // Derived, never stored: recomputed whenever options or the query move.
    let filtered = Signal::derive(move || filter_options(&options.get(), &search_text.get()));

    let toggle = Callback::new(move |option: SelectOption| {
        let next = mode.toggle(selected.get_untracked(), &option);
        set_selected.set(next.clone());
        if let Some(callback) = on_change {
            callback.run(next);
        }
        // Each pick closes the list, also in Multi mode.
        set_is_open.set(false);
    });

    let remove_at = Callback::new(move |index: usize| {
        let mut current = selected.get_untracked();
        if index < current.len() {
            current.remove(index);
            set_selected.set(current.clone());
            if let Some(callback) = on_change {
                callback.run(current);
            }
        }
    });

    // Clicks anywhere outside the widget root dismiss the list, whether or
    // not the widget is searchable.
    on_outside_click(root_ref, move || set_is_open.set(false));

    view! {
        <div
            node_ref=root_ref
            tabindex={if searchable { "-1" } else { "0" }}
            class="relative w-full max-w-md outline-none"
            on:click=move |_| set_is_open.set(true)
            on:focus=move |_| set_is_open.set(true)
            on:blur=move |_| {
                // A searchable widget keeps the list open across root blurs
                // so focus can land on the search input.
                if !searchable {
                    set_is_open.set(false);
                }
            }
        >
            // Selected entries as removable chips
            <div class="min-h-[2.5rem] flex flex-wrap items-center gap-1.5 px-2 py-1.5 border border-gray-300 rounded-md bg-white cursor-pointer focus-within:ring-2 focus-within:ring-blue-500">
                {move || {
                    selected
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, option)| {
                            let label = option.label().to_string();
                            view! {
                                <span class="inline-flex items-center gap-1 pl-2 pr-1 py-0.5 rounded-md text-xs font-medium bg-blue-100 text-blue-800 border border-blue-200">
                                    <span class="truncate max-w-[150px]">{label}</span>
                                    <button
                                        type="button"
                                        class="ml-0.5 p-0.5 rounded text-blue-500 hover:text-blue-700 hover:bg-black/10"
                                        on:mousedown=move |ev| {
                                            // Focus must stay where it is: a root blur
                                            // here would close the list, and removal
                                            // must not touch the open state.
                                            ev.prevent_default();
                                        }
                                        on:click=move |ev| {
                                            // Keep the root click handler from reopening the list.
                                            ev.stop_propagation();
                                            remove_at.run(index);
                                        }
                                    >
                                        <svg class="w-3 h-3" fill="currentColor" viewBox="0 0 20 20">
                                            <path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd"/>
                                        </svg>
                                    </button>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            // Dropdown panel
            {move || {
                is_open.get().then(|| view! {
                    <div class="absolute z-50 w-full mt-1 bg-white border border-gray-200 rounded-md shadow-lg">
                        {searchable.then(|| view! {
                            <input
                                type="text"
                                class="w-full px-3 py-2 text-sm border-b border-gray-200 rounded-t-md focus:outline-none"
                                placeholder=placeholder
                                prop:value=move || search_text.get()
                                on:input=move |ev| set_search_text.set(event_target_value(&ev))
                                on:focus=move |_| set_is_open.set(true)
                                on:blur=move |_| {
                                    // Defer the close so an option click in
                                    // flight still lands on its row.
                                    set_timeout(
                                        move || set_is_open.set(false),
                                        std::time::Duration::from_millis(200),
                                    );
                                }
                            />
                        })}
                        <ul class="max-h-60 overflow-y-auto py-1">
                            {move || {
                                let query = search_text.get();
                                let visible = filtered.get();
                                if !query.is_empty() && visible.is_empty() {
                                    view! {
                                        <li class="px-3 py-2 text-sm text-gray-500">"No data found"</li>
                                    }
                                    .into_any()
                                } else {
                                    visible
                                        .into_iter()
                                        .map(|option| {
                                            let row_selected = is_selected(&selected.get(), &option);
                                            let label = option.label().to_string();
                                            let option_for_click = option.clone();
                                            view! {
                                                <li
                                                    class=format!(
                                                        "px-3 py-2 text-sm cursor-pointer hover:bg-gray-100 {}",
                                                        if row_selected { "bg-blue-50 font-medium" } else { "" },
                                                    )
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        toggle.run(option_for_click.clone());
                                                    }
                                                >
                                                    <HighlightedLabel text=label query=search_text />
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }}
                        </ul>
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::text("Apple"),
            SelectOption::text("Banana"),
            SelectOption::text("Cherry"),
        ]
    }

    #[test]
    fn empty_query_passes_everything() {
        let options = fruits();
        assert_eq!(filter_options(&options, ""), options);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = fruits();
        assert_eq!(
            filter_options(&options, "an"),
            vec![SelectOption::text("Banana")]
        );
        assert_eq!(
            filter_options(&options, "ChEr"),
            vec![SelectOption::text("Cherry")]
        );
    }

    #[test]
    fn filter_result_is_subset_containing_query() {
        let options = fruits();
        let filtered = filter_options(&options, "a");
        for option in &filtered {
            assert!(options.contains(option));
            assert!(option.label().to_lowercase().contains('a'));
        }
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_options(&fruits(), "zz").is_empty());
    }

    #[test]
    fn single_select_replaces() {
        let mode = SelectionMode::Single;
        let selection = mode.toggle(Vec::new(), &SelectOption::text("Apple"));
        assert_eq!(selection, vec![SelectOption::text("Apple")]);

        let selection = mode.toggle(selection, &SelectOption::text("Banana"));
        assert_eq!(selection, vec![SelectOption::text("Banana")]);
    }

    #[test]
    fn multi_select_appends_in_order() {
        let mode = SelectionMode::Multi;
        let selection = mode.toggle(Vec::new(), &SelectOption::text("Apple"));
        let selection = mode.toggle(selection, &SelectOption::text("Cherry"));
        assert_eq!(
            selection,
            vec![SelectOption::text("Apple"), SelectOption::text("Cherry")]
        );
    }

    #[test]
    fn toggling_selected_option_removes_only_that_entry() {
        let mode = SelectionMode::Multi;
        let selection = vec![
            SelectOption::text("Apple"),
            SelectOption::text("Banana"),
            SelectOption::text("Cherry"),
        ];
        let selection = mode.toggle(selection, &SelectOption::text("Banana"));
        assert_eq!(
            selection,
            vec![SelectOption::text("Apple"), SelectOption::text("Cherry")]
        );
    }

    #[test]
    fn keyed_toggle_twice_ends_empty() {
        let mode = SelectionMode::Single;
        let red = SelectOption::keyed("1", "Red");

        let selection = mode.toggle(Vec::new(), &red);
        assert_eq!(selection.len(), 1);

        let selection = mode.toggle(selection, &red);
        assert!(selection.is_empty());
    }

    #[test]
    fn keyed_options_match_by_key_not_label() {
        let stored = SelectOption::keyed("1", "Red");
        let renamed = SelectOption::keyed("1", "Crimson");
        let other = SelectOption::keyed("2", "Red");

        assert!(stored.matches(&renamed));
        assert!(!stored.matches(&other));
        assert!(!stored.matches(&SelectOption::text("Red")));
    }

    #[test]
    fn is_selected_reports_membership() {
        let selection = vec![SelectOption::text("Apple")];
        assert!(is_selected(&selection, &SelectOption::text("Apple")));
        assert!(!is_selected(&selection, &SelectOption::text("Cherry")));
    }

    #[test]
    fn parse_plain_strings() {
        let values = vec![json!("Apple"), json!("Banana")];
        let options = parse_options(&values, None, None).unwrap();
        assert_eq!(
            options,
            vec![SelectOption::text("Apple"), SelectOption::text("Banana")]
        );
    }

    #[test]
    fn parse_keyed_objects_with_numeric_keys() {
        let values = vec![
            json!({"id": 1, "name": "Red"}),
            json!({"id": 2, "name": "Blue"}),
        ];
        let options = parse_options(&values, Some("id"), Some("name")).unwrap();
        assert_eq!(
            options,
            vec![
                SelectOption::keyed("1", "Red"),
                SelectOption::keyed("2", "Blue"),
            ]
        );
    }

    #[test]
    fn parse_rejects_objects_without_track_by() {
        let values = vec![json!({"id": 1, "name": "Red"})];
        assert_eq!(
            parse_options(&values, None, Some("name")),
            Err(OptionsError::MissingTrackBy)
        );
        assert_eq!(
            parse_options(&values, Some("id"), None),
            Err(OptionsError::MissingLabel)
        );
    }

    #[test]
    fn parse_rejects_missing_and_invalid_fields() {
        let values = vec![json!({"id": 1})];
        assert_eq!(
            parse_options(&values, Some("id"), Some("name")),
            Err(OptionsError::MissingField {
                index: 0,
                field: "name".to_string()
            })
        );

        let values = vec![json!({"id": 1, "name": 7})];
        assert_eq!(
            parse_options(&values, Some("id"), Some("name")),
            Err(OptionsError::InvalidField {
                index: 0,
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_mixed_shapes() {
        let values = vec![json!("Apple"), json!({"id": 1, "name": "Red"})];
        assert_eq!(
            parse_options(&values, Some("id"), Some("name")),
            Err(OptionsError::MixedShapes { index: 1 })
        );
    }

    #[test]
    fn parse_rejects_unsupported_values() {
        let values = vec![json!(42)];
        assert_eq!(
            parse_options(&values, None, None),
            Err(OptionsError::UnsupportedValue { index: 0 })
        );
    }
}
