//! Search-match highlighting.
//!
//! Labels are split into matched/unmatched runs and rendered as plain text
//! nodes, with matched runs wrapped in a styled `<mark>`. Option text is
//! never interpreted as markup, so hostile labels cannot inject anything.

use leptos::prelude::*;

/// One contiguous piece of a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRun {
    pub text: String,
    pub matched: bool,
}

impl HighlightRun {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Splits `text` into runs covering every case-insensitive occurrence of
/// `query`. Runs concatenate back to `text` exactly; an empty query yields
/// a single unmatched run.
///
/// Matching is done on a lowercased copy with a byte-offset table back to
/// the original. When a lowercase expansion changes byte lengths (e.g.
/// `İ`), a match boundary falling inside the expansion is rounded to the
/// enclosing character: the run layout shifts by one character at worst,
/// no text is ever dropped.
pub fn highlight_runs(text: &str, query: &str) -> Vec<HighlightRun> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![HighlightRun::new(text, false)];
    }

    let mut lowered = String::with_capacity(text.len());
    // origin[i] = byte offset in `text` of the char that produced lowered byte i
    let mut origin = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            let before = lowered.len();
            lowered.push(lower);
            for _ in before..lowered.len() {
                origin.push(offset);
            }
        }
    }

    let needle = query.to_lowercase();
    let mut runs = Vec::new();
    let mut cursor = 0;

    for (start, found) in lowered.match_indices(&needle) {
        let from = origin[start];
        let end = start + found.len();
        let to = if end >= origin.len() {
            text.len()
        } else {
            origin[end]
        };
        if to <= from {
            // Match fell entirely inside one character's case expansion.
            continue;
        }
        if from > cursor {
            runs.push(HighlightRun::new(&text[cursor..from], false));
        }
        runs.push(HighlightRun::new(&text[from..to], true));
        cursor = to;
    }

    if cursor < text.len() {
        runs.push(HighlightRun::new(&text[cursor..], false));
    }
    if runs.is_empty() {
        runs.push(HighlightRun::new(text, false));
    }
    runs
}

/// A label with the current search query marked in it.
#[component]
pub fn HighlightedLabel(
    /// The option's display text
    #[prop(into)]
    text: String,
    /// Current search query
    #[prop(into)]
    query: Signal<String>,
) -> impl IntoView {
    view! {
        <span>
            {move || {
                highlight_runs(&text, &query.get())
                    .into_iter()
                    .map(|run| {
                        if run.matched {
                            view! {
                                <mark class="bg-yellow-200 text-gray-900 rounded-sm">{run.text}</mark>
                            }
                            .into_any()
                        } else {
                            view! { <span>{run.text}</span> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </span>
    }
}
