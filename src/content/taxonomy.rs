//! Taxonomy helpers: vocabulary lookup and `<option>` lists

use super::node::Term;
use super::store::ContentStore;
use crate::helpers::html_escape;

/// ID of a vocabulary by machine name, 0 when it does not exist
pub fn vocabulary_id<S: ContentStore + ?Sized>(store: &S, name: &str) -> u64 {
    store.vocabulary(name).map(|v| v.vid).unwrap_or(0)
}

/// Render `<option>` elements for a vocabulary, using term IDs as values
///
/// The option whose ID equals `default` is marked selected.
pub fn tax_options<S: ContentStore + ?Sized>(store: &S, vocabulary: &str, default: &str) -> String {
    render_options(store, vocabulary, default, |term| term.tid.to_string())
}

/// Render `<option>` elements for a vocabulary, using term names as values
///
/// The option whose name equals `default` is marked selected.
pub fn tax_options_by_name<S: ContentStore + ?Sized>(
    store: &S,
    vocabulary: &str,
    default: &str,
) -> String {
    render_options(store, vocabulary, default, |term| term.name.clone())
}

fn render_options<S, F>(store: &S, vocabulary: &str, default: &str, value_of: F) -> String
where
    S: ContentStore + ?Sized,
    F: Fn(&Term) -> String,
{
    let vid = vocabulary_id(store, vocabulary);
    if vid == 0 {
        tracing::debug!("Unknown vocabulary: {}", vocabulary);
        return String::new();
    }

    let mut html = String::new();
    for term in store.terms(vid) {
        let value = value_of(&term);
        html.push_str(&format!(
            r#"<option value="{}" data-tid="{}" data-default="{}""#,
            html_escape(&value),
            term.tid,
            html_escape(default)
        ));
        if value == default {
            html.push_str(" selected");
        }
        html.push_str(&format!(">{}</option>", html_escape(&term.name)));
    }

    html
}
