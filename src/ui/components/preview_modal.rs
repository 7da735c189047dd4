use crate::keywords::KeywordBatch;
use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

/// Keywords listed in the preview before the remainder is summarized
pub const PREVIEW_DISPLAY_LIMIT: usize = 100;

/// First `limit` keywords in display order and how many were left out
pub fn preview_lines(batch: &KeywordBatch, limit: usize) -> (Vec<String>, usize) {
    let mut keywords = batch.sorted();
    let hidden = keywords.len().saturating_sub(limit);
    keywords.truncate(limit);
    (keywords, hidden)
}

#[component]
pub fn PreviewModal() -> Element {
    let ctx = use_context::<ImporterContext>();
    let ctx_for_close = ctx.clone();
    let ctx_for_overlay = ctx.clone();

    let Some(report) = ctx.preview().read().clone() else {
        return rsx! {};
    };
    let unique = report.unique();
    let (keywords, hidden) = preview_lines(&report.batch, PREVIEW_DISPLAY_LIMIT);
    let file_lines: Vec<String> = report
        .files
        .iter()
        .map(|file| match &file.error {
            Some(error) => format!("{}: skipped ({})", file.file_name(), error),
            None => format!("{}: {} keywords", file.file_name(), file.extracted),
        })
        .collect();

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| ctx_for_overlay.close_preview(),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h2 { "Preview: {unique} unique keywords" }
                ul { class: "modal-list",
                    for (index, keyword) in keywords.iter().enumerate() {
                        li { key: "{index}", "{keyword}" }
                    }
                    if hidden > 0 {
                        li { class: "modal-more", "... and {hidden} more" }
                    }
                }
                for (index, line) in file_lines.iter().enumerate() {
                    div { key: "file-{index}", class: "modal-file", "{line}" }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| ctx_for_close.close_preview(),
                        "Close"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_lines_caps_output() {
        let batch: KeywordBatch = (0..150).map(|i| format!("kw{:03}", i)).collect();

        let (shown, hidden) = preview_lines(&batch, PREVIEW_DISPLAY_LIMIT);

        assert_eq!(shown.len(), 100);
        assert_eq!(hidden, 50);
        assert_eq!(shown[0], "kw000");
    }

    #[test]
    fn test_preview_lines_small_batch() {
        let batch: KeywordBatch = vec!["dog".to_string(), "cat".to_string()]
            .into_iter()
            .collect();

        let (shown, hidden) = preview_lines(&batch, PREVIEW_DISPLAY_LIMIT);

        assert_eq!(shown, vec!["cat", "dog"]);
        assert_eq!(hidden, 0);
    }
}
