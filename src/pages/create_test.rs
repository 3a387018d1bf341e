use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn caption_rows_rebuild_only_when_captions_added_or_removed() {
    let owner = Owner::new();
    owner.set();

    let editor = RwSignal::new(EditorState::default());
    let count = caption_row_count(editor);
    let builds = Arc::new(AtomicUsize::new(0));
    let rows = {
        let builds = Arc::clone(&builds);
        Memo::new(move |_| {
            builds.fetch_add(1, Ordering::SeqCst);
            count.get()
        })
    };
    assert_eq!(rows.get(), 0);
    assert_eq!(builds.load(Ordering::SeqCst), 1);

    editor.update(|e| e.add_caption(0.5, 0.5));
    assert_eq!(rows.get(), 1);
    assert_eq!(builds.load(Ordering::SeqCst), 2);

    editor.update(|e| {
        e.set_caption_content(0, "hello".to_owned());
    });
    editor.update(|e| e.description = "monday".to_owned());
    assert_eq!(rows.get(), 1);
    assert_eq!(builds.load(Ordering::SeqCst), 2);

    editor.update(|e| {
        e.delete_caption(0);
    });
    assert_eq!(rows.get(), 0);
    assert_eq!(builds.load(Ordering::SeqCst), 3);
}
