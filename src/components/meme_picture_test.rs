use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn layout_follows_measured_width() {
    let owner = Owner::new();
    owner.set();

    let width = RwSignal::new(800.0);
    let texts = Signal::derive(|| vec![Caption { content: "top".to_owned(), x: 100.0, y: 50.0 }]);
    let layout = scaled_layout(width, texts);
    assert_eq!(layout.with(|l| (l.height, l.font_size)), (450.0, 36.0));

    width.set(400.0);
    let rescaled = layout.get();
    assert_eq!((rescaled.height, rescaled.font_size), (225.0, 18.0));
    assert_eq!((rescaled.captions[0].x, rescaled.captions[0].y), (50.0, 25.0));
}
