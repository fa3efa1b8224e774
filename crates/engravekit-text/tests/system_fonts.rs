//! Tests against the real system font database. Each test skips cleanly on
//! machines without installed fonts (containers, CI runners).

use engravekit_text::{list_font_families, FontOutliner, TextOutliner};

fn fonts_available() -> bool {
    if list_font_families().is_empty() {
        eprintln!("no system fonts installed; skipping");
        return false;
    }
    true
}

#[test]
fn text_produces_segments() {
    if !fonts_available() {
        return;
    }
    let outliner = FontOutliner::new();
    let outline = outliner.outline("AB", "Sans", 50.0).unwrap();

    assert!(!outline.is_empty());
    // Two glyphs worth of contours, with curves sampled down to lines.
    assert!(outline.len() > 8);
    assert!(outline.segments()[0].is_move());
    assert!(!outline.bounds().is_degenerate());
}

#[test]
fn bounds_grow_with_font_size() {
    if !fonts_available() {
        return;
    }
    let outliner = FontOutliner::new();
    let small = outliner.outline("AB", "Sans", 20.0).unwrap();
    let large = outliner.outline("AB", "Sans", 40.0).unwrap();

    assert!(small.bounds().width <= large.bounds().width);
    assert!(small.bounds().height <= large.bounds().height);
}

#[test]
fn unknown_family_is_substituted() {
    if !fonts_available() {
        return;
    }
    let outliner = FontOutliner::new();
    let outline = outliner
        .outline("A", "No Such Family 123", 30.0)
        .unwrap();
    assert!(!outline.is_empty());
}

#[test]
fn empty_text_yields_empty_outline() {
    // No fonts needed: empty text never touches the catalog.
    let outliner = FontOutliner::new();
    let outline = outliner.outline("", "Sans", 50.0).unwrap();
    assert!(outline.is_empty());
    assert_eq!(outline.bounds().width, 0.0);
}

#[test]
fn whitespace_text_has_no_contours() {
    if !fonts_available() {
        return;
    }
    let outliner = FontOutliner::new();
    let outline = outliner.outline("   ", "Sans", 50.0).unwrap();
    // Space glyphs carry no outline, so nothing is emitted.
    assert!(outline.is_empty());
}
