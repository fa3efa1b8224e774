//! End-to-end tests of the Generate pipeline against a deterministic stub
//! font engine, so results do not depend on installed fonts.

use engravekit::{
    generate, EngraveRequest, MaxDimensions, Outline, PathSegment, Point, Result, TextOutliner,
    ViewTransform, PREAMBLE, PROGRAM_END,
};

/// Stub glyph engine: every character is a closed unit square scaled by the
/// font size, advanced one square per character.
struct SquareOutliner;

impl TextOutliner for SquareOutliner {
    fn outline(&self, text: &str, _family: &str, size: f64) -> Result<Outline> {
        let mut segments = Vec::new();
        for (i, _) in text.chars().enumerate() {
            let x0 = i as f64 * size;
            segments.push(PathSegment::MoveTo(Point::new(x0, 0.0)));
            segments.push(PathSegment::LineTo(Point::new(x0 + size, 0.0)));
            segments.push(PathSegment::LineTo(Point::new(x0 + size, size)));
            segments.push(PathSegment::LineTo(Point::new(x0, size)));
            segments.push(PathSegment::LineTo(Point::new(x0, 0.0)));
        }
        Ok(Outline::new(segments))
    }
}

#[test]
fn generate_without_fit_keeps_requested_size() {
    let request = EngraveRequest::new("A", "Sans");
    let result = generate(&SquareOutliner, &request).unwrap();

    assert_eq!(result.font_size, 100);
    // One square: 100 design units at scale 0.1.
    assert!((result.width_mm - 10.0).abs() < 1e-9);
    assert!((result.height_mm - 10.0).abs() < 1e-9);

    // Preamble + reposition + plunge + 4 cuts + retract + end marker.
    assert_eq!(result.program.len(), 10);
    let lines = result.program.lines();
    assert_eq!(lines[0], PREAMBLE[0]);
    assert_eq!(lines[1], PREAMBLE[1]);
    assert_eq!(lines[lines.len() - 1], PROGRAM_END);
}

#[test]
fn generate_with_fit_enlarges_to_target_box() {
    let mut request = EngraveRequest::new("AB", "Sans");
    request.font_size = 10;
    request.max_dimensions = Some(MaxDimensions {
        width_mm: 50.0,
        height_mm: 50.0,
    });
    let result = generate(&SquareOutliner, &request).unwrap();

    // Two squares: width 2s * 0.1 <= 50 binds at s = 250.
    assert_eq!(result.font_size, 250);
    assert!((result.width_mm - 50.0).abs() < 1e-9);
    assert!((result.height_mm - 25.0).abs() < 1e-9);
}

#[test]
fn generate_with_impossible_box_falls_back_to_requested_size() {
    let mut request = EngraveRequest::new("AB", "Sans");
    request.max_dimensions = Some(MaxDimensions {
        width_mm: 0.05,
        height_mm: 0.05,
    });
    let result = generate(&SquareOutliner, &request).unwrap();

    // Even size 1 is 0.2mm wide at scale 0.1; the fitter fails soft and
    // the pipeline proceeds at the requested size.
    assert_eq!(result.font_size, 100);
}

#[test]
fn empty_text_produces_minimal_program() {
    let request = EngraveRequest::new("", "Sans");
    let result = generate(&SquareOutliner, &request).unwrap();

    assert!(result.outline.is_empty());
    assert_eq!(result.width_mm, 0.0);
    assert_eq!(result.height_mm, 0.0);
    assert_eq!(
        result.program.lines(),
        &[
            PREAMBLE[0].to_string(),
            PREAMBLE[1].to_string(),
            PROGRAM_END.to_string(),
        ]
    );
}

#[test]
fn preview_projects_generated_outline() {
    let request = EngraveRequest::new("AB", "Sans");
    let result = generate(&SquareOutliner, &request).unwrap();

    // 200x100 design units into a 300x200 viewport: X limits at 1.5 * 0.9.
    let transform = ViewTransform::fit(&result.outline, 300.0, 200.0).unwrap();
    assert!((transform.view_scale() - 1.35).abs() < 1e-12);

    let (cx, cy) = transform.apply(Point::new(100.0, 50.0));
    assert!((cx - 150.0).abs() < 1e-12);
    assert!((cy - 100.0).abs() < 1e-12);

    // The rendering pen width compensates for both scales.
    let stroke = transform.stroke_width(0.6, request.gcode.scale);
    assert!((stroke - 0.6 / 0.1 / 1.35).abs() < 1e-12);
}

#[test]
fn requests_round_trip_through_serde() {
    let mut request = EngraveRequest::new("hello", "Monospace");
    request.max_dimensions = Some(MaxDimensions::default());

    let json = serde_json::to_string(&request).unwrap();
    let back: EngraveRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(back.text, "hello");
    assert_eq!(back.font_family, "Monospace");
    assert_eq!(back.max_dimensions, request.max_dimensions);
    assert_eq!(back.gcode, request.gcode);
}
