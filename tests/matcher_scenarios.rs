use plumbline::{
    expect, to_be_above, to_be_fully_centered_in, to_be_inside, to_have_color_contrast,
    AdjacencyOptions, AlignOptions, Alignment, Axis, CenterOptions, ContrastOptions,
    ElementSnapshot, ErrorCategory, InsideOptions, MatchError, Rect, Tolerance,
};

fn measured(selector: &str, x: f64, y: f64, width: f64, height: f64) -> ElementSnapshot {
    ElementSnapshot::named(selector).with_rect(Rect::new(x, y, width, height))
}

#[tokio::test]
async fn perfectly_centered_dialog_passes_and_reports_zero_offsets() {
    let dialog = measured("div.dialog", 50.0, 50.0, 100.0, 100.0);
    let page = measured("body", 0.0, 0.0, 200.0, 200.0);

    let verdict = to_be_fully_centered_in(&dialog, &page, CenterOptions::default())
        .await
        .expect("both elements are measured");

    assert!(verdict.passed);
    assert!(
        verdict.message().contains("offsets 0.00px, 0.00px"),
        "the pass message reports both offsets: {}",
        verdict.message()
    );
}

#[tokio::test]
async fn off_center_dialog_fails_with_measured_and_allowed_offsets() {
    let dialog = measured("div.dialog", 80.0, 50.0, 100.0, 100.0);
    let page = measured("body", 0.0, 0.0, 200.0, 200.0);
    let options = CenterOptions {
        tolerance: Tolerance::percent(5.0),
    };

    let verdict = to_be_fully_centered_in(&dialog, &page, options)
        .await
        .expect("both elements are measured");

    assert!(!verdict.passed);
    let message = verdict.message();
    assert!(message.contains("30.00px"), "measured offset: {message}");
    assert!(message.contains("10.00px"), "allowed deviation: {message}");
}

#[tokio::test]
async fn label_touching_its_input_counts_as_above() {
    let label = measured("label", 0.0, 60.0, 120.0, 40.0);
    let input = measured("input", 0.0, 100.0, 120.0, 32.0);

    let verdict = to_be_above(&label, &input, AdjacencyOptions::default())
        .await
        .expect("both elements are measured");
    assert!(verdict.passed, "a zero gap is above: {}", verdict.message());
}

#[tokio::test]
async fn black_text_on_white_background_meets_aa_contrast() {
    let body_text = ElementSnapshot::named("p.body")
        .with_text_color("rgb(0, 0, 0)")
        .with_background_color("rgb(255, 255, 255)");

    let verdict = to_have_color_contrast(&body_text, ContrastOptions::default())
        .await
        .expect("both colors parse");

    assert!(verdict.passed);
    assert!(
        verdict.message().contains("21.00"),
        "maximal ratio renders at two decimals: {}",
        verdict.message()
    );
}

#[tokio::test]
async fn alpha_color_surfaces_as_error_not_verdict() {
    let translucent = ElementSnapshot::named("p.ghost")
        .with_text_color("rgba(0, 0, 0, 0.4)")
        .with_background_color("rgb(255, 255, 255)");

    let err = to_have_color_contrast(&translucent, ContrastOptions::default())
        .await
        .expect_err("alpha colors are out of contract");

    assert!(matches!(err, MatchError::ColorFormat { .. }));
    assert_eq!(err.category(), ErrorCategory::Geometry);
}

#[tokio::test]
async fn detached_element_is_an_execution_error_from_either_position() {
    let detached = ElementSnapshot::named("div.unmounted");
    let container = measured("main", 0.0, 0.0, 400.0, 400.0);

    let as_subject = to_be_inside(&detached, &container, InsideOptions::default())
        .await
        .expect_err("no bounding box");
    assert!(matches!(as_subject, MatchError::MissingGeometry { .. }));
    assert!(as_subject.to_string().contains("div.unmounted"));

    let as_reference = to_be_inside(&container, &detached, InsideOptions::default())
        .await
        .expect_err("no bounding box");
    assert!(matches!(as_reference, MatchError::MissingGeometry { .. }));
    assert!(as_reference.to_string().contains("div.unmounted"));
}

#[tokio::test]
async fn capture_script_payload_drives_matchers() {
    let card = ElementSnapshot::from_json(
        r#"{
            "selector": "div.card",
            "boundingBox": {"x": 40, "y": 120, "width": 320, "height": 180}
        }"#,
    )
    .expect("valid payload");
    let grid = ElementSnapshot::from_json(
        r#"{
            "selector": "section.grid",
            "boundingBox": {"x": 0, "y": 0, "width": 400, "height": 400}
        }"#,
    )
    .expect("valid payload");

    let verdict = to_be_inside(&card, &grid, InsideOptions::default())
        .await
        .expect("both payloads carry boxes");
    assert!(verdict.passed, "got: {}", verdict.message());
}

#[tokio::test]
async fn fluent_surface_walks_a_small_layout() {
    let heading = measured("h2", 20.0, 20.0, 360.0, 32.0);
    let body = measured("p", 20.0, 64.0, 360.0, 120.0);
    let card = measured("div.card", 0.0, 0.0, 400.0, 220.0);

    let inside = expect(&heading)
        .to_be_inside(&card, InsideOptions::default())
        .await
        .unwrap();
    assert!(inside.passed, "got: {}", inside.message());

    let above = expect(&heading)
        .to_be_above(&body, AdjacencyOptions::default())
        .await
        .unwrap();
    assert!(above.passed, "got: {}", above.message());

    let flush = expect(&heading)
        .to_be_aligned_with(&body, AlignOptions::new(Axis::Horizontal, Alignment::Start))
        .await
        .unwrap();
    assert!(flush.passed, "got: {}", flush.message());
}
