use plumbline::{
    to_be_fully_centered_in, to_fit_container, to_have_aspect_ratio, AspectRatioOptions,
    CenterOptions, ElementSnapshot, MatchError, Rect, Tolerance,
};

fn measured(selector: &str, x: f64, y: f64, width: f64, height: f64) -> ElementSnapshot {
    ElementSnapshot::named(selector).with_rect(Rect::new(x, y, width, height))
}

#[tokio::test]
async fn failure_message_has_summary_details_and_remediation() {
    let dialog = measured("div.modal", 80.0, 50.0, 100.0, 100.0);
    let page = measured("main", 0.0, 0.0, 200.0, 200.0);
    let options = CenterOptions {
        tolerance: Tolerance::percent(5.0),
    };

    let verdict = to_be_fully_centered_in(&dialog, &page, options).await.unwrap();

    assert_eq!(
        verdict.message(),
        "Expected 'div.modal' to be centered in 'main'.\n\
         \n\
         Details:\n\
         \x20 horizontal offset: 30.00px\n\
         \x20 vertical offset: 0.00px\n\
         \x20 allowed horizontal deviation: 10.00px\n\
         \x20 allowed vertical deviation: 10.00px\n\
         \n\
         Adjust margins or positioning so the element's center matches the container's center."
    );
}

#[tokio::test]
async fn pass_message_is_a_single_line() {
    let dialog = measured("div.modal", 50.0, 50.0, 100.0, 100.0);
    let page = measured("main", 0.0, 0.0, 200.0, 200.0);

    let verdict = to_be_fully_centered_in(&dialog, &page, CenterOptions::default())
        .await
        .unwrap();
    assert!(verdict.passed);
    assert!(!verdict.message().contains('\n'));
    assert!(!verdict.message().contains("Details:"));
}

#[tokio::test]
async fn message_is_deterministic_across_runs_and_calls() {
    let subject = measured("img", 3.0, 7.0, 167.0, 93.0);
    let container = measured("figure", 0.0, 0.0, 160.0, 90.0);

    let first = to_fit_container(&subject, &container).await.unwrap();
    let second = to_fit_container(&subject, &container).await.unwrap();

    assert_eq!(first.message(), first.message(), "repeated rendering is stable");
    assert_eq!(first.message(), second.message(), "repeated runs are stable");
}

#[tokio::test]
async fn pixel_facts_round_to_two_decimals_without_changing_the_verdict() {
    let subject = measured("video", 0.0, 0.0, 639.998, 360.0);
    let container = measured("div.player", 0.0, 0.0, 640.0, 360.0);

    let verdict = to_fit_container(&subject, &container).await.unwrap();
    assert!(!verdict.passed, "full-precision comparison sees the difference");
    assert!(
        verdict.message().contains("element width: 640.00px"),
        "display rounds to two decimals: {}",
        verdict.message()
    );
}

#[tokio::test]
async fn ratio_facts_render_with_four_decimals() {
    let widescreen = measured("video", 0.0, 0.0, 1280.0, 720.0);

    let verdict = to_have_aspect_ratio(&widescreen, AspectRatioOptions::new(4.0 / 3.0))
        .await
        .unwrap();
    assert!(!verdict.passed);
    let message = verdict.message();
    assert!(message.contains("expected ratio: 1.3333"), "got: {message}");
    assert!(message.contains("measured ratio: 1.7778"));
}

#[tokio::test]
async fn verdicts_serialize_for_machine_consumption() {
    let subject = measured("aside", 90.0, 0.0, 20.0, 20.0);
    let container = measured("main", 0.0, 0.0, 100.0, 100.0);

    let verdict = to_fit_container(&subject, &container).await.unwrap();
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["passed"], false);
    assert!(json["report"]["summary"].as_str().unwrap().contains("aside"));
    let first_fact = &json["report"]["details"][0];
    assert_eq!(first_fact["label"], "element x");
    assert_eq!(first_fact["value"]["kind"], "pixels");
    assert_eq!(first_fact["value"]["value"], 90.0);
}

#[test]
fn error_payloads_carry_category_and_remediation() {
    let config = MatchError::InvalidTolerance { value: -3.0 }.to_payload();
    let config_json = serde_json::to_value(&config).unwrap();
    assert_eq!(config_json["category"], "configuration");
    assert!(config_json["remediation"].as_str().unwrap().contains("non-negative"));

    let geometry = MatchError::missing_geometry("nav.breadcrumbs").to_payload();
    let geometry_json = serde_json::to_value(&geometry).unwrap();
    assert_eq!(geometry_json["category"], "geometry");
    assert!(geometry_json["message"]
        .as_str()
        .unwrap()
        .contains("nav.breadcrumbs"));
}
