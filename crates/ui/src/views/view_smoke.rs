use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_module_cards() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Study Centre"), "missing title in {html}");
    assert!(
        html.contains("Working at Height"),
        "missing module card in {html}"
    );
    assert!(html.contains("2 lessons"), "missing lesson count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_lists_lessons_in_order() {
    let mut harness = setup_view_harness(ViewKind::Module("working-at-height".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Working at Height"), "missing title in {html}");
    let falls = html
        .find("Understanding Falls from Height")
        .expect("first lesson listed");
    let ladders = html.find("Safe Use of Ladders").expect("second lesson listed");
    assert!(falls < ladders, "lessons out of order in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_renders_not_found_for_invalid_slug() {
    let mut harness = setup_view_harness(ViewKind::Module("Not A Slug!".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("That page does not exist."),
        "missing not-found message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_page_anatomy() {
    let mut harness = setup_view_harness(ViewKind::Lesson("understanding-falls".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("MODULE 1 · SECTION 1"),
        "missing badge in {html}"
    );
    assert!(html.contains("In 30 Seconds"), "missing summary box in {html}");
    assert!(
        html.contains("Learning Outcomes"),
        "missing outcomes in {html}"
    );
    assert!(
        html.contains("The Hierarchy of Control"),
        "missing section heading in {html}"
    );
    assert!(
        html.contains("What comes first in the hierarchy?"),
        "missing inline check in {html}"
    );
    assert!(
        html.contains("Frequently Asked Questions"),
        "missing faqs in {html}"
    );
    assert!(
        html.contains("Section 1 Knowledge Check"),
        "missing quiz in {html}"
    );
    assert!(
        html.contains("Next: Safe Use of Ladders"),
        "missing next link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_markdown_prose() {
    let mut harness = setup_view_harness(ViewKind::Lesson("understanding-falls".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("<strong>no</strong>"),
        "missing rendered markdown in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_not_found_for_unknown_slug() {
    let mut harness = setup_view_harness(ViewKind::Lesson("no-such-lesson".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("That page does not exist."),
        "missing not-found message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn last_lesson_links_back_to_module() {
    let mut harness = setup_view_harness(ViewKind::Lesson("ladders-and-steps".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Previous: Understanding Falls from Height"),
        "missing previous link in {html}"
    );
    assert!(!html.contains("Next:"), "unexpected next link in {html}");
}
