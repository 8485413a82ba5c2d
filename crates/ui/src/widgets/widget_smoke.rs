use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use toolbox_core::model::{self, Question, QuestionDraft, QuestionIdDraft, QuizDraft};

use super::inline_check::{InlineCheck, InlineCheckTestHandles};
use super::quiz::{Quiz, QuizTestHandles};

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn question(correct: usize) -> Question {
    QuestionDraft {
        id: QuestionIdDraft::Text("check".to_string()),
        prompt: "Which option is right?".to_string(),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        correct,
        explanation: "Because the regulations say so.".to_string(),
    }
    .validate()
    .unwrap()
}

fn quiz(corrects: &[usize]) -> model::Quiz {
    QuizDraft {
        title: "Knowledge Check".to_string(),
        questions: corrects
            .iter()
            .enumerate()
            .map(|(index, correct)| QuestionDraft {
                id: QuestionIdDraft::Number(index as u64 + 1),
                prompt: format!("Question {}", index + 1),
                options: vec![
                    "Option A".to_string(),
                    "Option B".to_string(),
                    "Option C".to_string(),
                    "Option D".to_string(),
                ],
                correct: *correct,
                explanation: format!("Explanation {}", index + 1),
            })
            .collect(),
    }
    .validate()
    .unwrap()
}

//
// ─── INLINE CHECK ──────────────────────────────────────────────────────────────
//

#[derive(Props, Clone)]
struct CheckHarnessProps {
    question: Question,
    handles: InlineCheckTestHandles,
}

impl PartialEq for CheckHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn CheckHarness(props: CheckHarnessProps) -> Element {
    use_context_provider(|| props.handles.clone());
    rsx! {
        InlineCheck { question: props.question.clone() }
    }
}

fn setup_check(correct: usize) -> (VirtualDom, InlineCheckTestHandles) {
    let handles = InlineCheckTestHandles::default();
    let mut dom = VirtualDom::new_with_props(
        CheckHarness,
        CheckHarnessProps {
            question: question(correct),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    (dom, handles)
}

#[test]
fn inline_check_starts_unanswered() {
    let (dom, _handles) = setup_check(2);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Which option is right?"), "missing prompt in {html}");
    assert!(!html.contains("check-result"), "verdict shown too early in {html}");
    assert!(!html.contains("Because the regulations"), "explanation leaked in {html}");
}

#[test]
fn inline_check_reveals_correct_verdict() {
    let (mut dom, handles) = setup_check(2);

    handles.select().call(2);
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(">Correct<"), "missing verdict in {html}");
    assert!(
        html.contains("Because the regulations say so."),
        "missing explanation in {html}"
    );
    assert!(html.contains("disabled"), "options not locked in {html}");
}

#[test]
fn inline_check_reveals_incorrect_verdict_with_explanation() {
    let (mut dom, handles) = setup_check(2);

    handles.select().call(0);
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(">Not quite<"), "missing verdict in {html}");
    // the explanation shows regardless of correctness
    assert!(
        html.contains("Because the regulations say so."),
        "missing explanation in {html}"
    );
    assert!(
        html.contains("check-option--correct"),
        "correct option not highlighted in {html}"
    );
}

#[test]
fn inline_check_first_answer_is_final() {
    let (mut dom, handles) = setup_check(2);

    handles.select().call(2);
    drive_dom(&mut dom);
    handles.select().call(0);
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(">Correct<"), "first verdict lost in {html}");
    assert!(!html.contains(">Not quite<"), "second answer recorded in {html}");
}

#[test]
fn inline_check_repeat_of_same_option_changes_nothing() {
    let (mut dom, handles) = setup_check(2);

    handles.select().call(2);
    drive_dom(&mut dom);
    handles.select().call(2);
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(">Correct<"), "verdict lost in {html}");
}

#[test]
fn inline_check_ignores_out_of_range_selection() {
    let (mut dom, handles) = setup_check(2);

    handles.select().call(99);
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("check-result"), "bad index recorded in {html}");
}

#[test]
fn inline_check_renders_options_in_authored_order() {
    let (dom, _handles) = setup_check(2);

    let html = dioxus_ssr::render(&dom);
    let a = html.find("Option A").expect("option A rendered");
    let b = html.find("Option B").expect("option B rendered");
    let c = html.find("Option C").expect("option C rendered");
    let d = html.find("Option D").expect("option D rendered");
    assert!(a < b && b < c && c < d, "options out of order in {html}");
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[derive(Props, Clone)]
struct QuizHarnessProps {
    quiz: model::Quiz,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    use_context_provider(|| props.handles.clone());
    rsx! {
        Quiz { quiz: props.quiz.clone() }
    }
}

fn setup_quiz(corrects: &[usize]) -> (VirtualDom, QuizTestHandles) {
    let handles = QuizTestHandles::default();
    let mut dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            quiz: quiz(corrects),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    (dom, handles)
}

#[test]
fn quiz_starts_with_no_score() {
    let (dom, _handles) = setup_quiz(&[1, 0, 3]);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Knowledge Check"), "missing title in {html}");
    assert!(html.contains("0 of 3 answered"), "missing progress in {html}");
    assert!(!html.contains("Score:"), "score shown too early in {html}");
}

#[test]
fn quiz_scores_a_mixed_run() {
    // correct answers are [1, 0, 3]; the reader answers [1, 1, 3]
    let (mut dom, handles) = setup_quiz(&[1, 0, 3]);

    handles.answer().call((0, 1));
    drive_dom(&mut dom);
    handles.answer().call((1, 1));
    drive_dom(&mut dom);
    handles.answer().call((2, 3));
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("3 of 3 answered"), "missing progress in {html}");
    assert!(html.contains("Score: 2 of 3"), "missing score in {html}");
}

#[test]
fn quiz_answers_one_question_without_touching_others() {
    let (mut dom, handles) = setup_quiz(&[1, 0, 3]);

    handles.answer().call((1, 0));
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("1 of 3 answered"), "missing progress in {html}");
    assert!(html.contains(">Correct<"), "missing verdict in {html}");
    assert_eq!(
        html.matches("quiz-result").count(),
        // one verdict container, with its modifier class on the same element
        2,
        "other questions revealed in {html}"
    );
    assert!(!html.contains("Score:"), "score shown before completion in {html}");
}

#[test]
fn quiz_first_answer_per_question_is_final() {
    let (mut dom, handles) = setup_quiz(&[1, 0]);

    handles.answer().call((0, 0));
    drive_dom(&mut dom);
    handles.answer().call((0, 1));
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("1 of 2 answered"), "answer count drifted in {html}");
    assert!(html.contains(">Not quite<"), "first verdict lost in {html}");
    assert!(!html.contains(">Correct<"), "second answer recorded in {html}");
}

#[test]
fn quiz_answers_accepted_in_any_order() {
    let (mut dom, handles) = setup_quiz(&[0, 0, 0]);

    handles.answer().call((2, 0));
    drive_dom(&mut dom);
    handles.answer().call((0, 0));
    drive_dom(&mut dom);
    handles.answer().call((1, 0));
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Score: 3 of 3"), "missing score in {html}");
}

#[test]
fn quiz_with_no_questions_is_complete_from_the_start() {
    let (dom, _handles) = setup_quiz(&[]);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("0 of 0 answered"), "missing progress in {html}");
    assert!(html.contains("Score: 0 of 0"), "missing degenerate score in {html}");
    assert!(
        html.contains("No questions in this check yet."),
        "missing empty note in {html}"
    );
}

#[test]
fn quiz_ignores_out_of_range_indices() {
    let (mut dom, handles) = setup_quiz(&[1]);

    handles.answer().call((5, 0));
    drive_dom(&mut dom);
    handles.answer().call((0, 9));
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("0 of 1 answered"), "bad index recorded in {html}");
}
