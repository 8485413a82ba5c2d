use content::{CourseCatalog, EmbeddedCatalog};
use toolbox_core::model::{LessonSlug, ModuleSlug};

#[test]
fn embedded_course_data_is_valid() {
    let catalog = EmbeddedCatalog::load().expect("embedded course data should validate");

    assert!(!catalog.modules().is_empty());
    assert!(catalog.lesson_count() >= catalog.modules().len());
}

#[tokio::test]
async fn every_listed_lesson_resolves() {
    let catalog = EmbeddedCatalog::load().unwrap();

    for module in catalog.list_modules().await.unwrap() {
        for lesson_ref in module.lessons() {
            let lesson = catalog
                .get_lesson(lesson_ref.slug())
                .await
                .unwrap()
                .unwrap_or_else(|| panic!("missing lesson {}", lesson_ref.slug()));
            assert_eq!(lesson.module(), module.slug());
            assert_eq!(lesson.title(), lesson_ref.title());
        }
    }
}

#[tokio::test]
async fn lessons_carry_sections_checks_and_quizzes() {
    let catalog = EmbeddedCatalog::load().unwrap();
    let slug = LessonSlug::new("understanding-falls").unwrap();

    let lesson = catalog.get_lesson(&slug).await.unwrap().unwrap();

    assert!(!lesson.sections().is_empty());
    assert!(lesson.sections().iter().any(|section| section.check().is_some()));
    assert!(!lesson.quiz().is_empty());
    assert!(!lesson.faqs().is_empty());
    assert!(!lesson.learning_outcomes().is_empty());

    // Every quiz answer index points inside its option list by construction;
    // spot-check the first question end to end.
    let first = &lesson.quiz().questions()[0];
    assert!(first.correct() < first.option_count());
}

#[tokio::test]
async fn unknown_slugs_return_none() {
    let catalog = EmbeddedCatalog::load().unwrap();

    let module = catalog
        .get_module(&ModuleSlug::new("no-such-module").unwrap())
        .await
        .unwrap();
    let lesson = catalog
        .get_lesson(&LessonSlug::new("no-such-lesson").unwrap())
        .await
        .unwrap();

    assert!(module.is_none());
    assert!(lesson.is_none());
}
