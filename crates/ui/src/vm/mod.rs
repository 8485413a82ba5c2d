mod lesson_vm;
mod markdown;
mod quiz_vm;

pub use lesson_vm::{
    BlockVm, LessonItemVm, LessonPageVm, ModuleCardVm, ModuleVm, SectionVm, map_lesson_page,
    map_module, map_module_card,
};
pub use markdown::{markdown_to_html, sanitize_html};
pub use quiz_vm::{QuizProgressVm, map_quiz_progress};
