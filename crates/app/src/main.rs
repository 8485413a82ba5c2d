use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use content::EmbeddedCatalog;
use services::CourseService;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    course_service: Arc<CourseService>,
}

impl UiApp for DesktopApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui        # launch the study centre (default)");
    eprintln!("  cargo run -p app -- validate  # check the embedded course data and exit");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Validate,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "validate" => Some(Self::Validate),
            _ => None,
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            let err = ArgsError::UnknownArg(first.to_string());
            eprintln!("{err}");
            print_usage();
            err
        })?,
    };

    if let Some(extra) = argv.get(1) {
        let err = ArgsError::UnknownArg(extra.clone());
        eprintln!("{err}");
        print_usage();
        return Err(err.into());
    }

    // Load and validate the embedded course data up front. Authoring errors
    // abort startup instead of rendering broken pages.
    let catalog = EmbeddedCatalog::load()?;

    match cmd {
        Command::Validate => {
            for module in catalog.modules() {
                println!(
                    "{}: {} ({} lessons)",
                    module.slug(),
                    module.title(),
                    module.lessons().len()
                );
            }
            println!(
                "ok: {} modules, {} lessons",
                catalog.modules().len(),
                catalog.lesson_count()
            );
            Ok(())
        }
        Command::Ui => {
            let course_service = Arc::new(CourseService::new(Arc::new(catalog)));
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { course_service });
            let context = build_app_context(&app);

            // Explicitly disable always-on-top so the app doesn't behave
            // like a modal window in dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Toolbox")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
