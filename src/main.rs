mod browse;
mod cli;

use anyhow::Context;
use browse::Browser;
use cli::{Args, Command, DETAIL_FAILED_MESSAGE, LIST_FAILED_MESSAGE};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use swapi_explorer::adapters::outbound::console::StderrProgressReporter;
use swapi_explorer::adapters::outbound::filesystem::FileSessionStore;
use swapi_explorer::adapters::outbound::network::SwapiCatalogClient;
use swapi_explorer::application::controllers::CharacterListController;
use swapi_explorer::application::dto::ListRequest;
use swapi_explorer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use swapi_explorer::application::session::SessionContext;
use swapi_explorer::application::use_cases::AggregateCharacterDetailsUseCase;
use swapi_explorer::config::{self, AppSettings, ConfigFile};
use swapi_explorer::ports::outbound::{CatalogFormatter, ProgressReporter};
use swapi_explorer::shared::error::ExitCode;
use swapi_explorer::shared::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = AppSettings::resolve(config.as_ref(), args.overrides())?;

    let session_path = match settings.session_file.clone() {
        Some(path) => path,
        None => FileSessionStore::default_path()?,
    };
    let mut session = SessionContext::init(FileSessionStore::new(session_path))?;

    match args.command {
        Command::Login { user } => {
            session.login()?;
            match user {
                Some(user) => eprintln!("✅ Logged in as {}", user),
                None => eprintln!("✅ Logged in"),
            }
            Ok(())
        }
        Command::Logout => {
            session.logout()?;
            eprintln!("👋 Logged out");
            Ok(())
        }
        Command::Status => {
            if session.is_authenticated() {
                println!("Logged in");
            } else {
                println!("Not logged in");
            }
            Ok(())
        }
        Command::List { page, search } => {
            session.require_authenticated()?;
            let presenter_type = PresenterType::for_output(args.output);
            let formatter = create_formatter(&settings, &presenter_type);
            let client = SwapiCatalogClient::with_options(&settings.base_url, settings.timeout)?;
            let progress_reporter = StderrProgressReporter::new();

            let request = ListRequest::new(page, search.unwrap_or_default());
            let mut controller = CharacterListController::new(client);
            progress_reporter.start_loading(&FormatterFactory::page_loading_message(
                request.active_search(),
            ));
            let loaded = controller.load_request(request).await;
            progress_reporter.finish_loading();
            let view = loaded.context(LIST_FAILED_MESSAGE)?;

            let rendered = formatter.format_page(&view)?;
            present(presenter_type, &rendered, &progress_reporter)
        }
        Command::Show { target } => {
            session.require_authenticated()?;
            let locator = cli::resolve_character_locator(&target, &settings.base_url)?;
            let presenter_type = PresenterType::for_output(args.output);
            let formatter = create_formatter(&settings, &presenter_type);
            let client = SwapiCatalogClient::with_options(&settings.base_url, settings.timeout)?;

            let use_case =
                AggregateCharacterDetailsUseCase::new(client, StderrProgressReporter::new());
            let character = use_case
                .execute(&locator)
                .await
                .context(DETAIL_FAILED_MESSAGE)?;

            let rendered = formatter.format_character(&character)?;
            present(presenter_type, &rendered, &StderrProgressReporter::new())
        }
        Command::Browse => {
            session.require_authenticated()?;
            let formatter = create_formatter(&settings, &PresenterType::Stdout);
            let client = SwapiCatalogClient::with_options(&settings.base_url, settings.timeout)?;

            let mut browser = Browser::new(
                CharacterListController::new(client.clone()),
                AggregateCharacterDetailsUseCase::new(client, StderrProgressReporter::new()),
                StderrProgressReporter::new(),
                &mut session,
                formatter,
            );
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            browser.run(stdin.lock(), &mut stdout).await
        }
    }
}

/// Explicit `--config` path, otherwise `swapi-explorer.config.yml` in the working directory
fn load_config(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let current_dir = std::env::current_dir()?;
            let discovered = config::discover_config(&current_dir)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    current_dir.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(discovered)
        }
    }
}

/// Writes the rendered output; a written file is confirmed on stderr
fn present(
    presenter_type: PresenterType,
    rendered: &str,
    progress_reporter: &impl ProgressReporter,
) -> Result<()> {
    let saved_to = match &presenter_type {
        PresenterType::File(path) => Some(path.display().to_string()),
        PresenterType::Stdout => None,
    };
    PresenterFactory::create(presenter_type).present(rendered)?;
    if let Some(path) = saved_to {
        progress_reporter.report_completion(&format!("✅ Saved to {}", path));
    }
    Ok(())
}

/// Colors only when writing text to an interactive terminal
fn create_formatter(
    settings: &AppSettings,
    presenter_type: &PresenterType,
) -> Box<dyn CatalogFormatter> {
    let colored = presenter_type.is_stdout() && io::stdout().is_terminal();
    FormatterFactory::create(settings.format, colored)
}
