//! Interactive grid: one command per line, the page is redrawn after each one.

use crate::cli::{DETAIL_FAILED_MESSAGE, LIST_FAILED_MESSAGE};
use std::io::{BufRead, Write};
use std::str::FromStr;
use swapi_explorer::application::controllers::CharacterListController;
use swapi_explorer::application::session::SessionContext;
use swapi_explorer::application::use_cases::AggregateCharacterDetailsUseCase;
use swapi_explorer::ports::outbound::{
    CatalogFormatter, CatalogRepository, ProgressReporter, SessionStore,
};
use swapi_explorer::shared::Result;

const HELP: &str = "\
Commands:
  n, next            next page
  p, prev            previous page
  s, search <term>   search by name (empty term clears the search)
  c, clear           clear the search
  o, open <n>        show card <n> of this page
  r, retry           repeat the last request that failed
  logout             log out and leave
  h, help            this help
  q, quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Search(String),
    Clear,
    Open(usize),
    Retry,
    Logout,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "n" | "next" => Ok(BrowseCommand::Next),
            "p" | "prev" | "previous" => Ok(BrowseCommand::Previous),
            "s" | "search" if rest.is_empty() => Ok(BrowseCommand::Clear),
            "s" | "search" => Ok(BrowseCommand::Search(rest.to_string())),
            "c" | "clear" => Ok(BrowseCommand::Clear),
            "o" | "open" => rest
                .parse::<usize>()
                .ok()
                .filter(|index| *index > 0)
                .map(BrowseCommand::Open)
                .ok_or_else(|| format!("Expected a card number, e.g. `open 1`, got '{}'", rest)),
            "r" | "retry" => Ok(BrowseCommand::Retry),
            "logout" => Ok(BrowseCommand::Logout),
            "h" | "help" | "?" => Ok(BrowseCommand::Help),
            "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
            _ => Err(format!("Unknown command '{}'. Type `help` for commands.", line)),
        }
    }
}

/// The request to repeat on `retry`
#[derive(Debug, Clone, PartialEq, Eq)]
enum FailedRequest {
    Page,
    Character(String),
}

/// One interactive browse session
pub struct Browser<'s, R, PR, S> {
    controller: CharacterListController<R>,
    details: AggregateCharacterDetailsUseCase<R, PR>,
    progress: PR,
    session: &'s mut SessionContext<S>,
    formatter: Box<dyn CatalogFormatter>,
    failed: Option<FailedRequest>,
}

impl<'s, R, PR, S> Browser<'s, R, PR, S>
where
    R: CatalogRepository,
    PR: ProgressReporter,
    S: SessionStore,
{
    pub fn new(
        controller: CharacterListController<R>,
        details: AggregateCharacterDetailsUseCase<R, PR>,
        progress: PR,
        session: &'s mut SessionContext<S>,
        formatter: Box<dyn CatalogFormatter>,
    ) -> Self {
        Self {
            controller,
            details,
            progress,
            session,
            formatter,
            failed: None,
        }
    }

    /// Runs until `quit`, `logout` or end of input
    pub async fn run<I: BufRead, O: Write>(&mut self, input: I, output: &mut O) -> Result<()> {
        self.session.require_authenticated()?;

        self.load_page(output).await?;
        writeln!(output, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match BrowseCommand::from_str(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            };

            match command {
                BrowseCommand::Quit => break,
                BrowseCommand::Logout => {
                    self.session.logout()?;
                    self.controller.reset();
                    writeln!(output, "👋 Logged out")?;
                    break;
                }
                command => self.dispatch(command, output).await?,
            }
        }
        Ok(())
    }

    async fn dispatch<O: Write>(&mut self, command: BrowseCommand, output: &mut O) -> Result<()> {
        match command {
            BrowseCommand::Next => {
                if !self.controller.has_next() {
                    writeln!(output, "Already on the last page.")?;
                    return Ok(());
                }
                self.progress.start_loading("Loading characters...");
                let result = self.controller.next_page().await;
                self.progress.finish_loading();
                self.show_page(result.map(|_| ()), output)
            }
            BrowseCommand::Previous => {
                if !self.controller.has_previous() {
                    writeln!(output, "Already on the first page.")?;
                    return Ok(());
                }
                self.progress.start_loading("Loading characters...");
                let result = self.controller.previous_page().await;
                self.progress.finish_loading();
                self.show_page(result.map(|_| ()), output)
            }
            BrowseCommand::Search(term) => {
                self.progress
                    .start_loading(&format!("Searching for \"{}\"...", term));
                let result = self.controller.search(&term).await;
                self.progress.finish_loading();
                self.show_page(result.map(|_| ()), output)
            }
            BrowseCommand::Clear => {
                self.progress.start_loading("Loading characters...");
                let result = self.controller.clear_search().await;
                self.progress.finish_loading();
                self.show_page(result.map(|_| ()), output)
            }
            BrowseCommand::Open(index) => {
                let view = self.controller.view();
                match view.card(index) {
                    Some(card) => {
                        let locator = card.url.clone();
                        self.open_character(&locator, output).await
                    }
                    None => {
                        writeln!(output, "No card {} on this page.", index)?;
                        Ok(())
                    }
                }
            }
            BrowseCommand::Retry => match self.failed.clone() {
                Some(FailedRequest::Character(locator)) => {
                    self.open_character(&locator, output).await
                }
                Some(FailedRequest::Page) | None => {
                    self.progress.start_loading("Loading characters...");
                    let result = self.controller.retry().await;
                    self.progress.finish_loading();
                    self.show_page(result.map(|_| ()), output)
                }
            },
            BrowseCommand::Help => {
                writeln!(output, "{}", HELP)?;
                Ok(())
            }
            BrowseCommand::Quit | BrowseCommand::Logout => Ok(()),
        }
    }

    async fn load_page<O: Write>(&mut self, output: &mut O) -> Result<()> {
        self.progress.start_loading("Loading characters...");
        let result = self.controller.load().await;
        self.progress.finish_loading();
        self.show_page(result.map(|_| ()), output)
    }

    /// Redraws the grid, or reports the failure and remembers it for `retry`
    fn show_page<O: Write>(&mut self, loaded: Result<()>, output: &mut O) -> Result<()> {
        match loaded {
            Ok(()) => {
                self.failed = None;
                let rendered = self.formatter.format_page(&self.controller.view())?;
                writeln!(output, "{}", rendered)?;
            }
            Err(e) => {
                self.failed = Some(FailedRequest::Page);
                self.report_failure(LIST_FAILED_MESSAGE, &e, output)?;
            }
        }
        Ok(())
    }

    async fn open_character<O: Write>(&mut self, locator: &str, output: &mut O) -> Result<()> {
        match self.details.execute(locator).await {
            Ok(character) => {
                self.failed = None;
                let rendered = self.formatter.format_character(&character)?;
                writeln!(output, "{}", rendered)?;
            }
            Err(e) => {
                self.failed = Some(FailedRequest::Character(locator.to_string()));
                self.report_failure(DETAIL_FAILED_MESSAGE, &e, output)?;
            }
        }
        Ok(())
    }

    fn report_failure<O: Write>(
        &self,
        message: &str,
        error: &anyhow::Error,
        output: &mut O,
    ) -> Result<()> {
        writeln!(output, "❌ {} Type `retry` to try again.", message)?;
        self.progress.report_error(&format!("   {:#}", error));
        Ok(())
    }
}
