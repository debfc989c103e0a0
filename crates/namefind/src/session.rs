//! Interactive lookup session
//!
//! The session owns the state the engine deliberately does not: the active
//! locale, the search history and the last result (for export). Each input
//! line is either a name to look up or a `:command`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use namefind_core::{AliasedResult, LookupError, MatchEngine, Registry, SearchOptions};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::export;
use crate::history::SearchHistory;
use crate::locale::Locale;
use crate::render;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    History,
    Clear,
    Lang(Locale),
    Export(PathBuf),
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Anything not starting with `:` is a search.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Search(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match (name, arg) {
            ("history", _) => Ok(Command::History),
            ("clear", _) => Ok(Command::Clear),
            ("help", _) => Ok(Command::Help),
            ("quit" | "q" | "exit", _) => Ok(Command::Quit),
            ("lang", "") => Err(Error::Usage("usage: :lang <en|es>".to_string())),
            ("lang", code) => Ok(Command::Lang(code.parse()?)),
            ("export", "") => Err(Error::Usage("usage: :export <file.csv>".to_string())),
            ("export", path) => Ok(Command::Export(PathBuf::from(path))),
            (other, _) => Err(Error::Usage(format!("unknown command ':{}'", other))),
        }
    }
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// A last result kept for export
#[derive(Debug, Clone)]
struct LastSearch {
    query: String,
    aliased: AliasedResult,
}

/// Lookup session over a loaded registry
pub struct Session {
    registry: Registry,
    engine: MatchEngine,
    options: SearchOptions,
    locale: Locale,
    json: bool,
    history: SearchHistory,
    last: Option<LastSearch>,
}

impl Session {
    pub fn new(registry: Registry, options: SearchOptions, locale: Locale) -> Self {
        Self {
            registry,
            engine: MatchEngine::new(),
            options,
            locale,
            json: false,
            history: SearchHistory::new(),
            last: None,
        }
    }

    /// Render results as JSON instead of text
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Look up a name, record it in the history and keep the result for export.
    pub fn search(&mut self, query: &str) -> Result<&AliasedResult> {
        let aliased = self
            .engine
            .search_with_aliases(query, &self.registry, &self.options)?;

        let query = query.trim().to_string();
        self.history.record(&query);
        debug!(
            query = %query,
            outcome = outcome_label(&aliased),
            matches = aliased.result.len(),
            unresolved_aliases = aliased.unique_aliases().filter(|a| a.is_unknown()).count(),
            "Search complete"
        );

        Ok(&self.last.insert(LastSearch { query, aliased }).aliased)
    }

    /// Render a result in the configured format and language
    pub fn render(&self, aliased: &AliasedResult) -> Result<String> {
        if self.json {
            let mut json = render::render_json(aliased)?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(render::render_text(aliased, self.locale.messages()))
        }
    }

    /// Write the last result to `path`
    pub fn export_last(&self, path: &Path) -> Result<()> {
        let last = self
            .last
            .as_ref()
            .ok_or_else(|| Error::Usage(self.locale.messages().nothing_to_export.to_string()))?;
        export::export_result(path, &last.query, &last.aliased.result)
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Search(query) => {
                let aliased = self.search(&query)?.clone();
                self.render(&aliased)?
            }
            Command::History => self.render_history(),
            Command::Clear => {
                self.history.clear();
                format!("{}\n", self.locale.messages().history_cleared)
            }
            Command::Lang(locale) => {
                self.locale = locale;
                format!("{}\n", locale.messages().language_set)
            }
            Command::Export(path) => {
                self.export_last(&path)?;
                format!("{} {}\n", self.locale.messages().exported, path.display())
            }
            Command::Help => {
                let messages = self.locale.messages();
                format!("{}\n{}\n", messages.help_text, messages.commands)
            }
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(reply))
    }

    /// Read lines from `input` until EOF or `:quit`, writing replies to `output`.
    ///
    /// Blank queries and bad commands are reported and the loop continues;
    /// only failures writing to `output` end the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let messages = self.locale.messages();
        writeln!(output, "{}", messages.title)?;
        writeln!(output, "{}", messages.commands)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{} > ", self.locale.messages().placeholder)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let outcome = Command::parse(&line).and_then(|command| self.execute(command));
            match outcome {
                Ok(Reply::Text(text)) => write!(output, "{}", text)?,
                Ok(Reply::Quit) => break,
                Err(Error::Lookup(LookupError::EmptyQuery)) => {
                    writeln!(output, "{}", self.locale.messages().help_text)?
                }
                Err(err @ (Error::Usage(_) | Error::Config(_))) => writeln!(output, "{}", err)?,
                Err(err) => {
                    warn!(error = %err, "Command failed");
                    writeln!(output, "error: {}", err)?
                }
            }
        }

        writeln!(output)?;
        Ok(())
    }

    fn render_history(&self) -> String {
        let messages = self.locale.messages();
        if self.history.is_empty() {
            return format!("{}\n", messages.history_empty);
        }
        let mut out = format!("{} ({})\n", messages.history, self.history.len());
        for (idx, query) in self.history.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, query));
        }
        out
    }
}

fn outcome_label(aliased: &AliasedResult) -> &'static str {
    if aliased.result.is_empty() {
        "none"
    } else if aliased.result.is_exact() {
        "exact"
    } else {
        "fuzzy"
    }
}
