//! Ordered matcher table. The first matcher that accepts a message wins.

use regex::Regex;

use karma_core::config::TermConfig;
use karma_core::constants::{DECREMENT, DEFAULT_LIST_SIZE, INCREMENT, MAX_LIST_SIZE};
use karma_core::errors::{ConfigError, KarmaResult};
use karma_core::SortOrder;

use crate::command::Command;

type Matcher = fn(&CommandParser, &str) -> Option<Command>;

/// Evaluation order matters: `karma delete foo` must not be read as a
/// leaderboard request, and `foo += bar` must not be read as tokens.
const MATCHERS: &[Matcher] = &[
    CommandParser::match_delete,
    CommandParser::match_modified,
    CommandParser::match_list,
    CommandParser::match_link,
    CommandParser::match_unlink,
    CommandParser::match_check,
    CommandParser::match_modify,
];

pub struct CommandParser {
    term: Regex,
    delete: Regex,
    modified: Regex,
    list: Regex,
    link: Regex,
    unlink: Regex,
    check: Regex,
    modify_token: Regex,
}

impl CommandParser {
    /// Compile the matcher table around the configured term pattern.
    ///
    /// The pattern is wrapped in a non-capturing group and every capture
    /// this parser reads is named, so user patterns may contain groups.
    pub fn new(config: &TermConfig) -> KarmaResult<Self> {
        let t = format!("(?:{})", config.pattern);
        Ok(Self {
            term: compile(&format!(r"^{t}$"))?,
            delete: compile(r"^(?i:karma)\s+(?i:delete)(?:\s+(?P<term>.*?))?\s*$")?,
            modified: compile(r"^(?i:karma)\s+(?i:modified)(?:\s+(?P<term>.*?))?\s*$")?,
            list: compile(
                r"^(?i:karma)(?:\s+(?P<order>(?i:best|worst)))?(?:\s+(?P<limit>\d+))?\s*$",
            )?,
            link: compile(&format!(r"^(?P<term>{t})\s*\+=\s*(?P<other>{t})\s*$"))?,
            unlink: compile(&format!(r"^(?P<term>{t})\s*-=\s*(?P<other>{t})\s*$"))?,
            check: compile(&format!(r"^(?P<term>{t})~~\s*$"))?,
            modify_token: compile(&format!(r"^(?P<term>{t})(?P<op>\+\+|--)$"))?,
        })
    }

    /// Parse one chat message. `None` when nothing in it is a command.
    pub fn parse(&self, message: &str) -> Option<Command> {
        let message = message.trim();
        MATCHERS.iter().find_map(|matcher| matcher(self, message))
    }

    /// A keyword argument counts only if the whole of it is a term.
    fn keyword_term(&self, regex: &Regex, message: &str) -> Option<Option<String>> {
        let caps = regex.captures(message)?;
        let term = caps
            .name("term")
            .map(|m| m.as_str())
            .filter(|s| self.term.is_match(s))
            .map(str::to_string);
        Some(term)
    }

    fn match_delete(&self, message: &str) -> Option<Command> {
        self.keyword_term(&self.delete, message).map(Command::Delete)
    }

    fn match_modified(&self, message: &str) -> Option<Command> {
        self.keyword_term(&self.modified, message)
            .map(Command::Modified)
    }

    fn match_list(&self, message: &str) -> Option<Command> {
        let caps = self.list.captures(message)?;
        let order = match caps.name("order") {
            Some(m) if m.as_str().eq_ignore_ascii_case("worst") => SortOrder::Ascending,
            _ => SortOrder::Descending,
        };
        let limit = caps
            .name("limit")
            // Digits that overflow are still a request for "as many as possible".
            .map(|m| m.as_str().parse::<usize>().unwrap_or(MAX_LIST_SIZE))
            .unwrap_or(DEFAULT_LIST_SIZE)
            .clamp(1, MAX_LIST_SIZE);
        Some(Command::List { order, limit })
    }

    fn match_link(&self, message: &str) -> Option<Command> {
        let caps = self.link.captures(message)?;
        Some(Command::Link {
            term: caps["term"].to_string(),
            other: caps["other"].to_string(),
        })
    }

    fn match_unlink(&self, message: &str) -> Option<Command> {
        let caps = self.unlink.captures(message)?;
        Some(Command::Unlink {
            term: caps["term"].to_string(),
            other: caps["other"].to_string(),
        })
    }

    fn match_check(&self, message: &str) -> Option<Command> {
        let caps = self.check.captures(message)?;
        Some(Command::Check(caps["term"].to_string()))
    }

    fn match_modify(&self, message: &str) -> Option<Command> {
        let changes: Vec<(String, i64)> = message
            .split_whitespace()
            .filter_map(|token| {
                let caps = self.modify_token.captures(token)?;
                let delta = if &caps["op"] == "++" { INCREMENT } else { DECREMENT };
                Some((caps["term"].to_string(), delta))
            })
            .collect();
        (!changes.is_empty()).then_some(Command::Modify(changes))
    }
}

fn compile(pattern: &str) -> KarmaResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        ConfigError::ValidationFailed {
            field: "terms.pattern".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
