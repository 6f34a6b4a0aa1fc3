//! Interactive terminal sessions.
//!
//! `explore` mirrors the study page: search, open sections, tick off
//! activities, and ask the assistant, all in one in-memory session.
//! `chat` is the assistant alone.
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::assistant::{ChatSession, SubmitError};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::links::web_search_url;
use crate::navigation::{Navigator, section_anchor};
use crate::progress::{ActivityKind, Progress};
use crate::render;
use crate::search::SearchOutcome;

const HELP: &str = "\
الأوامر:
  sections                 عرض جميع المحاور
  search <نص>              البحث في المحتوى
  show <id> [رقم النقطة]    عرض محور
  done <id> individual|group   تبديل حالة إنجاز نشاط
  progress                 المحاور المكتملة
  ask <سؤال>               سؤال المساعد الذكي
  web [نص]                 البحث في الويب
  share [id]               نسخ رابط المحور (الحالي إن لم يحدد)
  print                    طباعة
  help                     هذه القائمة
  quit                     خروج";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sections,
    Search(String),
    Show { id: String, point: usize },
    Done { id: String, kind: ActivityKind },
    Progress,
    Ask(String),
    Web(String),
    Share(Option<String>),
    Print,
    Help,
    Quit,
}

/// Parse one input line. Point numbers are 1-based on input.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match head {
        "sections" => Ok(Command::Sections),
        "search" => Ok(Command::Search(rest.to_string())),
        "show" => {
            let mut parts = rest.split_whitespace();
            let id = parts.next().ok_or("usage: show <id> [point]")?;
            let point = match parts.next() {
                Some(n) => n
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| format!("invalid point number: {n}"))?,
                None => 1,
            };
            Ok(Command::Show {
                id: id.to_string(),
                point: point - 1,
            })
        }
        "done" => {
            let mut parts = rest.split_whitespace();
            let (Some(id), Some(kind)) = (parts.next(), parts.next()) else {
                return Err("usage: done <id> individual|group".to_string());
            };
            let kind = kind.parse::<ActivityKind>().map_err(|e| e.to_string())?;
            Ok(Command::Done {
                id: id.to_string(),
                kind,
            })
        }
        "progress" => Ok(Command::Progress),
        "ask" => Ok(Command::Ask(rest.to_string())),
        "web" => Ok(Command::Web(rest.to_string())),
        "share" => Ok(Command::Share((!rest.is_empty()).then(|| rest.to_string()))),
        "print" => Ok(Command::Print),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (type help)")),
    }
}

pub struct Explorer<'a, N: Navigator> {
    catalog: &'a Catalog,
    config: &'a Config,
    chat: &'a ChatSession,
    navigator: N,
    progress: Progress,
    last_query: String,
    last_shown: Option<String>,
}

impl<'a, N: Navigator> Explorer<'a, N> {
    pub fn new(catalog: &'a Catalog, config: &'a Config, chat: &'a ChatSession, navigator: N) -> Self {
        Self {
            catalog,
            config,
            chat,
            navigator,
            progress: Progress::new(),
            last_query: String::new(),
            last_shown: None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{HELP}")?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(cmd) => {
                    if !self.execute(cmd, &mut out).await? {
                        break;
                    }
                }
                Err(msg) => writeln!(out, "{msg}")?,
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    pub async fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool> {
        debug!(?cmd, "explore command");
        match cmd {
            Command::Sections => {
                for s in self.catalog.sections() {
                    writeln!(out, "{}", render::section_line(s))?;
                }
            }
            Command::Search(q) => {
                let outcome = SearchOutcome::run(&q, self.catalog.sections());
                write!(out, "{}", render::search_results(&outcome)?)?;
                self.last_query = outcome.query;
            }
            Command::Show { id, point } => match self.catalog.get(&id) {
                Some(section) => {
                    self.navigator.scroll_to(&section.id)?;
                    self.last_shown = Some(section.id.clone());
                    match render::section_detail(section, point, Some(&self.progress), &self.config.map) {
                        Ok(text) => write!(out, "{text}")?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
                None => writeln!(out, "unknown section: {id}")?,
            },
            Command::Done { id, kind } => {
                match self.progress.toggle(self.catalog, &id, kind) {
                    Ok(true) => writeln!(out, "[x] {id}")?,
                    Ok(false) => writeln!(out, "[ ] {id}")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
                if self.progress.is_complete(&id) {
                    writeln!(out, "أحسنت! أكملت أنشطة هذا المحور.")?;
                }
            }
            Command::Progress => {
                let done = self.progress.completed_sections(self.catalog);
                writeln!(out, "{}/{} مكتمل", done.len(), self.catalog.len())?;
                for id in done {
                    writeln!(out, "  [x] {id}")?;
                }
            }
            Command::Ask(q) => ask(self.chat, &q, out).await?,
            Command::Web(q) => {
                let q = if q.trim().is_empty() { self.last_query.clone() } else { q };
                let url = web_search_url(&q, &self.config.web_search)?;
                self.navigator.open_external(url.as_str())?;
            }
            Command::Share(id) => match id.or_else(|| self.last_shown.clone()) {
                Some(id) => self.navigator.share(&section_anchor(&id))?,
                None => writeln!(out, "usage: share <id> (or show a section first)")?,
            },
            Command::Print => self.navigator.print()?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

async fn ask<W: Write>(chat: &ChatSession, question: &str, out: &mut W) -> Result<()> {
    match chat.submit(question).await {
        Ok(turn) => write!(out, "{}", render::turn(&turn)?)?,
        Err(SubmitError::EmptyQuestion) => {}
        Err(e @ SubmitError::Busy) => writeln!(out, "{e}")?,
    }
    Ok(())
}

/// Plain multi-turn chat: every non-empty line is a question.
pub async fn run_chat<R: BufRead, W: Write>(chat: &ChatSession, input: R, mut out: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        ask(chat, &line, &mut out).await?;
        out.flush()?;
    }
    Ok(())
}
