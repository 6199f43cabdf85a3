//! Read-eval-print loop: turns input lines into session operations.

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use parley_ai::{Session, SessionError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use super::commands::{self, Command, HELP};
use super::export::write_export;
use super::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Terminal presentation shell. Owns the session for its whole lifetime.
pub struct Shell<W: Write> {
    session: Session,
    export_dir: PathBuf,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(session: Session, export_dir: PathBuf, out: W) -> Self {
        Self {
            session,
            export_dir,
            out,
        }
    }

    /// Print the banner, apply a key supplied at startup, and show the
    /// example conversation if the session is still unconfigured.
    pub async fn open(&mut self, api_key: Option<&str>) -> std::io::Result<()> {
        write!(self.out, "{}", render::banner())?;
        if let Some(key) = api_key {
            self.apply_key(key).await?;
        }
        if !self.session.is_configured() {
            writeln!(self.out, "{}", render::unconfigured_intro(Local::now()))?;
        }
        Ok(())
    }

    /// Read lines from `input` until EOF or `/quit`.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> std::io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(self.out)?;
                break;
            };
            if self.handle_line(&line).await? == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "Bye!")?;
        self.out.flush()
    }

    /// Configure the session and report the outcome to the user.
    pub async fn apply_key(&mut self, api_key: &str) -> std::io::Result<()> {
        let had_client = self.session.is_configured();
        match self.session.configure(api_key).await {
            Ok(_) => writeln!(self.out, "API configured successfully!"),
            Err(e) if had_client => writeln!(
                self.out,
                "Error configuring API: {e}\nKeeping the previously configured key."
            ),
            Err(e) => writeln!(self.out, "Error configuring API: {e}"),
        }
    }

    pub(crate) async fn handle_line(&mut self, line: &str) -> std::io::Result<Flow> {
        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "shell command");

        match command {
            Command::Message(text) => self.send(&text).await?,
            Command::Quick(action) => self.send(action.prompt()).await?,
            Command::Key(key) => self.apply_key(&key).await?,
            Command::Model(model) => match self.session.set_model(&model) {
                Ok(()) => writeln!(self.out, "Model set to {model}")?,
                Err(e) => writeln!(self.out, "{e}")?,
            },
            Command::Temperature(t) => match self.session.set_temperature(t) {
                Ok(()) => writeln!(self.out, "Response creativity set to {t:.1}")?,
                Err(e) => writeln!(self.out, "{e}")?,
            },
            Command::MaxTokens(n) => match self.session.set_max_tokens(n) {
                Ok(()) => writeln!(self.out, "Max response length set to {n} tokens")?,
                Err(e) => writeln!(self.out, "{e}")?,
            },
            Command::Clear => {
                self.session.clear();
                writeln!(self.out, "Chat history cleared.")?;
            }
            Command::Export => self.export()?,
            Command::History => self.history()?,
            Command::Settings => writeln!(
                self.out,
                "{}",
                render::settings(
                    self.session.config(),
                    self.session.usage(),
                    self.session.is_configured()
                )
            )?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn send(&mut self, text: &str) -> std::io::Result<()> {
        if !self.session.is_configured() {
            return writeln!(
                self.out,
                "Please enter your Google Gemini API key with /key <api-key> to start chatting."
            );
        }

        writeln!(self.out, "Thinking...")?;
        self.out.flush()?;

        match self.session.send(text).await {
            Ok(exchange) => {
                let rendered = render::exchange(exchange);
                writeln!(self.out, "{rendered}")
            }
            Err(SessionError::EmptyMessage) => Ok(()),
            Err(e) => writeln!(self.out, "{e}"),
        }
    }

    fn export(&mut self) -> std::io::Result<()> {
        if self.session.transcript().is_empty() {
            return writeln!(self.out, "Nothing to export yet.");
        }
        let text = self.session.export_text();
        match write_export(&self.export_dir, &text, Local::now()) {
            Ok(path) => writeln!(self.out, "Chat history saved to {}", path.display()),
            Err(e) => {
                warn!("export failed: {e}");
                writeln!(self.out, "Export failed: {e}")
            }
        }
    }

    fn history(&mut self) -> std::io::Result<()> {
        if self.session.transcript().is_empty() {
            return writeln!(self.out, "Hi! I'm your AI assistant. Ask me anything to get started!");
        }
        for exchange in self.session.transcript() {
            writeln!(self.out, "{}", render::exchange(exchange))?;
        }
        Ok(())
    }
}
