//! Parsing of shell input lines into commands.

/// Preset prompts that go through the normal send path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ExplainAi,
    Coding,
    Creative,
}

impl QuickAction {
    pub fn prompt(self) -> &'static str {
        match self {
            QuickAction::ExplainAi => "What is artificial intelligence and how does it work?",
            QuickAction::Coding => "Can you help me with a coding problem?",
            QuickAction::Creative => "Help me write a creative story or poem",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Message(String),
    Key(String),
    Model(String),
    Temperature(f64),
    MaxTokens(u32),
    Clear,
    Export,
    History,
    Settings,
    Help,
    Quit,
    Quick(QuickAction),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command: {0} (type /help)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
Commands:
  /key <api-key>          set the Gemini API key
  /model <name>           switch model
  /temperature <0.0-1.0>  response creativity
  /max-tokens <100-2000>  maximum response length
  /clear                  clear the chat history
  /export                 save the chat history to a text file
  /history                show the chat history
  /settings               show current settings
  /explain, /coding, /creative   quick prompts
  /help                   show this help
  /quit                   exit
Anything else is sent as a message. Start a message with // to send a
leading slash, e.g. //usr/bin ...";

/// Parse one input line. Blank lines yield `None`.
///
/// Messages are passed on exactly as typed. A leading `//` sends the line
/// as a message with one slash removed.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.starts_with('/') {
        return Ok(Some(Command::Message(line.to_string())));
    }
    if trimmed.starts_with("//") {
        let message = line.replacen("//", "/", 1);
        return Ok(Some(Command::Message(message)));
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match name {
        "/key" => Command::Key(required(arg, "/key <api-key>")?.to_string()),
        "/model" => Command::Model(required(arg, "/model <name>")?.to_string()),
        "/temperature" | "/temp" => {
            const USAGE: &str = "/temperature <0.0-1.0>";
            let value = required(arg, USAGE)?
                .parse()
                .map_err(|_| CommandError::Usage(USAGE))?;
            Command::Temperature(value)
        }
        "/max-tokens" | "/max" => {
            const USAGE: &str = "/max-tokens <100-2000>";
            let value = required(arg, USAGE)?
                .parse()
                .map_err(|_| CommandError::Usage(USAGE))?;
            Command::MaxTokens(value)
        }
        "/clear" => Command::Clear,
        "/export" => Command::Export,
        "/history" => Command::History,
        "/settings" => Command::Settings,
        "/explain" => Command::Quick(QuickAction::ExplainAi),
        "/coding" => Command::Quick(QuickAction::Coding),
        "/creative" => Command::Quick(QuickAction::Creative),
        "/help" | "/h" | "/?" => Command::Help,
        "/quit" | "/exit" | "/q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(arg: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(arg)
    }
}
