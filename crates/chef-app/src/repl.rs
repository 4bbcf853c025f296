//! Interactive chat loop over stdin/stdout.

use chef_ai::{ChatSession, Mode, Role};
use chef_common::ChefError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "\
Commands:
  /reset         forget the conversation and start over
  /mode <name>   switch persona (general, fitness, vegan) and start over
  /history       show the conversation so far
  /help          show this help
  /quit          exit";

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Send(String),
    Reset,
    Mode(String),
    History,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplCommand::Send(line.to_string());
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command, ""));

    match name {
        "reset" | "new" => ReplCommand::Reset,
        "mode" => ReplCommand::Mode(rest.to_string()),
        "history" => ReplCommand::History,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_string()),
    }
}

fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Model => "chef",
    }
}

/// Run the chat loop until `/quit` or end of input.
///
/// Each reply is awaited before the next line is read, so the session never
/// sees two sends at once.
pub async fn run(session: &ChatSession, mode: Mode) -> Result<(), ChefError> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("Chef ({mode} mode). Type /help for commands.\n").as_bytes())
        .await?;

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match parse_line(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => format!("{HELP}\n"),
            ReplCommand::Unknown(name) => format!("Unknown command /{name}. Type /help.\n"),
            ReplCommand::Send(text) => match session.send_message(&text).await {
                Ok(reply) => format!("chef> {reply}\n\n"),
                Err(e) => {
                    warn!("send failed: {e}");
                    format!("chef> {}\n\n", e.user_message())
                }
            },
            ReplCommand::Reset => match session.reset_chat().await {
                Ok(_) => "Conversation cleared.\n".to_string(),
                Err(e) => format!("Reset failed: {e}\n"),
            },
            ReplCommand::Mode(name) => {
                let mode = Mode::parse(&name);
                match session.initialize_mode(mode.as_str()).await {
                    Ok(_) => match session.reset_chat().await {
                        Ok(_) => {
                            info!(%mode, "Switched mode");
                            format!("Switched to {mode} mode. Conversation cleared.\n")
                        }
                        Err(e) => format!("Reset failed: {e}\n"),
                    },
                    Err(e) => format!("Mode switch failed: {e}\n"),
                }
            }
            ReplCommand::History => {
                let history = session.history().await;
                if history.is_empty() {
                    "(no messages yet)\n".to_string()
                } else {
                    let mut out = String::new();
                    for turn in &history {
                        out.push_str(&format!("{}> {}\n", speaker(turn.role), turn.text));
                    }
                    out.push('\n');
                    out
                }
            }
        };

        stdout.write_all(output.as_bytes()).await?;
    }

    stdout.flush().await?;
    Ok(())
}
