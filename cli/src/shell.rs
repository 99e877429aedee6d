//! Interactive shell
//!
//! Reads one command per line, runs it against the session and prints the
//! result. Errors are reported as user-facing messages and never end the loop.

use chrono::Utc;
use speedlist_core::app::{Outcome, Session};
use speedlist_core::domain::entities::ItemId;
use speedlist_core::domain::ports::{Clipboard, ShoppingListGateway};
use speedlist_core::AppError;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::{help_text, parse_command, ShellCommand};
use crate::render::{render_form, render_list};

const PROMPT: &str = "speedlist> ";
const CONFIRM_CLEAR: &str = "Are you sure you want to clear your entire shopping list? [y/N] ";

/// Run the shell until `quit` or end of input
pub async fn run<G, C, R, W>(session: &mut Session<G, C>, input: R, output: &mut W) -> io::Result<()>
where
    G: ShoppingListGateway,
    C: Clipboard,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    let initial = execute(session, ShellCommand::Reload).await;
    write_block(output, &initial).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                write_block(output, &format!("{}. Type `help` for commands.", e)).await?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,

            // Empty lists are rejected by the session without asking
            ShellCommand::ClearAll if !session.state().items().is_empty() => {
                output.write_all(CONFIRM_CLEAR.as_bytes()).await?;
                output.flush().await?;

                let answer = lines.next_line().await?.unwrap_or_default();
                let reply = if is_yes(&answer) {
                    execute(session, ShellCommand::ClearAll).await
                } else {
                    "Cancelled.".to_string()
                };
                write_block(output, &reply).await?;
            }

            command => {
                let reply = execute(session, command).await;
                write_block(output, &reply).await?;
            }
        }
    }

    Ok(())
}

/// Run a single command and return the text to show
pub async fn execute<G, C>(session: &mut Session<G, C>, command: ShellCommand) -> String
where
    G: ShoppingListGateway,
    C: Clipboard,
{
    let result = match command {
        ShellCommand::List => return render_list(session.state()),
        ShellCommand::Help => return help_text().to_string(),
        ShellCommand::Quit => return String::new(),

        ShellCommand::Reload => session.load().await,
        ShellCommand::Add(fields) => session.submit_create(fields).await,
        ShellCommand::Select { position } => match item_at(session, position) {
            Ok(id) => session.select_item(id),
            Err(e) => Err(e),
        },
        ShellCommand::Edit(patch) => {
            let fields = patch.apply(session.state().form());
            session.submit_update(fields).await
        }
        ShellCommand::Delete {
            position: Some(position),
        } => match item_at(session, position) {
            Ok(id) => session.delete_item(id).await,
            Err(e) => Err(e),
        },
        ShellCommand::Delete { position: None } => session.delete_selected().await,
        ShellCommand::Unselect => Ok(session.clear_selection()),
        ShellCommand::ClearAll => session.clear_all().await,
        ShellCommand::Copy => session.copy_to_clipboard(Utc::now()).await,
    };

    match result {
        Ok(outcome) => describe(session, &outcome),
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            e.user_message()
        }
    }
}

fn item_at<G, C>(session: &Session<G, C>, position: usize) -> Result<ItemId, AppError>
where
    G: ShoppingListGateway,
    C: Clipboard,
{
    session
        .state()
        .store()
        .get_by_index(position)
        .map(|item| item.id)
        .ok_or_else(|| AppError::NotFound(format!("There is no item {} in your list.", position)))
}

fn describe<G, C>(session: &Session<G, C>, outcome: &Outcome) -> String
where
    G: ShoppingListGateway,
    C: Clipboard,
{
    match outcome {
        Outcome::Loaded { .. } => render_list(session.state()),
        Outcome::Selected(_) => match render_form(session.state()) {
            Some(form) => format!("{}\nUse `edit` to change it or `delete` to remove it.", form),
            None => String::new(),
        },
        Outcome::SelectionCleared => "Selection cleared.".to_string(),
        Outcome::FormUpdated => String::new(),
        Outcome::Copied => outcome.message().unwrap_or_default().to_string(),
        Outcome::Created(_) | Outcome::Updated(_) | Outcome::Deleted(_) | Outcome::Cleared => {
            format!(
                "{}\n{}",
                outcome.message().unwrap_or_default(),
                render_list(session.state())
            )
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
