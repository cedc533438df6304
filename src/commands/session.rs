use crate::cli::{Cli, Commands, SessionCommands};
use crate::domain::constants::AUTH_HINT;
use crate::domain::models::{Session, State};
use crate::services::output::emit;
use crate::services::storage;

pub fn handle_session_commands(cli: &Cli, state: &mut State) -> anyhow::Result<bool> {
    let Commands::Session { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        SessionCommands::Login { id, email, name } => {
            let session = Session {
                id: id.clone(),
                email: email.clone(),
                name: name.clone(),
            };
            state.session = Some(session.clone());
            storage::save_state(state)?;
            emit(cli.json, session, |s| format!("signed in as {}", s.email))?;
        }
        SessionCommands::Show => match &state.session {
            Some(session) => {
                emit(cli.json, session.clone(), |s| {
                    format!(
                        "{} <{}> (id {})",
                        s.name.as_deref().unwrap_or("unnamed"),
                        s.email,
                        s.id
                    )
                })?;
            }
            None => anyhow::bail!(AUTH_HINT),
        },
        SessionCommands::Logout => {
            state.session = None;
            storage::save_state(state)?;
            emit(cli.json, "logout", |_| "signed out".to_string())?;
        }
    }

    Ok(true)
}
