use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::portal::PortalClient;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = services::config::load_config()?;
    let mut state = services::storage::load_state()?;

    if commands::handle_session_commands(&cli, &mut state)? {
        return Ok(());
    }

    // Everything past this point acts on behalf of a signed-in user; a
    // missing profile points at the auth portal instead of the API.
    if state.session.is_none() {
        anyhow::bail!(domain::constants::AUTH_HINT);
    }

    let api_base = cli
        .api
        .clone()
        .unwrap_or_else(|| config.portal.api_base.clone());
    let client = PortalClient::new(&api_base, config.portal.timeout_ms)?;

    if commands::handle_runtime_commands(&cli, &mut state, &client)? {
        return Ok(());
    }
    if commands::handle_tracking_commands(&cli, &client, &config)? {
        return Ok(());
    }

    anyhow::bail!("command not handled: {:?}", cli.command)
}
