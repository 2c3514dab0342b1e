//! Command handler modules for the CLI.

mod add;
mod completions;
mod connect;
mod delete;
mod last;
mod list;
mod manpage;
mod show;
mod update;
mod viewer;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    viewer: Option<&Path>,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::List { format } => list::cmd_list(config_path, format),
        Commands::Show { name } => show::cmd_show(config_path, &name),
        Commands::Add {
            name,
            host,
            port,
            user,
            display,
        } => add::cmd_add(
            config_path,
            &add::AddParams {
                name: &name,
                host: &host,
                port,
                user: user.as_deref(),
                display: display.as_deref(),
            },
        ),
        Commands::Update {
            name,
            new_name,
            host,
            port,
            user,
            display,
            clear_user,
            clear_display,
        } => update::cmd_update(
            config_path,
            &update::UpdateParams {
                name: &name,
                new_name: new_name.as_deref(),
                host: host.as_deref(),
                port,
                user: user.as_deref(),
                display: display.as_deref(),
                clear_user,
                clear_display,
            },
        ),
        Commands::Delete { name } => delete::cmd_delete(config_path, &name),
        Commands::Connect { name, dry_run } => {
            connect::cmd_connect(config_path, viewer, name.as_deref(), dry_run)
        }
        Commands::Last => last::cmd_last(config_path),
        Commands::Viewer { json } => viewer::cmd_viewer(config_path, viewer, json),
        Commands::Completions { shell } => completions::cmd_completions(shell),
        Commands::Manpage => manpage::cmd_manpage(),
    }
}
