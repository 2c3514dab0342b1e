//! List connections command.

use std::fmt::Write as _;
use std::path::Path;

use vncdeck_core::models::Connection;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::escape_csv_field;
use crate::util::{create_config_manager, open_store};

/// List connections command handler
pub fn cmd_list(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    let connections = store.list();
    let last_used = store.load_last_used();
    let last_name = last_used.as_ref().map(Connection::name);

    match format {
        OutputFormat::Table => println!("{}", format_table(&connections, last_name)),
        OutputFormat::Json => println!("{}", format_json(&connections, last_name)?),
        OutputFormat::Csv => println!("{}", format_csv(&connections, last_name)),
    }

    Ok(())
}

/// Format connections as a table string; the last used one is starred
#[must_use]
pub fn format_table(connections: &[Connection], last_used: Option<&str>) -> String {
    if connections.is_empty() {
        return "No connections found.".to_string();
    }

    let mut output = String::new();

    let name_width = connections
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let host_width = connections
        .iter()
        .map(|c| c.host().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let port_width = 5;

    let _ = writeln!(
        output,
        "  {:<name_width$}  {:<host_width$}  {:<port_width$}  USER",
        "NAME", "HOST", "PORT"
    );
    let _ = writeln!(
        output,
        "  {:-<name_width$}  {:-<host_width$}  {:-<port_width$}  ----",
        "", "", ""
    );

    for conn in connections {
        let marker = if Some(conn.name()) == last_used { '*' } else { ' ' };
        let _ = writeln!(
            output,
            "{marker} {:<name_width$}  {:<host_width$}  {:<port_width$}  {}",
            conn.name(),
            conn.host(),
            conn.port(),
            conn.username().unwrap_or("")
        );
    }

    output.trim_end().to_string()
}

/// Format connections as JSON string
///
/// # Errors
///
/// Returns `CliError::Config` if JSON serialization fails.
pub fn format_json(connections: &[Connection], last_used: Option<&str>) -> Result<String, CliError> {
    let output: Vec<ConnectionOutput> = connections
        .iter()
        .map(|c| ConnectionOutput::new(c, last_used))
        .collect();
    serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Config(format!("Failed to serialize to JSON: {e}")))
}

/// Format connections as CSV string
#[must_use]
pub fn format_csv(connections: &[Connection], last_used: Option<&str>) -> String {
    let mut output = String::new();

    output.push_str("name,host,port,username,display,last_used\n");

    for conn in connections {
        let _ = writeln!(
            output,
            "{},{},{},{},{},{}",
            escape_csv_field(conn.name()),
            escape_csv_field(conn.host()),
            conn.port(),
            escape_csv_field(conn.username().unwrap_or("")),
            escape_csv_field(conn.display().unwrap_or("")),
            Some(conn.name()) == last_used
        );
    }

    output.trim_end().to_string()
}

/// Connection output for CLI
#[derive(Debug, Clone, serde::Serialize)]
pub struct ConnectionOutput {
    pub name: String,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub target: String,
    pub last_used: bool,
}

impl ConnectionOutput {
    fn new(conn: &Connection, last_used: Option<&str>) -> Self {
        Self {
            name: conn.name().to_string(),
            host: conn.host().to_string(),
            port: conn.port(),
            username: conn.username().map(str::to_string),
            display: conn.display().map(str::to_string),
            target: conn.target(),
            last_used: Some(conn.name()) == last_used,
        }
    }
}
