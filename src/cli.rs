// Command-line surface

use clap::{Parser, ValueEnum};

use crate::version::{NAME, VERSION};

/// Fetch a monitoring attribute group from a remote agent and print it as
/// a table.
#[derive(Debug, Parser)]
#[command(name = NAME, version = VERSION)]
pub struct Cli {
    /// Agent address, optionally with a port (host or host:port).
    pub agent_address: String,

    /// Service point on the agent to request the report from.
    pub service_point: String,

    /// User name for the agent's basic authentication.
    pub username: String,

    /// Password for the agent's basic authentication.
    pub password: String,

    /// Attribute group (table) to fetch.
    pub attribute_group: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Columns to display, in order. Default: all columns, alphabetically.
    #[arg(long, value_delimiter = ',', value_name = "c1,..,cN")]
    pub columns: Vec<String>,

    /// Subnodes to request data for. Default: none.
    #[arg(long, value_delimiter = ',', value_name = "s1,..,sN")]
    pub subnodes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
}
