//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flowcanvas_core::EXPORT_FILE_NAME;
use url::Url;

/// flowcanvas - workflow snapshot tooling
#[derive(Parser, Debug)]
#[command(name = "flowcanvas")]
#[command(version)]
#[command(about = "Inspect workflow snapshots and sync them with a flowcanvas backend")]
#[command(
    long_about = "flowcanvas checks and summarizes exported workflow files offline, and lists, pulls, pushes, renames and deletes workflows on the REST backend the browser editor uses."
)]
pub struct Cli {
    /// Base URL of the workflow REST API
    #[arg(
        long,
        global = true,
        env = "FLOWCANVAS_API_URL",
        default_value = "http://localhost:5000/api"
    )]
    pub api_url: Url,

    /// Session token sent as a bearer token
    #[arg(long, global = true, env = "FLOWCANVAS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a snapshot file and report dangling or duplicate entries
    Check {
        /// Snapshot file
        file: PathBuf,
    },

    /// Summarize a snapshot file
    Show {
        /// Snapshot file
        file: PathBuf,

        /// List every component and connection
        #[arg(short, long, default_value_t = false)]
        detailed: bool,
    },

    /// List saved workflows
    List,

    /// Download a workflow to a snapshot file
    Pull {
        /// Workflow id
        id: String,

        /// Output file
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Upload a snapshot file, creating a workflow unless an id is given
    Push {
        /// Snapshot file
        file: PathBuf,

        /// Existing workflow to overwrite
        #[arg(long)]
        id: Option<String>,
    },

    /// Rename a saved workflow
    Rename {
        /// Workflow id
        id: String,

        /// New name
        name: String,
    },

    /// Delete a saved workflow
    Delete {
        /// Workflow id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pull_defaults_to_export_file_name() {
        let cli = Cli::try_parse_from(["flowcanvas", "pull", "12"]).unwrap();
        match cli.command {
            Commands::Pull { id, output } => {
                assert_eq!(id, "12");
                assert_eq!(output, PathBuf::from("workflowData.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_api_url() {
        let result = Cli::try_parse_from(["flowcanvas", "--api-url", "not a url", "list"]);
        assert!(result.is_err());
    }
}
