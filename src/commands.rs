//! CLI command handlers.
//!
//! Local commands (`check`, `show`) work on snapshot files only; the rest go
//! through a [`WorkflowRepository`], so they run the same against the HTTP
//! backend and the in-memory repository used in tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use flowcanvas_core::{
    GraphSnapshot, GraphStore, SavedWorkflow, SnapshotIssue, WorkflowId, WorkflowRepository,
    WorkflowSummary,
};
use tracing::{info, warn};

use crate::cli::{Cli, Commands};
use crate::http::HttpRepository;

/// Execute a CLI command.
///
/// # Errors
/// Returns an error if the command fails; the message names the step.
pub async fn execute_command(cli: Cli) -> Result<()> {
    let Cli {
        api_url,
        token,
        timeout_secs,
        command,
    } = cli;

    match command {
        Commands::Check { file } => cmd_check(&file),
        Commands::Show { file, detailed } => cmd_show(&file, detailed),
        remote => {
            let repository =
                HttpRepository::new(&api_url, token, Duration::from_secs(timeout_secs))
                    .context("Failed to build HTTP client")?;
            info!(api = %api_url, "Using workflow backend");
            execute_remote(&repository, remote).await
        }
    }
}

/// Execute a command against `repository`.
///
/// # Errors
/// Returns an error if the repository call or file access fails.
pub async fn execute_remote<R: WorkflowRepository>(repository: &R, command: Commands) -> Result<()> {
    match command {
        Commands::Check { file } => cmd_check(&file),
        Commands::Show { file, detailed } => cmd_show(&file, detailed),
        Commands::List => {
            let workflows = repository
                .list()
                .await
                .context("Failed to list workflows")?;
            print!("{}", format_list(&workflows));
            Ok(())
        }
        Commands::Pull { id, output } => {
            let id = parse_id(&id)?;
            let snapshot = pull(repository, &id, &output).await?;
            println!(
                "Pulled workflow {id} ({} components) to {}",
                snapshot.components.len(),
                output.display()
            );
            Ok(())
        }
        Commands::Push { file, id } => {
            let id = id.as_deref().map(parse_id).transpose()?;
            let saved = push(repository, &file, id.as_ref()).await?;
            println!("Workflow saved as {}", saved.id);
            Ok(())
        }
        Commands::Rename { id, name } => {
            let id = parse_id(&id)?;
            repository
                .rename(&id, &name)
                .await
                .with_context(|| format!("Failed to rename workflow {id}"))?;
            println!("Workflow {id} renamed to '{name}'");
            Ok(())
        }
        Commands::Delete { id } => {
            let id = parse_id(&id)?;
            repository
                .delete(&id)
                .await
                .with_context(|| format!("Failed to delete workflow {id}"))?;
            println!("Workflow {id} deleted");
            Ok(())
        }
    }
}

fn parse_id(raw: &str) -> Result<WorkflowId> {
    WorkflowId::new(raw).with_context(|| format!("Invalid workflow id '{raw}'"))
}

/// Reads and parses a snapshot file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a snapshot.
pub fn read_snapshot(path: &Path) -> Result<GraphSnapshot> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    GraphSnapshot::from_json(&source).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Writes a snapshot as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_snapshot(path: &Path, snapshot: &GraphSnapshot) -> Result<()> {
    let json = snapshot
        .to_pretty_json()
        .context("Failed to serialize snapshot")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Outcome of checking a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub issues: Vec<SnapshotIssue>,
    /// Components the editor would keep when loading the snapshot
    pub kept_components: usize,
    /// Connections the editor would keep when loading the snapshot
    pub kept_connections: usize,
}

impl CheckReport {
    #[must_use]
    pub fn new(snapshot: &GraphSnapshot) -> Self {
        let issues = snapshot.validate();
        let store = GraphStore::from_snapshot(snapshot.clone());
        Self {
            issues,
            kept_components: store.components().len(),
            kept_connections: store.connections().len(),
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn cmd_check(file: &Path) -> Result<()> {
    let snapshot = read_snapshot(file)?;
    let report = CheckReport::new(&snapshot);

    if report.is_clean() {
        println!(
            "{}: ok ({} components, {} connections)",
            file.display(),
            report.kept_components,
            report.kept_connections
        );
        return Ok(());
    }

    for issue in &report.issues {
        println!("{}: {issue}", file.display());
    }
    println!(
        "Loading would keep {} of {} components and {} of {} connections",
        report.kept_components,
        snapshot.components.len(),
        report.kept_connections,
        snapshot.connections.len()
    );
    bail!("{} issue(s) found in {}", report.issues.len(), file.display())
}

fn cmd_show(file: &Path, detailed: bool) -> Result<()> {
    let snapshot = read_snapshot(file)?;
    print!("{}", describe(&snapshot, detailed));
    Ok(())
}

/// Human-readable summary of a snapshot
#[must_use]
pub fn describe(snapshot: &GraphSnapshot, detailed: bool) -> String {
    let mut out = String::new();
    let name = if snapshot.name.trim().is_empty() {
        "(unnamed)"
    } else {
        snapshot.name.as_str()
    };
    let _ = writeln!(out, "Workflow: {name}");
    let _ = writeln!(out, "Components: {}", snapshot.components.len());
    let _ = writeln!(out, "Connections: {}", snapshot.connections.len());

    if detailed {
        for component in &snapshot.components {
            let position = component.position();
            let _ = writeln!(
                out,
                "  [{}] {} {} at ({}, {})",
                component.kind(),
                component.id(),
                component.title(),
                position.x,
                position.y
            );
        }
        for connection in &snapshot.connections {
            let _ = writeln!(
                out,
                "  {}.{} -> {}.{}",
                connection.from(),
                connection.from_type(),
                connection.to(),
                connection.to_type()
            );
        }
    }
    out
}

/// One line per workflow: id and display name
#[must_use]
pub fn format_list(workflows: &[WorkflowSummary]) -> String {
    if workflows.is_empty() {
        return "No workflows\n".to_string();
    }
    workflows.iter().fold(String::new(), |mut out, workflow| {
        let _ = writeln!(out, "{}\t{}", workflow.id, workflow.display_name());
        out
    })
}

/// Downloads a workflow into `output`.
///
/// # Errors
/// Returns an error if the load or the write fails.
pub async fn pull<R: WorkflowRepository>(
    repository: &R,
    id: &WorkflowId,
    output: &Path,
) -> Result<GraphSnapshot> {
    let snapshot = repository
        .load(id)
        .await
        .with_context(|| format!("Failed to load workflow {id}"))?;
    for issue in snapshot.validate() {
        warn!(%issue, workflow = %id, "Pulled workflow has invalid data");
    }
    write_snapshot(output, &snapshot)?;
    Ok(snapshot)
}

/// Uploads a snapshot file. Snapshots with dangling or duplicate entries are
/// refused.
///
/// # Errors
/// Returns an error if the file is unreadable or invalid, or the save fails.
pub async fn push<R: WorkflowRepository>(
    repository: &R,
    file: &Path,
    id: Option<&WorkflowId>,
) -> Result<SavedWorkflow> {
    let snapshot = read_snapshot(file)?;
    let issues = snapshot.validate();
    if !issues.is_empty() {
        bail!(
            "{} has {} issue(s); run `flowcanvas check` for details",
            file.display(),
            issues.len()
        );
    }
    repository
        .save(id, &snapshot)
        .await
        .with_context(|| format!("Failed to save {}", file.display()))
}
