//! Purpose: Hold top-level CLI command dispatch for `glbkit`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Every read command resolves the path once and loads the container once.
//! Invariants: A missing document is printed as `null`, not reported as an error.

use super::*;
use super::container_info_json::container_info_json;
use glbkit::api::{self, Container};

pub(super) fn dispatch_command(
    command: Command,
    explicit_path: Option<PathBuf>,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "glbkit", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Info => {
            let container = load_container(explicit_path)?;
            emit_json(container_info_json(&container));
            Ok(RunOutcome::ok())
        }
        Command::Chunks => {
            let container = load_container(explicit_path)?;
            for chunk in container.chunks() {
                println!("{}", api::format_chunk(chunk));
            }
            Ok(RunOutcome::ok())
        }
        Command::Json => {
            let container = load_container(explicit_path)?;
            let document = api::document(&container)?.unwrap_or(Value::Null);
            emit_json(document);
            Ok(RunOutcome::ok())
        }
        Command::Decode { accessor } => {
            let container = load_container(explicit_path)?;
            let values = api::decode(&container, accessor)?;
            emit_json(json!(values));
            Ok(RunOutcome::ok())
        }
    }
}

fn load_container(explicit_path: Option<PathBuf>) -> Result<Container, Error> {
    let path = api::source_path_from_env(explicit_path.as_deref())?;
    tracing::debug!(path = %path.display(), "loading container");
    api::open(&path)
}
