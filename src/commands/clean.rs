//! Clean command handler
//!
//! Wires config, manifest, use case and views together, and owns the two
//! interactive touchpoints: the confirmation prompt before removal and
//! the acknowledgment keypress before exit.

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use sweep::application::clean::{CleanOptions, CleanResult, CleanUseCase};
use sweep::config::Config;
use sweep::error::SweepError;
use sweep::infrastructure::LocalFs;
use sweep::manifest::Manifest;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::views::clean::{render_clean_header, render_clean_preview, render_clean_result};

/// Execute the clean command
pub fn cmd_clean(cli: &Cli) -> Result<()> {
    let dir = cli.dir.as_path();
    if !dir.is_dir() {
        return Err(SweepError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let (config, warnings) = Config::load_or_default_with_warnings(Some(dir));
    for warning in &warnings {
        match warning.line {
            Some(line) => eprintln!(
                "warning: unknown config key `{}` in {}:{}",
                warning.key,
                warning.file.display(),
                line
            ),
            None => eprintln!(
                "warning: unknown config key `{}` in {}",
                warning.key,
                warning.file.display()
            ),
        }
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    let manifest = Manifest::from_config(&config);
    let use_case = CleanUseCase::new(LocalFs::new());
    let options = CleanOptions::new().with_dry_run(cli.dry_run);

    // Preview pass first, so both output modes can report before deleting.
    let preview = use_case.execute(dir, &manifest);

    if ui.json {
        let result = if cli.dry_run {
            preview
        } else {
            use_case.execute_confirmed(dir, &manifest, &options)
        };
        emit_json_events(dir, &manifest, &result, cli.dry_run);
        return Ok(());
    }

    print!(
        "{}",
        render_clean_header(dir, cli.dry_run, ui.color, ui.unicode)
    );

    if cli.dry_run {
        println!();
        print!("{}", render_clean_preview(&preview, ui.color, ui.unicode));
        println!();
        print!(
            "{}",
            render_clean_result(&preview, &manifest, true, ui.color, ui.unicode)
        );
        maybe_pause(cli, &ui)?;
        return Ok(());
    }

    let interactive = std::io::stdin().is_terminal() && !cli.yes;

    if !preview.removed.is_empty() && (interactive || ui.verbose > 0) {
        println!();
        print!("{}", render_clean_preview(&preview, ui.color, ui.unicode));
        println!();
    }

    if !preview.removed.is_empty() && interactive {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} artifacts?", preview.removed.len()))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = use_case.execute_confirmed(dir, &manifest, &options);
    print!(
        "{}",
        render_clean_result(&result, &manifest, false, ui.color, ui.unicode)
    );

    maybe_pause(cli, &ui)?;
    Ok(())
}

/// Emit the machine-readable event stream, one JSON object per line.
fn emit_json_events(dir: &Path, manifest: &Manifest, result: &CleanResult, dry_run: bool) {
    println!(
        "{}",
        serde_json::json!({
            "type": "clean_start",
            "dir": dir.display().to_string(),
            "targets": manifest.artifacts.len(),
            "dry_run": dry_run,
        })
    );

    for removed in &result.removed {
        println!(
            "{}",
            serde_json::json!({
                "type": "artifact_removed",
                "path": removed.path.display().to_string(),
                "kind": removed.kind.to_string(),
            })
        );
    }

    for skipped in &result.skipped {
        println!(
            "{}",
            serde_json::json!({
                "type": "artifact_skipped",
                "path": skipped.path.display().to_string(),
                "reason": skipped.reason.to_string(),
            })
        );
    }

    println!(
        "{}",
        serde_json::json!({
            "type": "clean_complete",
            "removed": result.removed.len(),
            "skipped": result.skipped.len(),
            "errors": result.errors.len(),
            "retained": manifest.retained,
        })
    );
}

/// Block on a single keypress before exiting, when there is a human to
/// acknowledge the summary.
fn maybe_pause(cli: &Cli, ui: &UiContext) -> Result<()> {
    if cli.no_pause || ui.json || !ui.caps.is_tty || !std::io::stdin().is_terminal() {
        return Ok(());
    }

    println!();
    println!("Press any key to close...");

    use crossterm::event::{read, Event, KeyEventKind};
    use crossterm::terminal;

    terminal::enable_raw_mode()?;
    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;

    outcome.map_err(Into::into)
}
