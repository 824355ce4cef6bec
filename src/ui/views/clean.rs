//! Clean command UI views
//!
//! Provides consistent rendering for the cleanup output: the run header,
//! the removal preview, and the final summary with the retained-files
//! section that closes every run.

use std::path::Path;

use sweep::application::clean::CleanResult;
use sweep::manifest::{ArtifactKind, Manifest};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the run header
pub fn render_clean_header(
    dir: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let action = if dry_run {
        "Sweep Clean (Dry Run)"
    } else {
        "Sweep Clean"
    };
    let mut header = CommandHeader::new(Icon::Clean, action);
    header.add("Directory", dir.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Render a preview list of artifacts to be removed
pub fn render_clean_preview(
    result: &CleanResult,
    supports_color: bool,
    _supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !result.removed.is_empty() {
        out.push_str(
            &ColoredText::warning("Artifacts to be removed:")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        for removed in &result.removed {
            let marker = match removed.kind {
                ArtifactKind::Directory => " (directory, recursive)",
                ArtifactKind::File => "",
            };
            out.push_str(&format!("  - {}{}\n", removed.path.display(), marker));
        }
    }

    if !result.skipped.is_empty() {
        out.push('\n');
        out.push_str(&ColoredText::dim("Targets to be skipped:").render(supports_color));
        out.push('\n');
        for skipped in &result.skipped {
            out.push_str(&format!(
                "  - {} ({})\n",
                skipped.path.display(),
                skipped.reason
            ));
        }
    }

    out
}

/// Render the final summary
///
/// The retained-files section and the launch hint appear on every run,
/// whatever subset of the targets existed beforehand.
pub fn render_clean_result(
    result: &CleanResult,
    manifest: &Manifest,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Dry Run Complete"
    } else if result.removed.is_empty() && result.errors.is_empty() {
        "Nothing to Clean"
    } else {
        "Cleanup Complete"
    };

    let mut summary = if result.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    if dry_run {
        summary.add_stat("artifacts would be removed", result.removed.len());
        summary.add_stat("targets would be skipped", result.skipped.len());
    } else {
        summary.add_stat("artifacts removed", result.removed.len());
        summary.add_stat("targets skipped", result.skipped.len());
    }

    for retained in &manifest.retained {
        summary.add_info(format!("kept {}", retained));
    }

    if !result.errors.is_empty() {
        summary.add_stat("errors", result.errors.len());
        for error in &result.errors {
            summary.add_warning(error.clone());
        }
    }

    if dry_run && !result.removed.is_empty() {
        summary.with_next_step("Run without --dry-run to remove");
    } else if let Some(run_hint) = &manifest.run_hint {
        summary.with_next_step(run_hint.clone());
    }

    summary.render(supports_color, supports_unicode)
}
