//! Idempotent provisioning of topic directories and placeholder files.

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use tracing::warn;

use crate::plan::{BasePolicy, ScaffoldPlan};

/// Outcome of one scaffolding pass, for reporting. Failures are per-path and
/// non-fatal; they never stop the remaining topics from being processed.
#[derive(Debug, Default)]
pub struct Summary {
    pub dirs_created: Vec<Utf8PathBuf>,
    pub files_created: Vec<Utf8PathBuf>,
    pub files_skipped: Vec<Utf8PathBuf>,
    pub failures: Vec<(Utf8PathBuf, String)>,
}

impl Summary {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "  directories created: {}",
            self.dirs_created.len()
        );
        let _ = writeln!(out, "  files created: {}", self.files_created.len());
        let _ = writeln!(out, "  files skipped: {}", self.files_skipped.len());
        for (path, cause) in &self.failures {
            let _ = writeln!(out, "  FAILED {path}: {cause}");
        }
        out
    }
}

/// Walk the plan's topic list in order, creating each topic directory and any
/// missing placeholder files. Existing directories and files are left exactly
/// as found. With `dry_run` set, nothing is written and the summary reports
/// what a real run would create.
pub fn ensure_structure(plan: &ScaffoldPlan, dry_run: bool) -> Result<Summary> {
    match plan.base_policy {
        BasePolicy::RequireExisting => {
            if !plan.base.is_dir() {
                bail!("base folder not found: {}", plan.base);
            }
        }
        BasePolicy::CreateIfMissing => {
            if !dry_run {
                fs::create_dir_all(plan.base.as_std_path())
                    .with_context(|| format!("creating base directory {}", plan.base))?;
            }
        }
    }

    let mut summary = Summary::default();
    for topic in &plan.topics {
        let topic_dir = plan.base.join(topic);
        // Consult the summary as well as the disk so a dry-run counts
        // duplicate topics once, like a real run does.
        if !topic_dir.is_dir() && !summary.dirs_created.contains(&topic_dir) {
            if !dry_run {
                if let Err(err) = fs::create_dir_all(topic_dir.as_std_path()) {
                    warn!("could not create {topic_dir}: {err}");
                    summary.failures.push((topic_dir, err.to_string()));
                    continue;
                }
            }
            summary.dirs_created.push(topic_dir.clone());
        }

        for template in &plan.templates {
            let file_path = topic_dir.join(template.file_name);
            if file_path.exists() || summary.files_created.contains(&file_path) {
                summary.files_skipped.push(file_path);
                continue;
            }
            if !dry_run {
                if let Err(err) = fs::write(file_path.as_std_path(), template.render(topic)) {
                    warn!("could not write {file_path}: {err}");
                    summary.failures.push((file_path, err.to_string()));
                    continue;
                }
            }
            summary.files_created.push(file_path);
        }
    }

    Ok(summary)
}
