//! `flexdoc check` command implementation.

use std::path::{Path, PathBuf};

use flexdoc_site::{Site, TagRegistry};
use flexdoc_storage::{FsStorage, Storage};

use super::SiteContext;
use crate::error::CliError;
use crate::output::Output;

/// File extensions scanned for `{% see %}` tags.
const CHECKED_EXTENSIONS: &[&str] = &["md", "markdown", "html"];

/// Outcome of checking every document.
#[derive(Debug, Default)]
struct CheckReport {
    /// Number of see-also groups rendered.
    checked: usize,
    /// Broken groups with the file they appear in.
    broken: Vec<(PathBuf, String)>,
}

/// Check every document in the documentation directory.
///
/// Scans the same entries the tree is built from, so every file a tag
/// could refer to is also checked for tags.
pub(crate) fn execute(ctx: &SiteContext, output: &Output) -> Result<(), CliError> {
    let doc_dir = ctx.config.doc_dir();
    output.info(&format!("Checking {}", doc_dir.display()));

    let storage = FsStorage::new(doc_dir);
    let report = check_documents(&ctx.site, &storage)?;

    for (path, reference) in &report.broken {
        output.warning(&format!("{}: BROKEN LINK ({reference})", path.display()));
    }

    if report.broken.is_empty() {
        output.success(&format!("{} see-also groups OK", report.checked));
        Ok(())
    } else {
        Err(CliError::BrokenLinks(report.broken.len()))
    }
}

/// Render every `see` tag found in the documents of `storage`.
fn check_documents(site: &Site, storage: &dyn Storage) -> Result<CheckReport, CliError> {
    let mut report = CheckReport::default();

    for entry in storage.scan()? {
        if entry.is_dir() || !is_checked(&entry.path) {
            continue;
        }
        let bytes = storage.read_head(&entry.path, usize::MAX)?;
        let text = String::from_utf8_lossy(&bytes);

        for markup in TagRegistry::occurrences("see", &text) {
            report.checked += 1;
            let seen = site.broken_links().len();
            site.see_also(markup)?;
            report.broken.extend(
                site.broken_links()
                    .into_iter()
                    .skip(seen)
                    .map(|link| (entry.path.clone(), link.reference)),
            );
        }
    }

    tracing::debug!(
        checked = report.checked,
        broken = report.broken.len(),
        "Checked see-also references"
    );

    Ok(report)
}

fn is_checked(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CHECKED_EXTENSIONS.contains(&ext))
}
