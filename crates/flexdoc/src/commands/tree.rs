//! `flexdoc tree` command implementation.

use clap::Args;
use flexdoc_site::DocTree;

use super::SiteContext;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Only list nodes that can be referenced by number.
    #[arg(long)]
    refs_only: bool,
}

impl TreeArgs {
    pub(crate) fn execute(self, ctx: &SiteContext, output: &Output) -> Result<(), CliError> {
        let tree = ctx.site.tree()?;

        for line in format_tree(&tree, self.refs_only) {
            let path = output.dim(&line.path);
            output.result(&format!("{}  {path}", line.label));
        }
        output.info(&format!("{} nodes", tree.node_count()));

        Ok(())
    }
}

struct TreeLine {
    label: String,
    path: String,
}

/// One line per node in pre-order, indented by depth.
fn format_tree(tree: &DocTree, refs_only: bool) -> Vec<TreeLine> {
    tree.preorder()
        .into_iter()
        .filter_map(|id| {
            let node = tree.node(id);
            if refs_only && node.doc_ref.is_empty() {
                return None;
            }
            let indent = "  ".repeat(tree.depth(id));
            let label = if node.doc_ref.is_empty() {
                format!("{indent}{}", node.title)
            } else {
                format!("{indent}{} {}", node.doc_ref, node.title)
            };
            let path = if node.path.is_empty() {
                "/".to_owned()
            } else {
                node.path.clone()
            };
            Some(TreeLine { label, path })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexdoc_storage::MockStorage;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> DocTree {
        let storage = MockStorage::new()
            .with_dir("1-Getting-Started")
            .with_file("1-Getting-Started/1-install.md", "---\ntitle: Install\n---\n")
            .with_file("about.md", "---\ntitle: About\n---\n");
        DocTree::build(&storage, "", "Docs").unwrap()
    }

    #[test]
    fn test_format_tree() {
        let lines = format_tree(&sample_tree(), false);

        let rendered: Vec<(String, String)> =
            lines.into_iter().map(|l| (l.label, l.path)).collect();
        assert_eq!(
            rendered,
            vec![
                ("Docs".to_owned(), "/".to_owned()),
                (
                    "  1 Getting Started".to_owned(),
                    "/1-Getting-Started".to_owned()
                ),
                (
                    "    1.1 Install".to_owned(),
                    "/1-Getting-Started/1-install.html".to_owned()
                ),
                ("  About".to_owned(), "/about.html".to_owned()),
            ]
        );
    }

    #[test]
    fn test_format_tree_refs_only() {
        let lines = format_tree(&sample_tree(), true);

        let labels: Vec<&str> = lines.iter().map(|l| l.label.trim()).collect();
        assert_eq!(labels, vec!["1 Getting Started", "1.1 Install"]);
    }
}
