//! Document tree built from a documentation directory.
//!
//! # Architecture
//!
//! Nodes are stored in a flat arena (`Vec<DocNode>`) addressed by [`NodeId`],
//! with parent/children relationships tracked by ids. This provides:
//! - O(1) logical path lookups via a path index
//! - O(1) reference lookups via a first-wins `doc_ref` index
//! - O(d) ancestor walks where d is the node depth
//!
//! The arena is filled by [`DocTreeBuilder`] and frozen into an immutable
//! [`DocTree`] that can be shared across threads.
//!
//! # Paths and references
//!
//! An entry `1-intro/2-setup.md` below a tree mounted at `/docs` becomes a
//! document node with path `/docs/1-intro/2-setup.html` and reference `1.2`,
//! under a directory node `/docs/1-intro` with reference `1`.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use flexdoc_storage::{Entry, EntryKind, FsStorage, Storage, StorageError};

use crate::front_matter::{FRONT_MATTER_LIMIT, extract_title};
use crate::naming::{self, UNTITLED};

/// Error returned when the document tree can't be built.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Directory listing failed.
    #[error("Failed to scan documentation source: {0}")]
    Scan(#[source] StorageError),
    /// A document could not be read.
    #[error("Failed to read document {}: {source}", path.display())]
    Read {
        /// Path of the document relative to the documentation root.
        path: PathBuf,
        /// Underlying storage error.
        #[source]
        source: StorageError,
    },
}

/// Index of a node in a [`DocTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Structural role of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic root representing the documentation directory itself.
    Root,
    /// Directory; a branch even when it has no children.
    Directory,
    /// Document file; always a leaf.
    Document,
}

/// Node of the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocNode {
    /// Unique logical path (e.g. `/docs/1-intro/2-setup.html`).
    pub path: String,
    /// Human-readable title.
    pub title: String,
    /// Dotted hierarchical reference (e.g. `1.2`), empty when unnumbered.
    pub doc_ref: String,
    /// Root, directory or document.
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DocNode {
    /// Title with a leading `"slug - "` prefix removed.
    #[must_use]
    pub fn short_title(&self) -> &str {
        naming::short_title(&self.title)
    }

    /// Parent node id, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child node ids in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True for the synthetic root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    /// True for document nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Document
    }
}

/// Immutable document tree with path and reference lookups.
///
/// Lookups behave like a pre-order scan returning the first match.
#[derive(Debug)]
pub struct DocTree {
    nodes: Vec<DocNode>,
    path_index: HashMap<String, NodeId>,
    ref_index: HashMap<String, NodeId>,
}

impl DocTree {
    /// Build the tree from a storage walk.
    ///
    /// # Arguments
    ///
    /// * `storage` - Walker over the documentation directory
    /// * `mount_path` - Logical path of the documentation directory (`""` or `"/docs"`)
    /// * `root_title` - Title of the synthetic root node
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the directory can't be scanned or a document
    /// can't be read. Malformed front matter is not an error.
    pub fn build(
        storage: &dyn Storage,
        mount_path: &str,
        root_title: &str,
    ) -> Result<Self, TreeError> {
        let start = Instant::now();
        let entries = storage.scan().map_err(TreeError::Scan)?;

        let mut builder = DocTreeBuilder::new(mount_path, root_title);
        for entry in &entries {
            builder.add_entry(storage, entry)?;
        }
        let tree = builder.build();

        tracing::info!(
            entry_count = entries.len(),
            node_count = tree.node_count(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Document tree built"
        );

        Ok(tree)
    }

    /// Build the tree from a directory on the local filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the directory can't be walked.
    pub fn from_dir(
        root_dir: impl Into<PathBuf>,
        mount_path: &str,
        root_title: &str,
    ) -> Result<Self, TreeError> {
        let storage = FsStorage::new(root_dir.into());
        Self::build(&storage, mount_path, root_title)
    }

    /// Id of the root node.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &DocNode {
        &self.nodes[0]
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &DocNode {
        &self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Find the node with the given dotted reference.
    ///
    /// An empty reference never matches.
    #[must_use]
    pub fn find_by_reference(&self, doc_ref: &str) -> Option<&DocNode> {
        self.find_id_by_reference(doc_ref).map(|id| self.node(id))
    }

    /// Id of the node with the given dotted reference.
    #[must_use]
    pub fn find_id_by_reference(&self, doc_ref: &str) -> Option<NodeId> {
        self.ref_index.get(doc_ref).copied()
    }

    /// Find the node with the given logical path.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&DocNode> {
        self.find_id_by_path(path).map(|id| self.node(id))
    }

    /// Id of the node with the given logical path.
    #[must_use]
    pub fn find_id_by_path(&self, path: &str) -> Option<NodeId> {
        self.path_index.get(path).copied()
    }

    /// Ancestors of a node ordered root-first, excluding the node itself.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<&DocNode> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            ancestors.push(self.node(parent));
            current = self.node(parent).parent;
        }
        ancestors.reverse();
        ancestors
    }

    /// Number of edges between the root and a node.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// Node ids in pre-order (parents before children, siblings in order).
    #[must_use]
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root_id()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev());
        }
        order
    }

    /// Iterate over nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &DocNode> {
        self.preorder().into_iter().map(move |id| self.node(id))
    }
}

/// Builder for constructing [`DocTree`] instances.
///
/// Insertion is idempotent: adding a node at an occupied path returns the
/// existing node unchanged.
#[derive(Debug)]
pub struct DocTreeBuilder {
    nodes: Vec<DocNode>,
    path_index: HashMap<String, NodeId>,
}

impl DocTreeBuilder {
    /// Create a builder holding only the root node.
    ///
    /// A trailing slash on `mount_path` is ignored, so `"/"` mounts at `""`.
    #[must_use]
    pub fn new(mount_path: &str, root_title: &str) -> Self {
        let root = DocNode {
            path: mount_path.trim_end_matches('/').to_owned(),
            title: root_title.to_owned(),
            doc_ref: String::new(),
            kind: NodeKind::Root,
            parent: None,
            children: Vec::new(),
        };
        let path_index = HashMap::from([(root.path.clone(), NodeId(0))]);

        Self {
            nodes: vec![root],
            path_index,
        }
    }

    /// Id of the root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Add a child below `parent`, or return the node already at that path.
    ///
    /// # Arguments
    ///
    /// * `parent` - Id of the parent node
    /// * `segment` - Last path segment of the new node
    /// * `title` - Node title
    /// * `doc_ref` - Dotted reference, empty when unnumbered
    /// * `kind` - Directory or document
    ///
    /// # Returns
    ///
    /// Id of the inserted or existing node.
    pub fn insert(
        &mut self,
        parent: NodeId,
        segment: &str,
        title: String,
        doc_ref: String,
        kind: NodeKind,
    ) -> NodeId {
        let path = format!("{}/{segment}", self.nodes[parent.0].path);
        if let Some(&existing) = self.path_index.get(&path) {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.path_index.insert(path.clone(), id);
        self.nodes.push(DocNode {
            path,
            title,
            doc_ref,
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Insert a scanned entry and every missing ancestor directory.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Read`] if a document's head can't be read.
    pub fn add_entry(&mut self, storage: &dyn Storage, entry: &Entry) -> Result<NodeId, TreeError> {
        let segments: Vec<String> = entry
            .path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let Some((last, ancestors)) = segments.split_last() else {
            return Ok(self.root());
        };

        let mut parent = self.root();
        let mut ordinals = String::new();

        for segment in ancestors {
            let doc_ref = push_ordinal(&mut ordinals, segment);
            parent = self.insert(
                parent,
                segment,
                naming::directory_title(segment),
                doc_ref,
                NodeKind::Directory,
            );
        }

        let doc_ref = push_ordinal(&mut ordinals, last);
        let id = match entry.kind {
            EntryKind::Directory => self.insert(
                parent,
                last,
                naming::directory_title(last),
                doc_ref,
                NodeKind::Directory,
            ),
            EntryKind::File => {
                let name = naming::html_name(last);
                let title = document_title(storage, &entry.path)?;
                self.insert(parent, &name, title, doc_ref, NodeKind::Document)
            }
        };

        Ok(id)
    }

    /// Build the [`DocTree`] instance.
    #[must_use]
    pub fn build(self) -> DocTree {
        let mut tree = DocTree {
            nodes: self.nodes,
            path_index: self.path_index,
            ref_index: HashMap::new(),
        };

        // First node in pre-order wins, like a linear scan would.
        let mut ref_index = HashMap::new();
        for id in tree.preorder() {
            let doc_ref = &tree.node(id).doc_ref;
            if !doc_ref.is_empty() {
                ref_index.entry(doc_ref.clone()).or_insert(id);
            }
        }
        tree.ref_index = ref_index;
        tree
    }
}

/// Extend the accumulated ordinals with a segment's own ordinal.
///
/// Returns the segment's reference: the accumulated ordinals if the segment
/// is numbered, empty otherwise.
fn push_ordinal(ordinals: &mut String, segment: &str) -> String {
    match naming::ordinal(segment) {
        Some(ordinal) => {
            if !ordinals.is_empty() {
                ordinals.push('.');
            }
            ordinals.push_str(ordinal);
            ordinals.clone()
        }
        None => String::new(),
    }
}

/// Title of a document from its front matter, [`UNTITLED`] if absent.
fn document_title(storage: &dyn Storage, path: &Path) -> Result<String, TreeError> {
    let head = storage
        .read_head(path, FRONT_MATTER_LIMIT)
        .map_err(|source| TreeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match extract_title(&head) {
        Some(title) => naming::normalize_hyphens(&title),
        None => {
            tracing::debug!(path = %path.display(), "No front-matter title, using fallback");
            UNTITLED.to_owned()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexdoc_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;

    fn sample_storage() -> MockStorage {
        MockStorage::new()
            .with_dir("1-intro")
            .with_file("1-intro/1-about.md", "---\ntitle: About\n---\n")
            .with_file("1-intro/2-setup.md", "---\ntitle: setup - Setup\n---\n")
            .with_dir("2-Getting-Started")
            .with_file("2-Getting-Started/1-first-steps.md", "no front matter")
            .with_dir("appendix")
            .with_file("appendix/3-glossary.md", "---\ntitle: Glossary\n---\n")
    }

    fn sample_tree() -> DocTree {
        DocTree::build(&sample_storage(), "", "FlexDoc").unwrap()
    }

    #[test]
    fn test_build_node_count_is_entries_plus_root() {
        let storage = sample_storage();
        let entry_count = storage.scan().unwrap().len();

        let tree = DocTree::build(&storage, "", "FlexDoc").unwrap();

        assert_eq!(tree.node_count(), entry_count + 1);
    }

    #[test]
    fn test_build_root() {
        let tree = sample_tree();

        let root = tree.root();

        assert_eq!(root.path, "");
        assert_eq!(root.title, "FlexDoc");
        assert_eq!(root.doc_ref, "");
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn test_build_mount_path() {
        let tree = DocTree::build(&sample_storage(), "/docs", "FlexDoc").unwrap();

        assert_eq!(tree.root().path, "/docs");
        assert!(tree.find_by_path("/docs/1-intro/2-setup.html").is_some());
    }

    #[test]
    fn test_build_mount_path_trailing_slash() {
        let tree = DocTree::build(&sample_storage(), "/", "FlexDoc").unwrap();

        assert_eq!(tree.root().path, "");
        assert!(tree.find_by_path("/1-intro").is_some());
    }

    #[test]
    fn test_document_path_and_reference() {
        let tree = sample_tree();

        let node = tree.find_by_path("/1-intro/2-setup.html").unwrap();

        assert_eq!(node.doc_ref, "1.2");
        assert_eq!(node.kind, NodeKind::Document);
        assert_eq!(node.title, "setup - Setup");
        assert_eq!(node.short_title(), "Setup");
    }

    #[test]
    fn test_directory_title_derivation() {
        let tree = sample_tree();

        let node = tree.find_by_path("/2-Getting-Started").unwrap();

        assert_eq!(node.title, "Getting Started");
        assert_eq!(node.doc_ref, "2");
        assert_eq!(node.kind, NodeKind::Directory);
    }

    #[test]
    fn test_missing_front_matter_is_untitled() {
        let tree = sample_tree();

        let node = tree
            .find_by_path("/2-Getting-Started/1-first-steps.html")
            .unwrap();

        assert_eq!(node.title, UNTITLED);
        assert_eq!(node.doc_ref, "2.1");
    }

    #[test]
    fn test_unnumbered_segment_has_empty_reference() {
        let tree = sample_tree();

        let appendix = tree.find_by_path("/appendix").unwrap();
        let glossary = tree.find_by_path("/appendix/3-glossary.html").unwrap();

        assert_eq!(appendix.doc_ref, "");
        assert_eq!(glossary.doc_ref, "3");
    }

    #[test]
    fn test_unnumbered_directory_passes_root_ordinals_through() {
        let storage = MockStorage::new()
            .with_dir("1-a")
            .with_dir("1-a/guide")
            .with_file("1-a/guide/3-b.md", "---\ntitle: B\n---\n");

        let tree = DocTree::build(&storage, "", "Root").unwrap();

        assert_eq!(tree.find_by_path("/1-a").unwrap().doc_ref, "1");
        assert_eq!(tree.find_by_path("/1-a/guide").unwrap().doc_ref, "");
        let leaf = tree.find_by_path("/1-a/guide/3-b.html").unwrap();
        assert_eq!(leaf.doc_ref, "1.3");
        assert_eq!(tree.find_by_reference("1.3"), Some(leaf));
    }

    #[test]
    fn test_front_matter_title_hyphens_normalized() {
        let storage = MockStorage::new().with_file("1-api.md", "---\ntitle: Search-API\n---\n");

        let tree = DocTree::build(&storage, "", "Root").unwrap();

        assert_eq!(tree.find_by_reference("1").unwrap().title, "Search API");
    }

    #[test]
    fn test_children_keep_walk_order() {
        let tree = sample_tree();

        let titles: Vec<&str> = tree
            .root()
            .children()
            .iter()
            .map(|&id| tree.node(id).title.as_str())
            .collect();

        assert_eq!(titles, vec!["intro", "Getting Started", "appendix"]);
    }

    #[test]
    fn test_missing_ancestors_created_on_demand() {
        let storage = MockStorage::new().with_file("1-a/2-b/3-c.md", "---\ntitle: C\n---\n");

        let tree = DocTree::build(&storage, "", "Root").unwrap();

        assert_eq!(tree.node_count(), 4);
        let a = tree.find_by_path("/1-a").unwrap();
        let b = tree.find_by_path("/1-a/2-b").unwrap();
        assert_eq!((a.title.as_str(), a.doc_ref.as_str()), ("a", "1"));
        assert_eq!((b.title.as_str(), b.doc_ref.as_str()), ("b", "1.2"));
        assert_eq!(b.kind, NodeKind::Directory);
        assert_eq!(tree.find_by_reference("1.2.3").unwrap().title, "C");
    }

    #[test]
    fn test_ancestor_seen_later_keeps_first_node() {
        let storage = MockStorage::new()
            .with_file("1-a/x.md", "---\ntitle: X\n---\n")
            .with_dir("1-a");

        let tree = DocTree::build(&storage, "", "Root").unwrap();

        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.root().children().len(), 1);
    }

    #[test]
    fn test_duplicate_path_first_seen_wins() {
        let storage = MockStorage::new()
            .with_file("page.md", "---\ntitle: First\n---\n")
            .with_file("page.txt", "---\ntitle: Second\n---\n");

        let tree = DocTree::build(&storage, "", "Root").unwrap();

        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.find_by_path("/page.html").unwrap().title, "First");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut builder = DocTreeBuilder::new("", "Root");
        let root = builder.root();

        let first = builder.insert(root, "a", "A".to_owned(), String::new(), NodeKind::Directory);
        let second = builder.insert(root, "a", "B".to_owned(), "9".to_owned(), NodeKind::Document);
        let tree = builder.build();

        assert_eq!(first, second);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.node(first).title, "A");
        assert_eq!(tree.node(first).kind, NodeKind::Directory);
        assert_eq!(tree.root().children(), &[first]);
    }

    #[test]
    fn test_empty_directory_is_branch_without_children() {
        let storage = MockStorage::new().with_dir("1-empty");

        let tree = DocTree::build(&storage, "", "Root").unwrap();
        let node = tree.find_by_path("/1-empty").unwrap();

        assert!(node.children().is_empty());
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_find_by_reference_first_in_preorder_wins() {
        // "1-a/b/2-c" and "1-a/2-d" both resolve to "1.2".
        let storage = MockStorage::new()
            .with_dir("1-a")
            .with_dir("1-a/b")
            .with_dir("1-a/2-d")
            .with_dir("1-a/b/2-c");

        let tree = DocTree::build(&storage, "", "Root").unwrap();

        assert_eq!(tree.find_by_reference("1.2").unwrap().path, "/1-a/b/2-c");
    }

    #[test]
    fn test_find_by_reference_empty_never_matches() {
        let tree = sample_tree();

        assert!(tree.find_by_reference("").is_none());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let tree = sample_tree();

        assert!(tree.find_by_reference("9.9").is_none());
        assert!(tree.find_by_path("/nope.html").is_none());
    }

    #[test]
    fn test_lookup_round_trip() {
        let tree = sample_tree();

        for node in tree.iter() {
            assert_eq!(tree.find_by_path(&node.path), Some(node));
            if !node.doc_ref.is_empty() {
                assert_eq!(tree.find_by_reference(&node.doc_ref), Some(node));
            }
        }
    }

    #[test]
    fn test_structural_invariants() {
        let tree = sample_tree();

        for id in tree.preorder() {
            let node = tree.node(id);
            let Some(parent_id) = node.parent() else {
                continue;
            };
            let parent = tree.node(parent_id);

            let (prefix, segment) = node.path.rsplit_once('/').unwrap();
            assert_eq!(prefix, parent.path);
            assert!(!segment.is_empty());

            if !node.doc_ref.is_empty() && !parent.doc_ref.is_empty() {
                let (ref_prefix, _) = node.doc_ref.rsplit_once('.').unwrap();
                assert_eq!(ref_prefix, parent.doc_ref);
            }
        }
    }

    #[test]
    fn test_ancestors_and_depth() {
        let tree = sample_tree();
        let id = tree.find_id_by_path("/1-intro/2-setup.html").unwrap();

        let ancestors: Vec<&str> = tree.ancestors(id).into_iter().map(|n| n.path.as_str()).collect();

        assert_eq!(ancestors, vec!["", "/1-intro"]);
        assert_eq!(tree.depth(id), 2);
        assert_eq!(tree.depth(tree.root_id()), 0);
        assert!(tree.ancestors(tree.root_id()).is_empty());
    }

    #[test]
    fn test_iter_is_preorder() {
        let storage = MockStorage::new()
            .with_file("a/x.md", "")
            .with_file("b/y.md", "")
            .with_file("a/z.md", "");

        let tree = DocTree::build(&storage, "", "Root").unwrap();
        let paths: Vec<&str> = tree.iter().map(|n| n.path.as_str()).collect();

        assert_eq!(paths, vec!["", "/a", "/a/x.html", "/a/z.html", "/b", "/b/y.html"]);
    }

    #[test]
    fn test_scan_failure_is_fatal() {
        let storage = MockStorage::new().with_scan_error(StorageErrorKind::PermissionDenied);

        let err = DocTree::build(&storage, "", "Root").unwrap_err();

        assert!(matches!(err, TreeError::Scan(_)));
    }

    #[test]
    fn test_unreadable_document_is_fatal() {
        let storage = MockStorage::new().with_unreadable_file("1-a.md");

        let err = DocTree::build(&storage, "", "Root").unwrap_err();

        assert!(matches!(err, TreeError::Read { ref path, .. } if path == Path::new("1-a.md")));
    }

    #[test]
    fn test_from_dir_builds_from_filesystem() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("1-intro")).unwrap();
        std::fs::write(root.join("1-intro/2-setup.md"), "---\ntitle: Setup\n---\n").unwrap();

        let tree = DocTree::from_dir(root, "/docs", "FlexDoc").unwrap();

        assert_eq!(tree.node_count(), 3);
        let node = tree.find_by_reference("1.2").unwrap();
        assert_eq!(node.path, "/docs/1-intro/2-setup.html");
        assert_eq!(node.title, "Setup");
    }

    #[test]
    fn test_from_dir_keeps_dotfiles() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("1-intro")).unwrap();
        std::fs::write(root.join("1-intro/.gitkeep"), "").unwrap();
        std::fs::write(root.join("1-intro/2-setup.md"), "---\ntitle: Setup\n---\n").unwrap();

        let tree = DocTree::from_dir(root, "", "Root").unwrap();

        assert_eq!(tree.node_count(), 3 + 1);
        let keep = tree.find_by_path("/1-intro/.gitkeep.html").unwrap();
        assert_eq!(keep.title, UNTITLED);
        assert_eq!(keep.doc_ref, "");
    }

    #[test]
    fn test_from_dir_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = DocTree::from_dir(temp_dir.path().join("missing"), "", "Root");

        assert!(matches!(result, Err(TreeError::Scan(_))));
    }
}
