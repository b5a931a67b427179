//! Test tree generator.
//!
//! Builds a small directory tree full of awkward names to try the cleaner on.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Name of the generated root folder.
pub const FIXTURE_DIR_NAME: &str = "filename_cleaner_test";

/// An entry in the fixture layout.
#[derive(Debug, Clone, Copy)]
pub enum Node {
    /// A file with the given content.
    File(&'static str),
    /// A folder with named children.
    Folder(&'static [(&'static str, Node)]),
}

/// The fixture tree below [`FIXTURE_DIR_NAME`].
pub static LAYOUT: &[(&str, Node)] = &[
    (
        "My Documents!",
        Node::Folder(&[
            ("file (1).txt", Node::File("Test content 1")),
            ("file (2).txt", Node::File("Test content 2")),
            ("test-file@123.doc", Node::File("Test content 3")),
        ]),
    ),
    (
        "Program Files@",
        Node::Folder(&[
            ("app_1.0.2 (beta).exe", Node::File("Test content 4")),
            ("install-notes.txt", Node::File("Test content 5")),
        ]),
    ),
    (
        "Data & Settings",
        Node::Folder(&[
            ("user.config", Node::File("Test content 6")),
            (
                "backup (old)",
                Node::Folder(&[
                    ("data#1.bak", Node::File("Test content 7")),
                    ("data#2.bak", Node::File("Test content 8")),
                ]),
            ),
        ]),
    ),
    (
        "Test Files (Duplicate Names)",
        Node::Folder(&[
            ("my-file.txt", Node::File("Content 1")),
            ("my_file.txt", Node::File("Content 2")),
            ("my file.txt", Node::File("Content 3")),
        ]),
    ),
    (
        "Special & Chars",
        Node::Folder(&[
            ("file@#$%.txt", Node::File("Special chars test")),
            ("unicode_τεστ.dat", Node::File("Unicode test")),
            ("spaces   test.txt", Node::File("Multiple spaces test")),
            ("  leading spaces.txt", Node::File("Leading spaces test")),
            ("trailing spaces  .txt", Node::File("Trailing spaces test")),
            ("  both ends  .txt", Node::File("Both ends spaces test")),
        ]),
    ),
];

/// Create the fixture tree inside `parent`, replacing any previous one.
///
/// Returns the path of the fixture root.
pub fn create_fixture(parent: &Path) -> Result<PathBuf> {
    let root = parent.join(FIXTURE_DIR_NAME);

    if root.exists() {
        tracing::info!("Removing existing fixture at {}", root.display());
        fs::remove_dir_all(&root)?;
    }

    fs::create_dir_all(&root)?;
    write_nodes(&root, LAYOUT)?;

    Ok(root)
}

fn write_nodes(dir: &Path, nodes: &[(&str, Node)]) -> Result<()> {
    for (name, node) in nodes {
        let path = dir.join(name);
        match node {
            Node::File(content) => fs::write(&path, content)?,
            Node::Folder(children) => {
                fs::create_dir_all(&path)?;
                write_nodes(&path, children)?;
            }
        }
    }
    Ok(())
}

/// Render an indented listing of `root`, two spaces per level and a trailing
/// `/` on folders.
pub fn render_tree(root: &Path) -> Result<String> {
    let mut out = String::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let indent = "  ".repeat(entry.depth());
        let name = entry.file_name().to_string_lossy();
        let suffix = if entry.file_type().is_dir() { "/" } else { "" };
        // writing to a String cannot fail
        let _ = writeln!(out, "{}{}{}", indent, name, suffix);
    }

    Ok(out)
}
