use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// Syntax tree parser for Go source files.
///
/// The `GoParser` uses the `tree-sitter` Go grammar to parse Go source code into a
/// concrete syntax tree, which can then be analyzed to extract import declarations
/// and route registrations.
///
/// Unlike a compiler front end, tree-sitter always produces a tree, inserting ERROR
/// nodes where the input does not match the grammar. A file is treated as unparseable
/// when its tree contains any such node, since the same tree is reused for the full
/// route traversal and partial trees would make detection unpredictable.
///
/// # Example
///
/// ```no_run
/// use openapi_from_go::parser::GoParser;
/// use std::path::Path;
///
/// let parsed = GoParser::parse_file(Path::new("main.go")).unwrap();
/// println!("Parsed {} top-level nodes", parsed.tree.root_node().named_child_count());
/// ```
pub struct GoParser;

/// A successfully parsed Go file with its syntax tree.
///
/// Tree-sitter nodes borrow positions from the tree and text from the source, so
/// both are kept together with the originating path.
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The original source text
    pub source: String,
    /// The parsed syntax tree
    pub tree: Tree,
}

impl ParsedFile {
    /// Returns the text of a node, or an empty string for the rare case of a
    /// node spanning invalid UTF-8 (the source is a `String`, so this cannot
    /// happen in practice).
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

impl GoParser {
    /// Parses Go source text into a syntax tree.
    ///
    /// This is the in-memory entry point used by `analyse`: the caller supplies both
    /// the path (used only for error positions) and the full file contents.
    ///
    /// # Errors
    ///
    /// Returns `Error::ParseError` with the position of the first offending node if
    /// the text is not syntactically valid Go.
    pub fn parse_source(path: &Path, source: &str) -> Result<ParsedFile> {
        debug!("Parsing Go source for: {}", path.display());

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| Error::ParseError {
                file: path.to_path_buf(),
                line: 0,
                column: 0,
                message: format!("Failed to load Go grammar: {}", e),
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| Error::ParseError {
            file: path.to_path_buf(),
            line: 0,
            column: 0,
            message: "Parser produced no syntax tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let offending = first_error_node(root).unwrap_or(root);
            let position = offending.start_position();
            return Err(Error::ParseError {
                file: path.to_path_buf(),
                line: position.row + 1,
                column: position.column + 1,
                message: "Invalid Go syntax".to_string(),
            });
        }

        debug!("Successfully parsed: {}", path.display());

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source: source.to_string(),
            tree,
        })
    }

    /// Reads a Go source file from disk and parses it.
    ///
    /// # Errors
    ///
    /// Returns `Error::IoError` if the file cannot be read, or `Error::ParseError`
    /// if it contains invalid Go syntax.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        let source = fs::read_to_string(path)?;
        Self::parse_source(path, &source)
    }
}

/// Finds the first ERROR or missing node in a pre-order traversal.
fn first_error_node(node: Node) -> Option<Node> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_valid_go_source() {
        let source = r#"package main

import (
	"fmt"
	"net/http"
)

func hello(w http.ResponseWriter, req *http.Request) {
	fmt.Fprintf(w, "Hello, world!\n")
}

func main() {
	http.HandleFunc("/hello", hello)
	http.ListenAndServe(":8080", nil)
}
"#;

        let parsed = GoParser::parse_source(Path::new("hello.go"), source).unwrap();

        assert_eq!(parsed.path, PathBuf::from("hello.go"));
        assert!(!parsed.tree.root_node().has_error());
        assert!(parsed.tree.root_node().named_child_count() >= 4);
    }

    #[test]
    fn test_parse_invalid_source_reports_position() {
        let source = "{\"Oh no\": \"This isn't Go, it's JSON!\"}";

        let result = GoParser::parse_source(Path::new("malformed.go"), source);

        match result {
            Err(Error::ParseError { file, line, .. }) => {
                assert_eq!(file, PathBuf::from("malformed.go"));
                assert!(line >= 1);
            }
            other => panic!("Expected ParseError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_truncated_declaration_is_an_error() {
        let source = "package main\n\nfunc broken( {\n";

        let result = GoParser::parse_source(Path::new("broken.go"), source);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_source() {
        // An empty file is grammatically valid (no ERROR nodes), even though the Go
        // compiler would reject the missing package clause.
        let parsed = GoParser::parse_source(Path::new("empty.go"), "").unwrap();

        assert_eq!(parsed.tree.root_node().named_child_count(), 0);
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = GoParser::parse_file(Path::new("/nonexistent/file.go"));

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
