use crate::parser::ParsedFile;
use log::debug;
use std::collections::HashMap;
use tree_sitter::Node;

/// Module paths of the web frameworks the analysis understands.
///
/// Adding support for a new framework means adding its canonical import path here
/// and registering an extractor for it in [`crate::extractor::extractor_for`];
/// import extraction itself is framework-agnostic and needs no changes.
pub const SUPPORTED_FRAMEWORKS: &[&str] = &["net/http"];

/// Framework detector for identifying web frameworks used in a Go file.
///
/// The `FrameworkDetector` reads the import declarations of a parsed file and
/// intersects them with the supported-framework registry. Detection is purely
/// import-based: a file that imports `net/http` is considered to use it, whether
/// or not it ever registers a route.
pub struct FrameworkDetector;

impl FrameworkDetector {
    /// Extracts the import table of a parsed file.
    ///
    /// Returns a map from each imported module path to the local identifier the file
    /// uses for it:
    ///
    /// - `import foo "net/http"` maps `"net/http"` to `"foo"`
    /// - `import "net/http"` maps `"net/http"` to `"http"` (last path segment)
    ///
    /// Re-importing the same path under a different name overwrites the earlier
    /// entry; the last occurrence wins.
    pub fn imports(parsed: &ParsedFile) -> HashMap<String, String> {
        let mut imports = HashMap::new();

        let root = parsed.tree.root_node();
        let mut cursor = root.walk();
        for item in root.named_children(&mut cursor) {
            if item.kind() == "import_declaration" {
                Self::collect_import_specs(item, parsed, &mut imports);
            }
        }

        debug!("Extracted {} imports from {}", imports.len(), parsed.path.display());

        imports
    }

    /// Collect `import_spec` nodes from an import declaration, which holds either a
    /// single spec or an `import_spec_list` group.
    fn collect_import_specs(
        declaration: Node,
        parsed: &ParsedFile,
        imports: &mut HashMap<String, String>,
    ) {
        let mut cursor = declaration.walk();
        for child in declaration.named_children(&mut cursor) {
            match child.kind() {
                "import_spec" => Self::record_import_spec(child, parsed, imports),
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    for spec in child.named_children(&mut list_cursor) {
                        if spec.kind() == "import_spec" {
                            Self::record_import_spec(spec, parsed, imports);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Record a single import spec into the import table.
    fn record_import_spec(spec: Node, parsed: &ParsedFile, imports: &mut HashMap<String, String>) {
        let Some(path_node) = spec.child_by_field_name("path") else {
            return;
        };

        // The path literal includes quotes on either end (e.g. "net/http"); strip them.
        let quoted = parsed.node_text(path_node);
        if quoted.len() < 2 {
            return;
        }
        let module_path = &quoted[1..quoted.len() - 1];

        let alias = match spec.child_by_field_name("name") {
            Some(name_node) => parsed.node_text(name_node).to_string(),
            None => module_path
                .rsplit('/')
                .next()
                .unwrap_or(module_path)
                .to_string(),
        };

        imports.insert(module_path.to_string(), alias);
    }

    /// Filters an import table down to the supported frameworks.
    ///
    /// Matching is exact on the module path; there is no partial matching,
    /// versioning, or wildcarding. Each retained entry keeps its resolved alias so
    /// the route extractor knows which identifier to look for.
    pub fn filter_to_supported_frameworks(
        imports: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        let supported: HashMap<String, String> = imports
            .iter()
            .filter(|(module_path, _)| SUPPORTED_FRAMEWORKS.contains(&module_path.as_str()))
            .map(|(module_path, alias)| (module_path.clone(), alias.clone()))
            .collect();

        debug!("Recognized frameworks: {:?}", supported.keys().collect::<Vec<_>>());

        supported
    }
}
