use crate::detector::FrameworkDetector;
use crate::error::Result;
use crate::extractor::extractor_for;
use crate::openapi_builder::{OpenApiBuilder, OpenApiDocument};
use crate::parser::GoParser;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Result of analysing a single Go source file.
///
/// Both maps are built from scratch per call and owned by the caller; the engine
/// keeps no state between invocations, so concurrent analyses of different files
/// need no coordination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Recognized framework module paths mapped to their local alias in the file.
    pub frameworks_identified: HashMap<String, String>,
    /// Minimal OpenAPI documents keyed by `<method>:<framework>:<filePath>`.
    pub openapi_specs: HashMap<String, OpenApiDocument>,
}

/// Analyses one Go source file for web framework usage and registered routes.
///
/// The pipeline is: parse the file, extract its import table, intersect the
/// imports with the supported-framework registry, then for each recognized
/// framework walk the tree for route registrations and synthesize a minimal
/// OpenAPI document. A framework that is imported but registers no routes appears
/// in `frameworks_identified` but produces no document, so files that merely
/// import a framework do not generate noise.
///
/// # Arguments
///
/// * `file_path` - The file's path, used for error positions and document keys
/// * `file_contents` - The full source text
///
/// # Errors
///
/// Returns `Error::ParseError` if the contents are not syntactically valid Go.
/// Call sites or imports that merely fail a recognition rule are skipped
/// silently; they are never an error.
pub fn analyse(file_path: &str, file_contents: &str) -> Result<Analysis> {
    let parsed = GoParser::parse_source(Path::new(file_path), file_contents)?;

    let imports = FrameworkDetector::imports(&parsed);
    let frameworks_identified = FrameworkDetector::filter_to_supported_frameworks(&imports);

    let mut openapi_specs = HashMap::new();
    for (framework, alias) in &frameworks_identified {
        let Some(extractor) = extractor_for(framework) else {
            continue;
        };

        let routes = extractor.extract_routes(&parsed, alias);
        debug!(
            "{}: {} route(s) for {} (alias {})",
            file_path,
            routes.len(),
            framework,
            alias
        );

        if routes.is_empty() {
            continue;
        }

        openapi_specs.insert(
            OpenApiBuilder::document_key(framework, file_path),
            OpenApiBuilder::build_document(framework, &routes),
        );
    }

    Ok(Analysis {
        frameworks_identified,
        openapi_specs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const HELLO_WORLD: &str = r#"package main

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

    #[test]
    fn test_analyse_hello_world() {
        let analysis = analyse("net_http_hello_world.go", HELLO_WORLD).unwrap();

        assert_eq!(
            analysis.frameworks_identified,
            HashMap::from([("net/http".to_string(), "http".to_string())])
        );

        let document = analysis
            .openapi_specs
            .get("static-analysis:net/http:net_http_hello_world.go")
            .expect("document should be keyed by method, framework, and file path");
        let expected = json!({
            "openapi": "3.0.0",
            "info": { "title": "Static Analysis - Golang net/http" },
            "paths": {
                "/hello": {
                    "responses": {
                        "default": { "description": "Discovered via static analysis" }
                    }
                }
            }
        });
        assert_eq!(serde_json::to_value(document).unwrap(), expected);
    }

    #[test]
    fn test_analyse_aliased_import_detects_same_routes() {
        let source = r#"package main

import (
	"fmt"
	nethttp "net/http"
)

func hello(w nethttp.ResponseWriter, req *nethttp.Request) {
	fmt.Fprintf(w, "Hello, world!\n")
}

func main() {
	nethttp.HandleFunc("/hello", hello)
	nethttp.ListenAndServe(":8080", nil)
}
"#;

        let analysis = analyse("aliased.go", source).unwrap();

        assert_eq!(
            analysis.frameworks_identified,
            HashMap::from([("net/http".to_string(), "nethttp".to_string())])
        );
        let document = analysis
            .openapi_specs
            .get("static-analysis:net/http:aliased.go")
            .unwrap();
        assert!(document.paths.contains_key("/hello"));
        assert_eq!(document.paths.len(), 1);
    }

    #[test]
    fn test_analyse_malformed_source_is_an_error() {
        let result = analyse("malformed.go", "{\"Oh no\": \"This isn't Go, it's JSON!\"}");

        assert!(matches!(result, Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_analyse_no_supported_imports() {
        let source = r#"package main

import "fmt"

func main() {
	fmt.Println("no servers here")
}
"#;

        let analysis = analyse("plain.go", source).unwrap();

        assert!(analysis.frameworks_identified.is_empty());
        assert!(analysis.openapi_specs.is_empty());
    }

    #[test]
    fn test_analyse_import_without_routes_produces_no_document() {
        let source = r#"package main

import "net/http"

func main() {
	http.ListenAndServe(":8080", nil)
}
"#;

        let analysis = analyse("serve_only.go", source).unwrap();

        assert_eq!(
            analysis.frameworks_identified,
            HashMap::from([("net/http".to_string(), "http".to_string())])
        );
        assert!(analysis.openapi_specs.is_empty());
    }

    #[test]
    fn test_analyse_is_idempotent() {
        let first = analyse("net_http_hello_world.go", HELLO_WORLD).unwrap();
        let second = analyse("net_http_hello_world.go", HELLO_WORLD).unwrap();

        assert_eq!(first, second);
    }
}
