use crate::extractor::Route;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of the analysis technique, used as the first segment of document keys.
pub const ANALYSIS_METHOD: &str = "static-analysis";

/// Description attached to every stubbed default response.
pub const DEFAULT_RESPONSE_DESCRIPTION: &str = "Discovered via static analysis";

/// Builder for minimal OpenAPI documents synthesized from discovered routes.
///
/// The documents are deliberately skeletal: static analysis can tell which paths
/// exist but not their methods, parameters, or schemas, so each path gets a single
/// stubbed `default` response. Duplicate route registrations collapse here, since
/// `paths` is keyed by path; the extractor's sequence still carries the duplicates.
pub struct OpenApiBuilder;

/// OpenAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
}

/// OpenAPI PathItem object - all we can claim about a path is a stub response set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Responses keyed by status or "default"
    pub responses: HashMap<String, Response>,
}

/// OpenAPI Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
}

/// Minimal OpenAPI document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version
    pub openapi: String,
    /// API info
    pub info: Info,
    /// API paths
    pub paths: HashMap<String, PathItem>,
}

impl OpenApiBuilder {
    /// Synthesizes the document key for one framework in one file.
    ///
    /// The key combines the analysis method, the framework's canonical module path,
    /// and the input file path as given, e.g.
    /// `static-analysis:net/http:cmd/server/main.go`.
    pub fn document_key(framework: &str, file_path: &str) -> String {
        format!("{}:{}:{}", ANALYSIS_METHOD, framework, file_path)
    }

    /// Builds a minimal OpenAPI document for a framework's discovered routes.
    ///
    /// Callers are expected to skip frameworks with zero routes; building from an
    /// empty slice yields a document with an empty `paths` map.
    pub fn build_document(framework: &str, routes: &[Route]) -> OpenApiDocument {
        debug!(
            "Building OpenAPI document for {} with {} route(s)",
            framework,
            routes.len()
        );

        let mut paths = HashMap::new();
        for route in routes {
            paths.insert(
                route.path.clone(),
                PathItem {
                    responses: HashMap::from([(
                        "default".to_string(),
                        Response {
                            description: DEFAULT_RESPONSE_DESCRIPTION.to_string(),
                        },
                    )]),
                },
            );
        }

        OpenApiDocument {
            openapi: "3.0.0".to_string(),
            info: Info {
                title: format!("Static Analysis - Golang {}", framework),
            },
            paths,
        }
    }
}
