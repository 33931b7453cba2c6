//! Route extraction module for recognizing framework route registrations.
//!
//! Each supported framework has its own extractor that knows which call shapes
//! register a route. Extractors work purely on the syntax tree: they never resolve
//! whether the receiver identifier truly denotes the framework's package, they
//! only match it textually against the alias resolved from the file's imports.
//! That keeps extraction a single dependency-free pass at the cost of missing
//! shadowed aliases; a call site that fails any recognition rule is skipped
//! silently rather than reported.
//!
//! # Supported Frameworks
//!
//! - **net/http**: See [`net_http::NetHttpExtractor`]

pub mod net_http;

use crate::parser::ParsedFile;

/// Trait for extracting route registrations from a parsed Go file.
pub trait RouteExtractor {
    /// Extracts all routes registered against `package_alias` in the file.
    ///
    /// Routes are returned in the order their registration calls are encountered
    /// during a pre-order depth-first traversal of the tree. Repeated
    /// registrations of the same path produce repeated entries; duplicates are
    /// only collapsed later, when the OpenAPI document is synthesized.
    fn extract_routes(&self, parsed: &ParsedFile, package_alias: &str) -> Vec<Route>;
}

/// A single discovered route registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The literal path string passed to the registration call, with its
    /// enclosing quotes stripped and no further escape decoding.
    pub path: String,
}

/// Returns the extractor for a recognized framework module path, if one exists.
pub fn extractor_for(framework: &str) -> Option<Box<dyn RouteExtractor>> {
    match framework {
        "net/http" => Some(Box::new(net_http::NetHttpExtractor)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_exists_for_net_http() {
        assert!(extractor_for("net/http").is_some());
    }

    #[test]
    fn test_no_extractor_for_unknown_framework() {
        assert!(extractor_for("github.com/gin-gonic/gin").is_none());
    }
}
