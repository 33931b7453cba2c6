//! Go OpenAPI Generator - Minimal OpenAPI documents from Go source by static analysis.
//!
//! This library analyses a single Go source file to discover which web-serving
//! libraries it uses and which HTTP routes it registers, without executing the
//! analyzed code. For each recognized framework usage it synthesizes a minimal
//! OpenAPI 3.0 document whose paths carry stubbed responses.
//!
//! # Supported Frameworks
//!
//! - **net/http**: the Go standard library HTTP server; routes registered via
//!   `http.Handle("/path", handler)` and `http.HandleFunc("/path", handler)`
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`scanner`] - Recursively scans directories for Go files
//! 2. [`parser`] - Parses Go source into syntax trees via tree-sitter
//! 3. [`detector`] - Extracts imports and filters them against the framework registry
//! 4. [`extractor`] - Walks the tree for framework-specific route registrations
//! 5. [`openapi_builder`] - Synthesizes the minimal OpenAPI documents
//! 6. [`analysis`] - Per-file orchestration: the `analyse` entry point
//! 7. [`serializer`] - Serializes results to YAML or JSON
//! 8. [`ffi`] - C-ABI adapter for host processes loading this crate as a cdylib
//!
//! Detection is deliberately syntactic: a framework is recognized by its import
//! path and its routes by calls on the imported alias with a literal path
//! argument. Anything that fails a recognition rule is skipped silently.
//!
//! # Example Usage
//!
//! ```
//! use openapi_from_go::analysis::analyse;
//!
//! let source = r#"package main
//!
//! import "net/http"
//!
//! func main() {
//! 	http.HandleFunc("/hello", hello)
//! 	http.ListenAndServe(":8080", nil)
//! }
//! "#;
//!
//! let analysis = analyse("main.go", source).unwrap();
//! assert_eq!(analysis.frameworks_identified["net/http"], "http");
//! assert!(analysis
//!     .openapi_specs
//!     .contains_key("static-analysis:net/http:main.go"));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI
//! application.

pub mod analysis;
pub mod cli;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod ffi;
pub mod openapi_builder;
pub mod parser;
pub mod scanner;
pub mod serializer;
