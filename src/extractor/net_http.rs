use super::{Route, RouteExtractor};
use crate::parser::ParsedFile;
use log::debug;
use tree_sitter::Node;

/// Method names on the `net/http` package that register a route.
const ROUTE_REGISTRATION_METHODS: &[&str] = &["Handle", "HandleFunc"];

/// Route extractor for the Go standard library `net/http` server.
///
/// Recognizes call sites of the shape `http.Handle("/path", handler)` and
/// `http.HandleFunc("/path", handler)`, where `http` is whatever local alias the
/// file resolved for the `net/http` import.
pub struct NetHttpExtractor;

impl RouteExtractor for NetHttpExtractor {
    fn extract_routes(&self, parsed: &ParsedFile, package_alias: &str) -> Vec<Route> {
        let mut routes = Vec::new();
        collect_routes(parsed.tree.root_node(), parsed, package_alias, &mut routes);

        debug!(
            "net/http extraction found {} route(s) in {}",
            routes.len(),
            parsed.path.display()
        );

        routes
    }
}

/// Pre-order depth-first traversal collecting route registrations.
///
/// Only `call_expression` nodes are of interest; every other kind just recurses
/// into its children. Matched calls are still recursed into, so a registration
/// nested inside another call's arguments is found too.
fn collect_routes(node: Node, parsed: &ParsedFile, package_alias: &str, routes: &mut Vec<Route>) {
    if node.kind() == "call_expression" {
        if let Some(path) = registration_path(node, parsed, package_alias) {
            routes.push(Route { path });
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_routes(child, parsed, package_alias, routes);
    }
}

/// Returns the literal route path if a call expression is a route registration.
///
/// All of the following must hold, otherwise the call is skipped:
///
/// 1. the call has exactly two arguments (a path and a handler);
/// 2. the callee is a selector whose field is `Handle` or `HandleFunc`;
/// 3. the selector's operand is a bare identifier matching `package_alias`;
/// 4. the first argument is a string literal.
///
/// Variables, concatenations, and calls as the path argument are deliberately
/// not resolved. E.g. this is detected:
///
/// ```go
/// http.HandleFunc("/health", health)
/// ```
///
/// but this is not:
///
/// ```go
/// healthPath := "/health"
/// http.HandleFunc(healthPath, health)
/// ```
fn registration_path(call: Node, parsed: &ParsedFile, package_alias: &str) -> Option<String> {
    let arguments = call.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let args: Vec<Node> = arguments
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    if args.len() != 2 {
        return None;
    }

    let function = call.child_by_field_name("function")?;
    if function.kind() != "selector_expression" {
        return None;
    }

    let field = function.child_by_field_name("field")?;
    if !ROUTE_REGISTRATION_METHODS.contains(&parsed.node_text(field)) {
        return None;
    }

    // The operand should be a plain identifier matching the alias resolved for the
    // net/http import. We could inspect further to check it is actually the
    // net/http package, but nobody is likely to shadow the identifier with a value
    // carrying Handle()/HandleFunc() methods of exactly the same arity.
    let operand = function.child_by_field_name("operand")?;
    if operand.kind() != "identifier" || parsed.node_text(operand) != package_alias {
        return None;
    }

    // Interpreted and raw string literals both count; Go treats both as string
    // basic literals.
    let path_argument = args[0];
    if path_argument.kind() != "interpreted_string_literal"
        && path_argument.kind() != "raw_string_literal"
    {
        return None;
    }

    // The literal text includes quotes on either end (e.g. "/health"); strip them.
    let quoted = parsed.node_text(path_argument);
    if quoted.len() < 2 {
        return None;
    }
    Some(quoted[1..quoted.len() - 1].to_string())
}
