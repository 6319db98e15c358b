/// AST (Abstract Syntax Tree) module
/// Contains the expression shapes a parser builds from the token stream
///
/// Submodules:
/// - ast: The `Expr` sum type and its variant tags
/// - expressions: The node structs carried by each variant
pub mod ast;
pub mod expressions;
