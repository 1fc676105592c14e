//! Declaration parsing.

mod common;
use common::*;

#[test]
fn test_import() {
    let source = "import core.math\n";
    let parse = parse_file(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    assert_eq!(top_level_kinds(&parse), vec![SyntaxKind::ImportDecl]);

    let qualified = find_node(&parse, SyntaxKind::QualifiedName).unwrap();
    assert_eq!(qualified.text().to_string().trim(), "core.math");
}

#[test]
fn test_import_single_segment() {
    let parse = parse_file("import io");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
}

#[test]
fn test_let_with_type_and_initializer() {
    let source = "let x: Int = 1\n";
    let parse = parse_file(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    let decl = find_node(&parse, SyntaxKind::VarDecl).unwrap();
    assert_eq!(
        child_kinds(&decl),
        vec![SyntaxKind::Name, SyntaxKind::TypeRef, SyntaxKind::Literal]
    );
}

#[test]
fn test_let_without_type() {
    let parse = parse_file("let x = 1");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
}

#[test]
fn test_var_without_initializer() {
    let parse = parse_file("var y: Int");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
}

#[test]
fn test_fun_with_params_and_return_type() {
    let source = "fun add(a: Int, b: Int): Int {\n    return a + b\n}\n";
    let parse = parse_file(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    assert_eq!(top_level_kinds(&parse), vec![SyntaxKind::FunDecl]);

    let params = find_node(&parse, SyntaxKind::ParamList).unwrap();
    assert_eq!(
        child_kinds(&params),
        vec![SyntaxKind::Param, SyntaxKind::Param]
    );
    assert_lossless(source, &parse);
}

#[test]
fn test_fun_with_expression_body() {
    let source = "fun double(x: Int): Int = x * 2\n";
    let parse = parse_file(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    assert!(find_node(&parse, SyntaxKind::BinaryExpr).is_some());
}

#[test]
fn test_fun_without_params() {
    let parse = parse_file("fun main() {\n}\n");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
}

#[test]
fn test_class_with_params_and_body() {
    let source = "\
class Point(x: Int, y: Int) {
    fun norm(): Int {
        return x * x + y * y
    }
}
";
    let parse = parse_file(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    assert_eq!(top_level_kinds(&parse), vec![SyntaxKind::ClassDecl]);

    let body = find_node(&parse, SyntaxKind::ClassBody).unwrap();
    assert_eq!(child_kinds(&body), vec![SyntaxKind::FunDecl]);
    assert_lossless(source, &parse);
}

#[test]
fn test_class_without_body() {
    let parse = parse_file("class Marker\n");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
}

#[test]
fn test_class_members_mix() {
    let source = "\
class Counter {
    var count: Int = 0

    fun next(): Int {
        count = count + 1
        return count
    }
}
";
    let parse = parse_file(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    let body = find_node(&parse, SyntaxKind::ClassBody).unwrap();
    assert_eq!(
        child_kinds(&body),
        vec![SyntaxKind::VarDecl, SyntaxKind::FunDecl]
    );
}

#[test]
fn test_qualified_type_reference() {
    let parse = parse_file("let x: core.time.Instant = now()\n");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    let type_ref = find_node(&parse, SyntaxKind::TypeRef).unwrap();
    assert_eq!(type_ref.text().to_string().trim(), "core.time.Instant");
}

#[test]
fn test_param_without_type_is_error() {
    let parse = parse_file("fun f(x) {}\n");
    assert!(!parse.ok());
    assert!(parse
        .errors()
        .iter()
        .any(|error| error.message.contains("parameter type")));
}

#[test]
fn test_fun_without_body_is_error() {
    let parse = parse_file("fun f()\n");
    assert!(!parse.ok());
}

#[test]
fn test_declarations_separated_by_semicolons() {
    let parse = parse_file("let x = 1; let y = 2; fun f() {}");
    assert!(parse.ok(), "errors: {:?}", parse.errors());
    assert_eq!(
        top_level_kinds(&parse),
        vec![
            SyntaxKind::VarDecl,
            SyntaxKind::VarDecl,
            SyntaxKind::FunDecl,
        ]
    );
}
