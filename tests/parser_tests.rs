use minicc::front::ast::*;
use minicc::minic::{CompUnitParser, ExprParser};

fn parse(source: &str) -> CompUnit {
    CompUnitParser::new()
        .parse(source)
        .expect("parse should succeed")
}

fn parse_expr(source: &str) -> Expr {
    ExprParser::new()
        .parse(source)
        .expect("expression should parse")
}

#[test]
fn parses_function_definition() {
    let unit = parse("int main() { return 0; }");
    assert_eq!(unit.funcs.len(), 1);
    let func = &unit.funcs[0];
    assert_eq!(func.name, "main");
    assert_eq!(func.ty, PrimType::Int);
    assert!(func.params.is_empty());
    assert_eq!(func.body.len(), 1);
}

#[test]
fn parses_scalar_and_array_parameters() {
    let unit = parse("float mix(int n, float[] xs) { return 0.0; }");
    let params = &unit.funcs[0].params;
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "n");
    assert!(!params[0].is_array);
    assert_eq!(params[1].name, "xs");
    assert_eq!(params[1].ty, PrimType::Float);
    assert!(params[1].is_array);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    match parse_expr("1 + 2 * 3") {
        Expr::BinaryOp(BinaryOp::Add, lhs, rhs, _) => {
            assert!(matches!(*lhs, Expr::IntLiteral(1, _)));
            assert!(matches!(*rhs, Expr::BinaryOp(BinaryOp::Mul, _, _, _)));
        }
        other => panic!("unexpected parse: {:?}", other),
    }
}

#[test]
fn relational_binds_tighter_than_equality() {
    match parse_expr("1 == 2 < 3") {
        Expr::EqOp(EqOp::Eq, lhs, rhs, _) => {
            assert!(matches!(*lhs, Expr::IntLiteral(1, _)));
            assert!(matches!(*rhs, Expr::RelOp(RelOp::Lt, _, _, _)));
        }
        other => panic!("unexpected parse: {:?}", other),
    }
}

#[test]
fn logical_and_binds_tighter_than_or() {
    match parse_expr("1 || 2 && 3") {
        Expr::LogicOp(LogicOp::Or, lhs, rhs, _) => {
            assert!(matches!(*lhs, Expr::IntLiteral(1, _)));
            assert!(matches!(*rhs, Expr::LogicOp(LogicOp::And, _, _, _)));
        }
        other => panic!("unexpected parse: {:?}", other),
    }
}

#[test]
fn cast_applies_to_the_unary_operand_only() {
    match parse_expr("(int)x + 1") {
        Expr::BinaryOp(BinaryOp::Add, lhs, _, _) => {
            assert!(matches!(*lhs, Expr::Cast(PrimType::Int, _, _)));
        }
        other => panic!("unexpected parse: {:?}", other),
    }
}

#[test]
fn unary_minus_binds_tighter_than_multiplication() {
    match parse_expr("-x * 2") {
        Expr::BinaryOp(BinaryOp::Mul, lhs, _, _) => {
            assert!(matches!(*lhs, Expr::UnaryOp(UnaryOp::Minus, _, _)));
        }
        other => panic!("unexpected parse: {:?}", other),
    }
}

#[test]
fn call_and_variable_reference_are_distinct() {
    assert!(matches!(parse_expr("f(1)"), Expr::Call(_, _, _)));
    assert!(matches!(parse_expr("f"), Expr::LVal(_)));
    match parse_expr("a[3]") {
        Expr::LVal(lval) => {
            assert_eq!(lval.name, "a");
            assert!(lval.index.is_some());
        }
        other => panic!("unexpected parse: {:?}", other),
    }
}

#[test]
fn parses_array_declaration_with_and_without_size() {
    let unit = parse("int main() { int[3] a; float[] b; }");
    let decls: Vec<&VarDecl> = unit.funcs[0]
        .body
        .iter()
        .map(|item| match item {
            BlockItem::Decl(decl) => decl,
            other => panic!("expected declaration, got {:?}", other),
        })
        .collect();
    assert!(decls[0].is_array);
    assert!(decls[0].size.is_some());
    assert!(decls[1].is_array);
    assert!(decls[1].size.is_none());
}

#[test]
fn string_escapes_are_decoded() {
    let unit = parse(r#"int main() { printf("a\nb\"c"); }"#);
    match &unit.funcs[0].body[0] {
        BlockItem::Stmt(Stmt::Printf { format, args, .. }) => {
            assert_eq!(format, "a\nb\"c");
            assert!(args.is_empty());
        }
        other => panic!("expected printf, got {:?}", other),
    }
}

#[test]
fn float_literals_parse_as_doubles() {
    assert!(matches!(parse_expr("1.5"), Expr::FloatLiteral(f, _) if f == 1.5));
    assert!(matches!(parse_expr("2."), Expr::FloatLiteral(f, _) if f == 2.0));
    assert!(matches!(parse_expr("7"), Expr::IntLiteral(7, _)));
}

#[test]
fn comments_are_skipped() {
    let unit = parse(
        "// 行注释\n\
         int main() { /* 块注释 */ return 0; }",
    );
    assert_eq!(unit.funcs.len(), 1);
}

#[test]
fn nested_if_else_attaches_by_braces() {
    let unit = parse("int main() { if (1) { if (2) { } } else { } return 0; }");
    match &unit.funcs[0].body[0] {
        BlockItem::Stmt(Stmt::If {
            then_block,
            else_block,
            ..
        }) => {
            assert_eq!(then_block.len(), 1);
            assert!(else_block.is_some());
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn scanf_targets_are_lvalues() {
    let unit = parse(r#"int main() { int x; int[2] a; scanf("%d %d", x, a[1]); }"#);
    match &unit.funcs[0].body[2] {
        BlockItem::Stmt(Stmt::Scanf { targets, .. }) => {
            assert_eq!(targets.len(), 2);
            assert!(targets[0].index.is_none());
            assert!(targets[1].index.is_some());
        }
        other => panic!("expected scanf, got {:?}", other),
    }
}

#[test]
fn rejects_malformed_input() {
    assert!(CompUnitParser::new().parse("int main( { }").is_err());
    assert!(CompUnitParser::new().parse("int main() { return 1 }").is_err());
    assert!(ExprParser::new().parse("1 +").is_err());
}

#[test]
fn rejects_out_of_range_integer_literal() {
    assert!(ExprParser::new().parse("99999999999999999999").is_err());
}
