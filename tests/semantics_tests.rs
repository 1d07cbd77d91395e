use minicc::front::generate_ir;
use minicc::minic::CompUnitParser;
use minicc::utils::SourceMap;
use minicc::CompilerError;

fn compile_err(source: &str) -> String {
    let ast = CompUnitParser::new()
        .parse(source)
        .expect("parse should succeed");
    match generate_ir(&ast, Some(SourceMap::new(source))) {
        Ok(ir) => panic!("expected a semantic error, got IR:\n{}", ir),
        Err(e) => {
            assert!(
                matches!(e, CompilerError::IrGeneration(_)),
                "expected an IR generation error, got: {:?}",
                e
            );
            e.to_string()
        }
    }
}

#[test]
fn rejects_undefined_variable() {
    let msg = compile_err("int main() { return y; }");
    assert!(msg.contains("Variable `y` not found"), "got: {}", msg);
}

#[test]
fn rejects_duplicate_variable_in_same_scope() {
    let msg = compile_err("int main() { int x; int x; return 0; }");
    assert!(
        msg.contains("Variable `x` already declared in this scope"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_duplicate_function() {
    let msg = compile_err("int f() { return 0; } int f() { return 1; }");
    assert!(msg.contains("Function `f` already declared"), "got: {}", msg);
}

#[test]
fn rejects_undefined_function() {
    let msg = compile_err("int main() { return g(); }");
    assert!(msg.contains("Function `g` not found"), "got: {}", msg);
}

#[test]
fn functions_must_be_defined_before_use() {
    // 函数在各自定义求值时注册，调用后文定义的函数查不到
    let msg = compile_err("int main() { return later(); } int later() { return 1; }");
    assert!(msg.contains("Function `later` not found"), "got: {}", msg);
}

#[test]
fn rejects_wrong_argument_count() {
    let msg = compile_err("int f(int x) { return x; } int main() { return f(); }");
    assert!(
        msg.contains("Function `f` expects 1 argument(s), got 0"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_argument_type_mismatch() {
    let msg = compile_err("int f(int x) { return x; } int main() { return f(1.5); }");
    assert!(
        msg.contains("Argument `x` of `f` expects type i64, got double"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_assignment_type_mismatch() {
    let msg = compile_err("int main() { int x; x = 1.5; return x; }");
    assert!(
        msg.contains("Cannot assign a double value to `x` of type i64"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_initializer_type_mismatch() {
    // 初始化和赋值一样不做隐式提升
    let msg = compile_err("int main() { int x = 1.5; return x; }");
    assert!(
        msg.contains("Cannot initialize `x` of type i64 with a double value"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_indexing_a_scalar() {
    let msg = compile_err("int main() { int x; return x[0]; }");
    assert!(
        msg.contains("Indexed access on non-array variable `x`"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_assigning_through_a_scalar_index() {
    let msg = compile_err("int main() { int x; x[0] = 1; return 0; }");
    assert!(
        msg.contains("Indexed access on non-array variable `x`"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_whole_array_assignment() {
    let msg = compile_err("int main() { int[2] a; a = 1; return 0; }");
    assert!(
        msg.contains("Cannot assign to array `a` without an index"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_scanning_a_whole_array() {
    let msg = compile_err(r#"int main() { int[2] a; scanf("%d", a); return 0; }"#);
    assert!(
        msg.contains("Cannot scan into array `a` without an index"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_non_int_array_index() {
    let msg = compile_err("int main() { int[2] a; a[1.5] = 1; return 0; }");
    assert!(
        msg.contains("Array index must be an int expression"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_non_int_if_condition() {
    let msg = compile_err("int main() { if (1.5) { } return 0; }");
    assert!(
        msg.contains("Condition must be an int expression"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_non_int_while_condition() {
    let msg = compile_err("int main() { while (1.5) { } return 0; }");
    assert!(
        msg.contains("Condition must be an int expression"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_non_int_logical_operands() {
    let msg = compile_err("int main() { return 1 && 1.5; }");
    assert!(
        msg.contains("Logical operator requires int operands"),
        "got: {}",
        msg
    );
    let msg = compile_err("int main() { return !1.5; }");
    assert!(
        msg.contains("Logical operator `!` requires an int operand"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_array_operands_in_arithmetic() {
    let msg = compile_err("int main() { int[2] a; return a + 1; }");
    assert!(
        msg.contains("Array value cannot be used as an operand"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_array_operands_in_comparisons() {
    let msg = compile_err("int main() { int[2] a; return a < 1; }");
    assert!(
        msg.contains("Array value cannot be used as an operand"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_array_cast() {
    let msg = compile_err("int main() { int[2] a; return (int)a; }");
    assert!(msg.contains("Array value cannot be cast"), "got: {}", msg);
}

#[test]
fn rejects_array_without_size() {
    let msg = compile_err("int main() { int[] a; return 0; }");
    assert!(
        msg.contains("Array `a` declared without a size"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_non_int_array_size() {
    let msg = compile_err("int main() { int[1.5] a; return 0; }");
    assert!(
        msg.contains("Array size must be an int expression"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_array_initializer() {
    let msg = compile_err("int main() { int[2] a = 5; return 0; }");
    assert!(
        msg.contains("Array `a` cannot have an initializer"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_float_modulo() {
    let msg = compile_err("int main() { return (int)(1.5 % 2.0); }");
    assert!(
        msg.contains("Operator `%` is not supported on float operands"),
        "got: {}",
        msg
    );
}

#[test]
fn rejects_duplicate_parameter_names() {
    let msg = compile_err("int f(int a, int a) { return 0; }");
    assert!(
        msg.contains("Variable `a` already declared in this scope"),
        "got: {}",
        msg
    );
}

#[test]
fn locals_share_the_parameter_scope() {
    // 函数体不再额外嵌套作用域，和形参重名直接报重复声明
    let msg = compile_err("int f(int a) { int a; return 0; }");
    assert!(
        msg.contains("Variable `a` already declared in this scope"),
        "got: {}",
        msg
    );
}

#[test]
fn block_scope_ends_at_closing_brace() {
    let msg = compile_err("int main() { { int y = 1; } return y; }");
    assert!(msg.contains("Variable `y` not found"), "got: {}", msg);
}

#[test]
fn errors_carry_source_locations() {
    let msg = compile_err("int main() {\n  return missing;\n}");
    assert!(msg.contains("line 2"), "got: {}", msg);
}
