use crate::front::ast::*;
use crate::front::ir::context::IrContext;
use crate::front::ir::types::{Ty, Value};
use crate::front::ir::GenerateIR;
use crate::CompilerError;

// 辅助函数：把 int 寄存器提升为 double
fn emit_int_to_float(val: &Value, id: u32, ctx: &mut IrContext) -> Value {
    let reg = format!("%conv.{}", id);
    ctx.emit(format!("{} = sitofp i64 {} to double", reg, val.reg));
    Value::new(reg, Ty::Prim(PrimType::Float))
}

// 辅助函数：算术/关系/逻辑运算都不接受数组运算数
fn reject_array_operand(val: &Value, span: Span, ctx: &IrContext) -> Result<(), CompilerError> {
    if val.ty.is_array() {
        return Err(ctx.error_at_span("Array value cannot be used as an operand", span));
    }
    Ok(())
}

// 辅助函数：int/float 混合时把 int 一侧隐式提升为 float
// 返回（可能被替换的）两侧值和公共标量类型
fn promote_pair(lhs: Value, rhs: Value, id: u32, ctx: &mut IrContext) -> (Value, Value, PrimType) {
    match (lhs.ty.elem(), rhs.ty.elem()) {
        (PrimType::Int, PrimType::Float) => {
            let lhs = emit_int_to_float(&lhs, id, ctx);
            (lhs, rhs, PrimType::Float)
        }
        (PrimType::Float, PrimType::Int) => {
            let rhs = emit_int_to_float(&rhs, id, ctx);
            (lhs, rhs, PrimType::Float)
        }
        (kind, _) => (lhs, rhs, kind),
    }
}

/// 左值作右值：标量 load 取值，数组整体按指针传递，带下标则取元素
pub fn generate_lval_ir(lval: &LVal, ctx: &mut IrContext) -> Result<Value, CompilerError> {
    let handle = ctx
        .lookup_var(&lval.name)
        .cloned()
        .ok_or_else(|| ctx.error_at_span(format!("Variable `{}` not found", lval.name), lval.span))?;

    match &lval.index {
        Some(index_expr) => {
            if !handle.ty.is_array() {
                return Err(ctx.error_at_span(
                    format!("Indexed access on non-array variable `{}`", lval.name),
                    lval.span,
                ));
            }
            let elem = handle.ty.elem();
            let index_val = index_expr.generate_ir(ctx)?;
            if index_val.ty != Ty::Prim(PrimType::Int) {
                return Err(ctx.error_at_span("Array index must be an int expression", lval.span));
            }
            let id = ctx.fresh_id();
            let ptr_reg = format!("%arrayPtr.{}", id);
            ctx.emit(format!(
                "{} = getelementptr {}, {} {}, i64 {}",
                ptr_reg,
                elem.ir(),
                handle.ty.ir(),
                handle.ptr,
                index_val.reg,
            ));
            let reg = format!("%var.{}", id);
            ctx.emit(format!("{} = load {}, ptr {}", reg, elem.ir(), ptr_reg));
            Ok(Value::new(reg, Ty::Prim(elem)))
        }
        None => {
            if handle.ty.is_array() {
                // 数组没有整体取值：直接把基址指针向上传
                return Ok(Value::new(handle.ptr, handle.ty));
            }
            let id = ctx.fresh_id();
            let reg = format!("%var.{}", id);
            ctx.emit(format!("{} = load {}, ptr {}", reg, handle.ty.ir(), handle.ptr));
            Ok(Value::new(reg, handle.ty))
        }
    }
}

pub fn generate_unary_op_ir(
    op: &UnaryOp,
    expr: &Expr,
    span: Span,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let operand = expr.generate_ir(ctx)?;
    reject_array_operand(&operand, span, ctx)?;
    match op {
        UnaryOp::Plus => Ok(operand),
        UnaryOp::Minus => {
            let id = ctx.fresh_id();
            let reg = format!("%unOp.{}", id);
            match operand.ty.elem() {
                PrimType::Int => ctx.emit(format!("{} = sub i64 0, {}", reg, operand.reg)),
                PrimType::Float => ctx.emit(format!("{} = fsub double 0.0, {}", reg, operand.reg)),
            }
            Ok(Value::new(reg, operand.ty))
        }
        UnaryOp::Not => {
            if operand.ty != Ty::Prim(PrimType::Int) {
                return Err(ctx.error_at_span("Logical operator `!` requires an int operand", span));
            }
            let id = ctx.fresh_id();
            let cmp_reg = format!("%boolIsZero.{}", id);
            ctx.emit(format!("{} = icmp eq i64 {}, 0", cmp_reg, operand.reg));
            let reg = format!("%boolUnOp.{}", id);
            ctx.emit(format!("{} = zext i1 {} to i64", reg, cmp_reg));
            Ok(Value::new(reg, Ty::Prim(PrimType::Int)))
        }
    }
}

pub fn generate_binary_op_ir(
    op: &BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    span: Span,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let lval = lhs.generate_ir(ctx)?;
    let rval = rhs.generate_ir(ctx)?;
    reject_array_operand(&lval, lhs.span(), ctx)?;
    reject_array_operand(&rval, rhs.span(), ctx)?;
    let id = ctx.fresh_id();
    let (lval, rval, kind) = promote_pair(lval, rval, id, ctx);
    let mnemonic = match (op, kind) {
        (BinaryOp::Add, PrimType::Int) => "add",
        (BinaryOp::Sub, PrimType::Int) => "sub",
        (BinaryOp::Mul, PrimType::Int) => "mul",
        (BinaryOp::Div, PrimType::Int) => "sdiv",
        (BinaryOp::Mod, PrimType::Int) => "srem",
        (BinaryOp::Add, PrimType::Float) => "fadd",
        (BinaryOp::Sub, PrimType::Float) => "fsub",
        (BinaryOp::Mul, PrimType::Float) => "fmul",
        (BinaryOp::Div, PrimType::Float) => "fdiv",
        (BinaryOp::Mod, PrimType::Float) => {
            return Err(ctx.error_at_span("Operator `%` is not supported on float operands", span));
        }
    };
    let reg = format!("%binOp.{}", id);
    ctx.emit(format!(
        "{} = {} {} {}, {}",
        reg,
        mnemonic,
        kind.ir(),
        lval.reg,
        rval.reg,
    ));
    Ok(Value::new(reg, Ty::Prim(kind)))
}

// 辅助函数：比较运算的公共路径，icmp/fcmp 后 zext 回 i64
fn emit_compare(
    int_pred: &str,
    float_pred: &str,
    lhs: &Expr,
    rhs: &Expr,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let lval = lhs.generate_ir(ctx)?;
    let rval = rhs.generate_ir(ctx)?;
    reject_array_operand(&lval, lhs.span(), ctx)?;
    reject_array_operand(&rval, rhs.span(), ctx)?;
    let id = ctx.fresh_id();
    let (lval, rval, kind) = promote_pair(lval, rval, id, ctx);
    let cmp_reg = format!("%temp.{}", id);
    match kind {
        PrimType::Int => ctx.emit(format!(
            "{} = icmp {} i64 {}, {}",
            cmp_reg, int_pred, lval.reg, rval.reg,
        )),
        PrimType::Float => ctx.emit(format!(
            "{} = fcmp {} double {}, {}",
            cmp_reg, float_pred, lval.reg, rval.reg,
        )),
    }
    let reg = format!("%relOp.{}", id);
    ctx.emit(format!("{} = zext i1 {} to i64", reg, cmp_reg));
    Ok(Value::new(reg, Ty::Prim(PrimType::Int)))
}

pub fn generate_rel_op_ir(
    op: &RelOp,
    lhs: &Expr,
    rhs: &Expr,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let (int_pred, float_pred) = match op {
        RelOp::Lt => ("slt", "olt"),
        RelOp::Gt => ("sgt", "ogt"),
        RelOp::Le => ("sle", "ole"),
        RelOp::Ge => ("sge", "oge"),
    };
    emit_compare(int_pred, float_pred, lhs, rhs, ctx)
}

pub fn generate_eq_op_ir(
    op: &EqOp,
    lhs: &Expr,
    rhs: &Expr,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let (int_pred, float_pred) = match op {
        EqOp::Eq => ("eq", "oeq"),
        EqOp::Ne => ("ne", "one"),
    };
    emit_compare(int_pred, float_pred, lhs, rhs, ctx)
}

/// 逻辑与/或：本语言不短路，两侧总是按源码顺序求值
/// 结果归一化成 0/1 的 i64
pub fn generate_logic_op_ir(
    op: &LogicOp,
    lhs: &Expr,
    rhs: &Expr,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let lval = lhs.generate_ir(ctx)?;
    let rval = rhs.generate_ir(ctx)?;
    for (val, expr) in [(&lval, lhs), (&rval, rhs)] {
        reject_array_operand(val, expr.span(), ctx)?;
        if val.ty != Ty::Prim(PrimType::Int) {
            return Err(ctx.error_at_span("Logical operator requires int operands", expr.span()));
        }
    }
    let id = ctx.fresh_id();
    let word = match op {
        LogicOp::And => "and",
        LogicOp::Or => "or",
    };
    let and_reg = format!("%and.{}", id);
    ctx.emit(format!("{} = {} i64 {}, {}", and_reg, word, lval.reg, rval.reg));
    let logic_reg = format!("%logic.{}", id);
    ctx.emit(format!("{} = icmp ne i64 {}, 0", logic_reg, and_reg));
    let reg = format!("%boolBinOp.{}", id);
    ctx.emit(format!("{} = zext i1 {} to i64", reg, logic_reg));
    Ok(Value::new(reg, Ty::Prim(PrimType::Int)))
}

pub fn generate_cast_ir(
    target: PrimType,
    expr: &Expr,
    span: Span,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let operand = expr.generate_ir(ctx)?;
    if operand.ty.is_array() {
        return Err(ctx.error_at_span("Array value cannot be cast", span));
    }
    // 目标类型相同则是无操作
    if operand.ty.elem() == target {
        return Ok(operand);
    }
    let id = ctx.fresh_id();
    let reg = format!("%conv.{}", id);
    match target {
        PrimType::Float => ctx.emit(format!("{} = sitofp i64 {} to double", reg, operand.reg)),
        PrimType::Int => ctx.emit(format!("{} = fptosi double {} to i64", reg, operand.reg)),
    }
    Ok(Value::new(reg, Ty::Prim(target)))
}

pub fn generate_call_ir(
    name: &str,
    args: &[Expr],
    span: Span,
    ctx: &mut IrContext,
) -> Result<Value, CompilerError> {
    let sig = ctx
        .lookup_function(name)
        .cloned()
        .ok_or_else(|| ctx.error_at_span(format!("Function `{}` not found", name), span))?;
    if args.len() != sig.params.len() {
        return Err(ctx.error_at_span(
            format!(
                "Function `{}` expects {} argument(s), got {}",
                name,
                sig.params.len(),
                args.len(),
            ),
            span,
        ));
    }
    // 实参按源码顺序求值；类型必须和形参完全一致，没有隐式提升
    let mut pieces = Vec::with_capacity(args.len());
    for (arg, param) in args.iter().zip(&sig.params) {
        let val = arg.generate_ir(ctx)?;
        let expected = if param.is_array {
            Ty::Array(param.ty)
        } else {
            Ty::Prim(param.ty)
        };
        if val.ty != expected {
            return Err(ctx.error_at_span(
                format!(
                    "Argument `{}` of `{}` expects type {}, got {}",
                    param.name,
                    name,
                    expected.ir(),
                    val.ty.ir(),
                ),
                arg.span(),
            ));
        }
        pieces.push(format!("{} {}", val.ty.ir(), val.reg));
    }
    let id = ctx.fresh_id();
    let reg = format!("%call.{}", id);
    ctx.emit(format!(
        "{} = call {} @{}({})",
        reg,
        sig.ret.ir(),
        name,
        pieces.join(", "),
    ));
    Ok(Value::new(reg, Ty::Prim(sig.ret)))
}
