use crate::front::ast::*;
use crate::front::ir::context::IrContext;
use crate::front::ir::types::Ty;
use crate::front::ir::GenerateIR;
use crate::CompilerError;

pub fn generate_return_stmt_ir(expr: &Expr, ctx: &mut IrContext) -> Result<(), CompilerError> {
    let val = expr.generate_ir(ctx)?;
    ctx.emit(format!("ret {} {}", val.ty.ir(), val.reg));
    Ok(())
}

pub fn generate_assign_stmt_ir(
    lval: &LVal,
    expr: &Expr,
    ctx: &mut IrContext,
) -> Result<(), CompilerError> {
    let handle = ctx
        .lookup_var(&lval.name)
        .cloned()
        .ok_or_else(|| ctx.error_at_span(format!("Variable `{}` not found", lval.name), lval.span))?;
    let rhs = expr.generate_ir(ctx)?;

    match &lval.index {
        None => {
            if handle.ty.is_array() {
                return Err(ctx.error_at_span(
                    format!("Cannot assign to array `{}` without an index", lval.name),
                    lval.span,
                ));
            }
            if rhs.ty != handle.ty {
                return Err(ctx.error_at_span(
                    format!(
                        "Cannot assign a {} value to `{}` of type {}",
                        rhs.ty.ir(),
                        lval.name,
                        handle.ty.ir(),
                    ),
                    lval.span,
                ));
            }
            ctx.emit(format!("store {} {}, ptr {}", handle.ty.ir(), rhs.reg, handle.ptr));
        }
        Some(index_expr) => {
            if !handle.ty.is_array() {
                return Err(ctx.error_at_span(
                    format!("Indexed access on non-array variable `{}`", lval.name),
                    lval.span,
                ));
            }
            let elem = handle.ty.elem();
            // 下标只在这里求值一次，直接服务于 store 的地址计算
            let index_val = index_expr.generate_ir(ctx)?;
            if index_val.ty != Ty::Prim(PrimType::Int) {
                return Err(ctx.error_at_span("Array index must be an int expression", lval.span));
            }
            if rhs.ty != Ty::Prim(elem) {
                return Err(ctx.error_at_span(
                    format!(
                        "Cannot store a {} value into `{}` of element type {}",
                        rhs.ty.ir(),
                        lval.name,
                        elem.ir(),
                    ),
                    lval.span,
                ));
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
            ctx.emit(format!("store {} {}, ptr {}", elem.ir(), rhs.reg, ptr_reg));
        }
    }
    Ok(())
}

pub fn generate_block_stmt_ir(block: &Block, ctx: &mut IrContext) -> Result<(), CompilerError> {
    ctx.push_scope();
    for item in block {
        match item {
            BlockItem::Decl(decl) => decl.generate_ir(ctx)?,
            BlockItem::Stmt(stmt) => stmt.generate_ir(ctx)?,
        }
    }
    ctx.pop_scope()?;
    Ok(())
}

pub fn generate_if_stmt_ir(
    cond: &Expr,
    then_block: &Block,
    else_block: Option<&Block>,
    span: Span,
    ctx: &mut IrContext,
) -> Result<(), CompilerError> {
    let cond_val = cond.generate_ir(ctx)?;
    if cond_val.ty != Ty::Prim(PrimType::Int) {
        return Err(ctx.error_at_span("Condition must be an int expression", span));
    }
    let id = ctx.fresh_id();
    let cast_reg = format!("%conditionCast.{}", id);
    ctx.emit(format!("{} = icmp ne i64 {}, 0", cast_reg, cond_val.reg));
    ctx.emit(format!(
        "br i1 {}, label %then.{}, label %else.{}",
        cast_reg, id, id,
    ));

    // then 分支
    ctx.emit_label(format!("then.{}", id));
    generate_block_stmt_ir(then_block, ctx)?;
    ctx.branch_if_open(&format!("end.{}", id));
    ctx.close_label();

    // else 分支；没有 else 时标签照发，落空直接汇入 end
    ctx.emit_label(format!("else.{}", id));
    if let Some(else_block) = else_block {
        generate_block_stmt_ir(else_block, ctx)?;
    }
    ctx.branch_if_open(&format!("end.{}", id));
    ctx.close_label();

    ctx.emit(format!("end.{}:", id));
    Ok(())
}

pub fn generate_while_stmt_ir(
    cond: &Expr,
    body: &Block,
    span: Span,
    ctx: &mut IrContext,
) -> Result<(), CompilerError> {
    let id = ctx.fresh_id();
    ctx.emit(format!("br label %while.{}", id));

    // 条件块：每轮循环都重新求值条件表达式
    ctx.emit_label(format!("while.{}", id));
    let cond_val = cond.generate_ir(ctx)?;
    if cond_val.ty != Ty::Prim(PrimType::Int) {
        return Err(ctx.error_at_span("Condition must be an int expression", span));
    }
    let cast_reg = format!("%conditionCast.{}", id);
    ctx.emit(format!("{} = icmp ne i64 {}, 0", cast_reg, cond_val.reg));
    ctx.emit(format!(
        "br i1 {}, label %block.{}, label %end.{}",
        cast_reg, id, id,
    ));
    ctx.close_label();

    // 循环体块：体内无终结时跳回条件块
    ctx.emit_label(format!("block.{}", id));
    generate_block_stmt_ir(body, ctx)?;
    ctx.branch_if_open(&format!("while.{}", id));
    ctx.close_label();

    ctx.emit(format!("end.{}:", id));
    Ok(())
}

pub fn generate_printf_stmt_ir(
    format: &str,
    args: &[Expr],
    ctx: &mut IrContext,
) -> Result<(), CompilerError> {
    let fmt_global = ctx.intern_string(format);
    // 操作数不做类型限制，解释权在格式串
    let mut pieces = vec![format!("i8* {}", fmt_global)];
    for arg in args {
        let val = arg.generate_ir(ctx)?;
        pieces.push(format!("{} {}", val.ty.ir(), val.reg));
    }
    ctx.emit(format!("call i32 (i8*, ...) @printf({})", pieces.join(", ")));
    Ok(())
}

pub fn generate_scanf_stmt_ir(
    format: &str,
    targets: &[LVal],
    ctx: &mut IrContext,
) -> Result<(), CompilerError> {
    let fmt_global = ctx.intern_string(format);
    let mut pieces = vec![format!("i8* {}", fmt_global)];
    for target in targets {
        let (ptr, kind) = resolve_scan_target(target, ctx)?;
        pieces.push(format!("{}* {}", kind.ir(), ptr));
    }
    ctx.emit(format!("call i32 (i8*, ...) @scanf({})", pieces.join(", ")));
    Ok(())
}

// 辅助函数：解析 scanf 目标左值，返回可写入的指针和元素类型
// 数组必须带下标，标量必须不带
fn resolve_scan_target(
    lval: &LVal,
    ctx: &mut IrContext,
) -> Result<(String, PrimType), CompilerError> {
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
            Ok((ptr_reg, elem))
        }
        None => {
            if handle.ty.is_array() {
                return Err(ctx.error_at_span(
                    format!("Cannot scan into array `{}` without an index", lval.name),
                    lval.span,
                ));
            }
            Ok((handle.ptr, handle.ty.elem()))
        }
    }
}
