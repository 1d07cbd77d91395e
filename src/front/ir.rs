pub mod context;
pub mod expr_ir;
pub mod stmt_ir;
pub mod types;

use crate::front::ast::*;
use crate::front::ir::expr_ir::*;
use crate::front::ir::stmt_ir::*;
use crate::front::ir::types::{format_double, FuncSig, Ty, Value, VarHandle};
use crate::CompilerError;
pub use crate::front::ir::context::IrContext;

pub trait GenerateIR {
    type Output;
    fn generate_ir(&self, ctx: &mut IrContext) -> Result<Self::Output, CompilerError>;
}

impl GenerateIR for CompUnit {
    type Output = ();

    fn generate_ir(&self, ctx: &mut IrContext) -> Result<Self::Output, CompilerError> {
        // 预先声明 C 运行库的 I/O 原型，用不用都注入
        ctx.emit_header("declare i32 @printf(i8*, ...)");
        ctx.emit_header("declare i32 @scanf(i8*, ...)");

        for func in &self.funcs {
            func.generate_ir(ctx)?;
        }
        Ok(())
    }
}

impl GenerateIR for FuncDef {
    type Output = ();

    fn generate_ir(&self, ctx: &mut IrContext) -> Result<Self::Output, CompilerError> {
        // 先注册签名再生成函数体，递归调用才查得到自己
        ctx.register_function(
            &self.name,
            FuncSig {
                ret: self.ty,
                params: self.params.clone(),
            },
            self.span,
        )?;

        let func_id = ctx.fresh_id();
        let param_list: Vec<String> = self
            .params
            .iter()
            .map(|p| {
                let ty = if p.is_array {
                    Ty::Array(p.ty)
                } else {
                    Ty::Prim(p.ty)
                };
                format!("{} %{}", ty.ir(), p.name)
            })
            .collect();
        ctx.emit(format!(
            "define {} @{}({}) {{",
            self.ty.ir(),
            self.name,
            param_list.join(", "),
        ));
        ctx.emit_label("entry");

        // 函数体是全新的根作用域，不继承调用方的变量
        ctx.push_scope();
        for param in &self.params {
            if param.is_array {
                // 数组形参直接按指针绑定，不落栈、不拷贝
                ctx.insert_var(
                    param.name.clone(),
                    VarHandle {
                        ptr: format!("%{}", param.name),
                        ty: Ty::Array(param.ty),
                    },
                    param.span,
                )?;
            } else {
                let ptr = format!("%ptr.{}.{}", param.name, func_id);
                ctx.emit(format!("{} = alloca {}", ptr, param.ty.ir()));
                ctx.emit(format!("store {} %{}, ptr {}", param.ty.ir(), param.name, ptr));
                ctx.insert_var(
                    param.name.clone(),
                    VarHandle {
                        ptr,
                        ty: Ty::Prim(param.ty),
                    },
                    param.span,
                )?;
            }
        }

        // 函数体的语句直接在形参作用域里求值，不再嵌套一层
        for item in &self.body {
            match item {
                BlockItem::Decl(decl) => decl.generate_ir(ctx)?,
                BlockItem::Stmt(stmt) => stmt.generate_ir(ctx)?,
            }
        }

        // 兜底返回零值，覆盖没有显式 return 的路径；
        // 最后一条指令已经终结时省略，避免块里出现双终结
        if !ctx.last_is_terminator() {
            ctx.emit(format!("ret {} {}", self.ty.ir(), self.ty.zero()));
        }
        ctx.close_label();
        ctx.emit("}");
        ctx.emit("");
        ctx.pop_scope()?;
        Ok(())
    }
}

impl GenerateIR for Stmt {
    type Output = ();

    fn generate_ir(&self, ctx: &mut IrContext) -> Result<Self::Output, CompilerError> {
        match self {
            Stmt::Return(expr, _) => generate_return_stmt_ir(expr, ctx),
            Stmt::Assign(lval, expr, _) => generate_assign_stmt_ir(lval, expr, ctx),
            Stmt::Block(block) => generate_block_stmt_ir(block, ctx),
            Stmt::If {
                cond,
                then_block,
                else_block,
                span,
            } => generate_if_stmt_ir(cond, then_block, else_block.as_ref(), *span, ctx),
            Stmt::While { cond, body, span } => generate_while_stmt_ir(cond, body, *span, ctx),
            Stmt::Printf { format, args, .. } => generate_printf_stmt_ir(format, args, ctx),
            Stmt::Scanf {
                format, targets, ..
            } => generate_scanf_stmt_ir(format, targets, ctx),
        }
    }
}

impl GenerateIR for Expr {
    type Output = Value;

    fn generate_ir(&self, ctx: &mut IrContext) -> Result<Self::Output, CompilerError> {
        match self {
            Expr::IntLiteral(n, _) => {
                let id = ctx.fresh_id();
                let reg = format!("%val.{}", id);
                ctx.emit(format!("{} = add i64 0, {}", reg, n));
                Ok(Value::new(reg, Ty::Prim(PrimType::Int)))
            }
            Expr::FloatLiteral(f, _) => {
                let id = ctx.fresh_id();
                let reg = format!("%val.{}", id);
                ctx.emit(format!("{} = fadd double 0.0, {}", reg, format_double(*f)));
                Ok(Value::new(reg, Ty::Prim(PrimType::Float)))
            }
            Expr::LVal(lval) => generate_lval_ir(lval, ctx),
            Expr::UnaryOp(op, expr, span) => generate_unary_op_ir(op, expr, *span, ctx),
            Expr::BinaryOp(op, lhs, rhs, span) => generate_binary_op_ir(op, lhs, rhs, *span, ctx),
            Expr::RelOp(op, lhs, rhs, _) => generate_rel_op_ir(op, lhs, rhs, ctx),
            Expr::EqOp(op, lhs, rhs, _) => generate_eq_op_ir(op, lhs, rhs, ctx),
            Expr::LogicOp(op, lhs, rhs, _) => generate_logic_op_ir(op, lhs, rhs, ctx),
            Expr::Cast(target, expr, span) => generate_cast_ir(*target, expr, *span, ctx),
            Expr::Call(name, args, span) => generate_call_ir(name, args, *span, ctx),
        }
    }
}

impl GenerateIR for VarDecl {
    type Output = ();

    fn generate_ir(&self, ctx: &mut IrContext) -> Result<Self::Output, CompilerError> {
        let id = ctx.fresh_id();
        let ptr = format!("%ptr.{}.{}", self.name, id);
        let ty = if self.is_array {
            Ty::Array(self.ty)
        } else {
            Ty::Prim(self.ty)
        };
        // 先登记进当前作用域，重名在这里被拒绝
        ctx.insert_var(
            self.name.clone(),
            VarHandle {
                ptr: ptr.clone(),
                ty,
            },
            self.span,
        )?;

        if self.is_array {
            if self.init.is_some() {
                return Err(ctx.error_at_span(
                    format!("Array `{}` cannot have an initializer", self.name),
                    self.span,
                ));
            }
            let size_expr = self.size.as_ref().ok_or_else(|| {
                ctx.error_at_span(
                    format!("Array `{}` declared without a size", self.name),
                    self.span,
                )
            })?;
            let size_val = size_expr.generate_ir(ctx)?;
            if size_val.ty != Ty::Prim(PrimType::Int) {
                return Err(
                    ctx.error_at_span("Array size must be an int expression", self.span)
                );
            }
            let raw_ptr = format!("%arrayptr.{}", id);
            ctx.emit(format!(
                "{} = alloca {}, i64 {}",
                raw_ptr,
                self.ty.ir(),
                size_val.reg,
            ));
            ctx.emit(format!(
                "{} = getelementptr {}, {}* {}, i64 0",
                ptr,
                self.ty.ir(),
                self.ty.ir(),
                raw_ptr,
            ));
        } else {
            ctx.emit(format!("{} = alloca {}", ptr, self.ty.ir()));
            if let Some(init) = &self.init {
                let val = init.generate_ir(ctx)?;
                // 初始化不做隐式提升，类型必须严格一致
                if val.ty != Ty::Prim(self.ty) {
                    return Err(ctx.error_at_span(
                        format!(
                            "Cannot initialize `{}` of type {} with a {} value",
                            self.name,
                            self.ty.ir(),
                            val.ty.ir(),
                        ),
                        self.span,
                    ));
                }
                ctx.emit(format!("store {} {}, ptr {}", self.ty.ir(), val.reg, ptr));
            }
        }
        Ok(())
    }
}
