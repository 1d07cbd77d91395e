use crate::front::ast::CompUnit;
use crate::front::ir::{GenerateIR, IrContext};
use crate::utils::SourceMap;
use crate::CompilerError;

pub mod ast;
pub mod ir;

/// 把整棵语法树降级为一段文本 LLVM IR
pub fn generate_ir(ast: &CompUnit, source_map: Option<SourceMap>) -> Result<String, CompilerError> {
    let mut ctx = IrContext::new(source_map);
    ast.generate_ir(&mut ctx)?;
    Ok(ctx.finish())
}
