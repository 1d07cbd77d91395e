use super::{Expr, Span};

// PrimType ::= "int" | "float";
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimType {
    Int,
    Float,
}

// VarDecl ::= PrimType IDENT ["=" Exp] ";"
//           | PrimType "[" [Exp] "]" IDENT ["=" Exp] ";";
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: PrimType,
    pub name: String,
    pub is_array: bool,
    // 数组长度表达式；数组声明缺省时在语义检查阶段报错
    pub size: Option<Expr>,
    pub init: Option<Expr>,
    pub span: Span,
}
