use super::{Block, PrimType, Span};

// FuncParam ::= PrimType IDENT | PrimType "[" "]" IDENT;
#[derive(Debug, Clone, PartialEq)]
pub struct FuncParam {
    pub ty: PrimType,
    pub name: String,
    pub is_array: bool,
    pub span: Span,
}

// FuncDef ::= PrimType IDENT "(" [FuncParam {"," FuncParam}] ")" Block;
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub ty: PrimType,
    pub name: String,
    pub params: Vec<FuncParam>,
    pub body: Block,
    pub span: Span,
}

// CompUnit ::= {FuncDef};
#[derive(Debug, Clone, PartialEq)]
pub struct CompUnit {
    pub funcs: Vec<FuncDef>,
}
