use super::{Expr, LVal, Span, VarDecl};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    // "return" Exp ";"
    Return(Expr, Span),
    // LVal "=" Exp ";"
    Assign(LVal, Expr, Span),
    // Block
    Block(Block),
    // "if" "(" Exp ")" Block ["else" Block]
    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
        span: Span,
    },
    // "while" "(" Exp ")" Block
    While {
        cond: Expr,
        body: Block,
        span: Span,
    },
    // "printf" "(" STRING {"," Exp} ")" ";"
    Printf {
        format: String,
        args: Vec<Expr>,
        span: Span,
    },
    // "scanf" "(" STRING {"," LVal} ")" ";"
    Scanf {
        format: String,
        targets: Vec<LVal>,
        span: Span,
    },
}

// BlockItem ::= VarDecl | Stmt;
#[derive(Debug, Clone, PartialEq)]
pub enum BlockItem {
    Decl(VarDecl),
    Stmt(Stmt),
}

// Block ::= "{" {BlockItem} "}";
pub type Block = Vec<BlockItem>;
