use super::{PrimType, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i64, Span),
    FloatLiteral(f64, Span),
    // 变量引用：由 LVal 产生
    LVal(LVal),
    UnaryOp(UnaryOp, Box<Expr>, Span),
    BinaryOp(BinaryOp, Box<Expr>, Box<Expr>, Span),
    RelOp(RelOp, Box<Expr>, Box<Expr>, Span),
    EqOp(EqOp, Box<Expr>, Box<Expr>, Span),
    LogicOp(LogicOp, Box<Expr>, Box<Expr>, Span),
    // 类型转换：(int)e / (float)e
    Cast(PrimType, Box<Expr>, Span),
    // 函数调用：函数名、参数列表、位置
    Call(String, Vec<Expr>, Span),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::IntLiteral(_, span) | Expr::FloatLiteral(_, span) => *span,
            Expr::LVal(lval) => lval.span,
            Expr::UnaryOp(_, _, span)
            | Expr::BinaryOp(_, _, _, span)
            | Expr::RelOp(_, _, _, span)
            | Expr::EqOp(_, _, _, span)
            | Expr::LogicOp(_, _, _, span)
            | Expr::Cast(_, _, span)
            | Expr::Call(_, _, span) => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Plus,   // +
    Minus,  // -
    Not,    // !
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelOp {
    Lt,   // <
    Gt,   // >
    Le,   // <=
    Ge,   // >=
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EqOp {
    Eq,   // ==
    Ne,   // !=
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicOp {
    And,  // &&
    Or,   // ||
}

// LVal ::= IDENT ["[" Exp "]"];
#[derive(Debug, Clone, PartialEq)]
pub struct LVal {
    pub name: String,
    pub index: Option<Box<Expr>>,  // 数组下标（最多一维）
    pub span: Span,
}
