use crate::front::ast::{FuncParam, PrimType};

impl PrimType {
    /// 对应的 LLVM 标量类型拼写
    pub fn ir(self) -> &'static str {
        match self {
            PrimType::Int => "i64",
            PrimType::Float => "double",
        }
    }

    /// 该类型的零值字面量（用于兜底 ret）
    pub fn zero(self) -> &'static str {
        match self {
            PrimType::Int => "0",
            PrimType::Float => "0.0",
        }
    }
}

/// minic 的语言类型：标量或一维数组，按结构相等比较
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Prim(PrimType),
    Array(PrimType),
}

impl Ty {
    pub fn ir(self) -> &'static str {
        match self {
            Ty::Prim(kind) => kind.ir(),
            Ty::Array(PrimType::Int) => "i64*",
            Ty::Array(PrimType::Float) => "double*",
        }
    }

    /// 元素类型；标量的元素就是自身
    pub fn elem(self) -> PrimType {
        match self {
            Ty::Prim(kind) | Ty::Array(kind) => kind,
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self, Ty::Array(_))
    }
}

/// 表达式求值结果：持有值的寄存器名 + 语言类型
#[derive(Debug, Clone)]
pub struct Value {
    pub reg: String,
    pub ty: Ty,
}

impl Value {
    pub fn new(reg: impl Into<String>, ty: Ty) -> Self {
        Self { reg: reg.into(), ty }
    }
}

/// 变量句柄：栈槽（或数组基址）的指针名 + 语言类型
#[derive(Debug, Clone)]
pub struct VarHandle {
    pub ptr: String,
    pub ty: Ty,
}

/// 函数签名：返回类型 + 形参声明，注册于全局函数表
#[derive(Debug, Clone)]
pub struct FuncSig {
    pub ret: PrimType,
    pub params: Vec<FuncParam>,
}

/// 把 f64 格式化成 LLVM 能接受的浮点字面量
/// LLVM 要求十进制形式必须带小数点（1.0e300 合法而 1e300 不合法）
pub fn format_double(v: f64) -> String {
    if !v.is_finite() {
        return format!("0x{:016X}", v.to_bits());
    }
    let s = format!("{:?}", v);
    if s.contains('e') && !s.contains('.') {
        if let Some(pos) = s.find('e') {
            return format!("{}.0{}", &s[..pos], &s[pos..]);
        }
    }
    s
}
