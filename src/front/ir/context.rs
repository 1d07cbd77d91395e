use std::collections::HashMap;

use crate::front::ast::Span;
use crate::front::ir::types::{FuncSig, VarHandle};
use crate::utils::SourceMap;
use crate::CompilerError;

/// 单次编译的全部状态：IR 缓冲区、计数器、符号表
/// 每次编译新建一个上下文，彼此互不影响
pub struct IrContext {
    /// 头部区：只放 declare 原型和字符串常量全局量，新行插到最前面
    header: Vec<String>,
    /// 主体区：函数定义，按当前缩进逐行追加
    body: Vec<String>,
    indent: usize,
    next_id: u32,
    /// 字符串常量驻留表：内容 -> @str.N
    strings: HashMap<String, String>,
    str_count: u32,
    /// 作用域栈：变量查找从栈顶（最内层）向外进行
    pub scopes: Vec<HashMap<String, VarHandle>>,
    /// 全局函数表：函数名 -> 签名
    pub func_table: HashMap<String, FuncSig>,
    pub source_map: Option<SourceMap>,
}

impl IrContext {
    pub fn new(source_map: Option<SourceMap>) -> Self {
        Self {
            header: Vec::new(),
            body: Vec::new(),
            indent: 0,
            next_id: 0,
            strings: HashMap::new(),
            str_count: 0,
            scopes: Vec::new(),
            func_table: HashMap::new(),
            source_map,
        }
    }

    pub fn format_location(&self, offset: usize) -> Option<String> {
        self.source_map.as_ref().map(|sm| sm.format_location(offset))
    }

    pub fn error_at_span(&self, message: impl Into<String>, span: Span) -> CompilerError {
        let mut msg = message.into();
        if let Some(loc) = self.format_location(span.begin) {
            msg = format!("{} at {}", msg, loc);
        }
        CompilerError::IrGeneration(msg)
    }

    /// 取一个全编译期唯一的结点编号；寄存器和标签名都嵌入它来避免撞名
    pub fn fresh_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// 按当前缩进追加一行主体指令
    pub fn emit(&mut self, line: impl AsRef<str>) {
        self.body
            .push(format!("{}{}", "  ".repeat(self.indent), line.as_ref()));
    }

    /// 发出标签行并进入其指令区（缩进 +1）
    pub fn emit_label(&mut self, name: impl AsRef<str>) {
        self.body
            .push(format!("{}{}:", "  ".repeat(self.indent), name.as_ref()));
        self.indent += 1;
    }

    /// 离开当前标签的指令区（缩进 -1）
    pub fn close_label(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// 头部区插入一行声明；新行总在最前
    pub fn emit_header(&mut self, line: impl Into<String>) {
        self.header.insert(0, line.into());
    }

    /// 字符串常量驻留：相同内容复用同一个 @str.N 全局量
    /// 长度按 UTF-8 字节数 + 结尾 NUL 计
    pub fn intern_string(&mut self, content: &str) -> String {
        if let Some(name) = self.strings.get(content) {
            return name.clone();
        }
        let name = format!("@str.{}", self.str_count);
        self.str_count += 1;
        self.emit_header(format!(
            "{} = private constant [{} x i8] c\"{}\\00\"",
            name,
            content.len() + 1,
            encode_string(content),
        ));
        self.strings.insert(content.to_string(), name.clone());
        name
    }

    /// 最后一条主体指令是否已经终结当前基本块（ret / br）
    pub fn last_is_terminator(&self) -> bool {
        self.body
            .last()
            .map(|line| {
                let inst = line.trim_start();
                inst.starts_with("ret ") || inst.starts_with("br ")
            })
            .unwrap_or(false)
    }

    /// 仅当前块尚未终结时才补无条件跳转，避免终结指令后再发指令
    pub fn branch_if_open(&mut self, label: &str) {
        if !self.last_is_terminator() {
            self.emit(format!("br label %{}", label));
        }
    }

    /// 拼出完整的 IR 文本：头部区在前，主体区在后
    pub fn finish(self) -> String {
        let mut out = String::new();
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Push a new scope onto the stack
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pop the current scope from the stack
    pub fn pop_scope(&mut self) -> Result<(), CompilerError> {
        self.scopes.pop().ok_or_else(|| {
            CompilerError::IrGeneration("Cannot pop scope: no scope on stack".to_string())
        })?;
        Ok(())
    }

    /// Look up a variable in the scope stack (from innermost to outermost)
    pub fn lookup_var(&self, name: &str) -> Option<&VarHandle> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Insert a variable into the current scope
    /// Returns an error if the name is already declared in the current scope
    pub fn insert_var(
        &mut self,
        name: String,
        handle: VarHandle,
        span: Span,
    ) -> Result<(), CompilerError> {
        match self.scopes.last() {
            None => {
                return Err(CompilerError::IrGeneration(
                    "Cannot insert variable: no scope on stack".to_string(),
                ))
            }
            Some(scope) if scope.contains_key(&name) => {
                return Err(self.error_at_span(
                    format!("Variable `{}` already declared in this scope", name),
                    span,
                ));
            }
            _ => {}
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, handle);
        }
        Ok(())
    }

    /// 注册函数签名；重名直接报错
    pub fn register_function(
        &mut self,
        name: &str,
        sig: FuncSig,
        span: Span,
    ) -> Result<(), CompilerError> {
        if self.func_table.contains_key(name) {
            return Err(self.error_at_span(format!("Function `{}` already declared", name), span));
        }
        self.func_table.insert(name.to_string(), sig);
        Ok(())
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FuncSig> {
        self.func_table.get(name)
    }
}

/// 按 LLVM 的 c"..." 规则编码字符串常量内容
/// 只处理 NUL、换行和双引号，其余字节原样写出
fn encode_string(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '\0' => out.push_str("\\00"),
            '\n' => out.push_str("\\0A"),
            '"' => out.push_str("\\22"),
            _ => out.push(c),
        }
    }
    out
}
