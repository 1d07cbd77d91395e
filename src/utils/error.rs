use std::fmt;

#[derive(Debug)]
pub enum CompilerError {
    // I/O 错误
    Io(std::io::Error),
    // 解析错误
    Parse(String),
    // IR 生成错误（所有语义错误都走这里）
    IrGeneration(String),
    // 外部工具调用错误
    Toolchain(String),
    // 参数解析错误
    Args(String),
}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::Io(e) => write!(f, "I/O error: {}", e),
            CompilerError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CompilerError::IrGeneration(msg) => write!(f, "IR generation error: {}", msg),
            CompilerError::Toolchain(msg) => write!(f, "Toolchain error: {}", msg),
            CompilerError::Args(msg) => write!(f, "Argument error: {}", msg),
        }
    }
}

impl std::error::Error for CompilerError {}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::Io(err)
    }
}
