use std::env::args;

use crate::CompilerError;

/// 命令行参数：minicc <input> -o <output> (-llvm | -exe | -run)
#[derive(Debug, Clone)]
pub struct Params {
    pub input: String,
    pub output: String,
    pub llvm: bool,
    pub exe: bool,
    pub run: bool,
}

impl Params {
    pub fn from_args() -> Result<Self, CompilerError> {
        Self::from_iter(args().skip(1))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = String>) -> Result<Self, CompilerError> {
        let mut iter = iter.into_iter();
        let mut input = String::new();
        let mut output = String::new();
        let mut llvm = false;
        let mut exe = false;
        let mut run = false;

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-o" => {
                    output = iter.next().ok_or_else(|| {
                        CompilerError::Args("Output file not specified after -o".to_string())
                    })?;
                }
                "-llvm" => llvm = true,
                "-exe" => exe = true,
                "-run" => run = true,
                _ => {
                    if input.is_empty() {
                        input = arg;
                    } else {
                        return Err(CompilerError::Args(
                            "Multiple input files are not supported".to_string(),
                        ));
                    }
                }
            }
        }
        if input.is_empty() {
            return Err(CompilerError::Args("Input file not specified".to_string()));
        }
        let modes = [llvm, exe, run].iter().filter(|on| **on).count();
        if modes == 0 {
            return Err(CompilerError::Args(
                "No output mode specified (-llvm, -exe, or -run)".to_string(),
            ));
        }
        if modes > 1 {
            return Err(CompilerError::Args(
                "Multiple output modes specified; please choose only one".to_string(),
            ));
        }
        // -run 直接解释执行，不需要输出文件
        if output.is_empty() && !run {
            return Err(CompilerError::Args("Output file not specified".to_string()));
        }
        Ok(Params {
            input,
            output,
            llvm,
            exe,
            run,
        })
    }
}
