use colored::Colorize;

use crate::CompilerError;

/// 统一的致命错误出口：红色前缀打到 stderr，然后按给定码退出
pub fn fail(error: &CompilerError, exit_code: i32) -> ! {
    eprintln!("{} {}", "error:".red().bold(), error);
    std::process::exit(exit_code)
}
