//! 外部工具调用集中在这里，其余模块不直接碰 std::process::Command

use std::process::Command;

use crate::CompilerError;

/// 用 clang 把 IR 链接成本地可执行文件；IR 落盘在输出文件旁边
pub fn build_executable(ir: &str, output: &str) -> Result<(), CompilerError> {
    let ll_path = format!("{}.ll", output);
    std::fs::write(&ll_path, ir)?;
    let result = Command::new("clang")
        .arg("-Wno-override-module")
        .arg("-o")
        .arg(output)
        .arg(&ll_path)
        .output()
        .map_err(|e| CompilerError::Toolchain(format!("Failed to run clang: {}", e)))?;
    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(CompilerError::Toolchain(format!(
            "clang failed on {}: {}",
            ll_path, stderr,
        )));
    }
    Ok(())
}

/// 用 lli 直接解释执行 IR，返回其退出码；标准输入输出透传给子进程
pub fn run_ir(ir: &str) -> Result<i32, CompilerError> {
    let ll_path = std::env::temp_dir().join(format!("minicc.{}.ll", std::process::id()));
    std::fs::write(&ll_path, ir)?;
    let status = Command::new("lli")
        .arg(&ll_path)
        .status()
        .map_err(|e| CompilerError::Toolchain(format!("Failed to run lli: {}", e)));
    let _ = std::fs::remove_file(&ll_path);
    Ok(status?.code().unwrap_or(1))
}
