use lalrpop_util::lalrpop_mod;

pub mod front;
pub mod utils;

pub use utils::CompilerError;

// lalrpop 在构建期从 src/minic.lalrpop 生成解析器模块
lalrpop_mod!(pub minic);
