use std::fs::read_to_string;

use lalrpop_util::lexer::Token;
use lalrpop_util::ParseError;

use minicc::front::generate_ir;
use minicc::minic;
use minicc::utils::args::Params;
use minicc::utils::logger::fail;
use minicc::utils::{tools, SourceMap};
use minicc::CompilerError;

fn main() {
    if let Err(e) = run() {
        fail(&e, 1);
    }
}

fn format_expected(expected: Vec<String>) -> String {
    if expected.is_empty() {
        "no expected tokens".to_string()
    } else {
        expected.join(", ")
    }
}

fn format_parse_error(source_map: &SourceMap, err: ParseError<usize, Token<'_>, &str>) -> String {
    match err {
        ParseError::InvalidToken { location } => {
            format!("Invalid token at {}", source_map.format_location(location))
        }
        ParseError::UnrecognizedEof { location, expected } => {
            let expected = format_expected(expected);
            format!(
                "Unexpected end of file at {}. Expected: {}",
                source_map.format_location(location),
                expected
            )
        }
        ParseError::UnrecognizedToken { token, expected } => {
            let (start, tok, _end) = token;
            let expected = format_expected(expected);
            format!(
                "Unrecognized token {:?} at {}. Expected: {}",
                tok,
                source_map.format_location(start),
                expected
            )
        }
        ParseError::ExtraToken { token } => {
            let (start, tok, _end) = token;
            format!(
                "Extra token {:?} at {}",
                tok,
                source_map.format_location(start)
            )
        }
        ParseError::User { error } => error.to_string(),
    }
}

fn run() -> Result<(), CompilerError> {
    // 解析命令行参数
    let params = Params::from_args()?;

    // 读取输入文件
    let input = read_to_string(&params.input)?;
    let source_map = SourceMap::new(&input);

    // 调用 lalrpop 生成的 parser 解析输入文件
    let ast = minic::CompUnitParser::new()
        .parse(&input)
        .map_err(|e| CompilerError::Parse(format_parse_error(&source_map, e)))?;

    let ir = generate_ir(&ast, Some(source_map))?;

    if params.llvm {
        std::fs::write(&params.output, ir)?;
        return Ok(());
    }
    if params.exe {
        return tools::build_executable(&ir, &params.output);
    }
    // -run：交给 lli 解释执行，并透传它的退出码
    let code = tools::run_ir(&ir)?;
    std::process::exit(code);
}
