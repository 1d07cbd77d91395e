use std::fmt;

/// 把字节偏移翻译成行列号，解析错误和语义错误都用它定位
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_starts: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl SourceMap {
    pub fn new(input: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            input
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(idx, _)| idx + 1),
        );
        Self { line_starts }
    }

    pub fn locate(&self, offset: usize) -> Location {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        Location {
            line: line_idx + 1,
            column: offset - line_start + 1,
        }
    }

    pub fn format_location(&self, offset: usize) -> String {
        self.locate(offset).to_string()
    }
}
