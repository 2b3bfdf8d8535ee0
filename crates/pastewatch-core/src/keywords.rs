//! 关键词加载（CSV 表格 / 行分隔文本）
use thiserror::Error;

/// 表格路径的加载错误；错误信息需原样呈现给操作者
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordError {
    #[error("keyword file is empty")]
    EmptySource,
    #[error("keyword file contains no rows")]
    NoRows,
    #[error("keyword file has no columns")]
    NoColumns,
    #[error("keyword file yields no usable keywords")]
    NoKeywords,
}

/// 从 CSV 文本加载关键词（仅取第一列）
/// - 不做表头识别：首行同样按数据处理
/// - 每个单元格裁剪空白后入列，空单元格丢弃
/// - 保持原始顺序，不去重，不折叠大小写
pub fn load_from_csv(raw: &str) -> Result<Vec<String>, KeywordError> {
    if raw.trim().is_empty() {
        return Err(KeywordError::EmptySource);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows = 0usize;
    let mut first_cells = 0usize;
    let mut keywords: Vec<String> = Vec::new();

    for record in reader.records() {
        // 个别坏行跳过，不影响其余行
        let record = match record { Ok(r) => r, Err(_) => continue };
        rows += 1;
        let cell = match record.get(0) { Some(c) => c, None => continue };
        first_cells += 1;
        let cell = cell.trim();
        if cell.is_empty() { continue; }
        keywords.push(cell.to_string());
    }

    if rows == 0 {
        return Err(KeywordError::NoRows);
    }
    if first_cells == 0 {
        return Err(KeywordError::NoColumns);
    }
    if keywords.is_empty() {
        return Err(KeywordError::NoKeywords);
    }
    Ok(keywords)
}

/// 从行分隔文本加载关键词
/// 空输入返回空列表而非报错：手工输入是可选项，只有文件上传失败才需要显式报错
pub fn load_from_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
