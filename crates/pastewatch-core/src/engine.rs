//! 字面量匹配引擎
//!
//! 设计要点：
//! - 关键词永远按字面量处理：所有正则元字符先转义再编译，引擎不接受
//!   操作者提供的正则语法。
//! - 大小写不敏感时由正则引擎折叠，匹配直接跑在原始文本上，
//!   偏移不会因折叠副本长度变化而漂移。
//! - 这是唯一的匹配原语：转义字面量的编译在实际关键词长度下不会失败，
//!   所以没有降级路径，枚举与计数口径全程一致。

use regex::RegexBuilder;

/// 上下文窗口：命中起点前、终点后各取 50 个字符
pub(crate) const CONTEXT_CHARS: usize = 50;

/// 枚举 `keyword` 在 `text` 中所有不重叠出现的字节区间（升序）
pub(crate) fn find_occurrences(text: &str, keyword: &str, case_sensitive: bool) -> Vec<(usize, usize)> {
    // 超长关键词可能触碰正则的编译体积上限，此时按无命中处理
    let re = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(!case_sensitive)
        .build()
    {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };
    re.find_iter(text).map(|m| (m.start(), m.end())).collect()
}

/// 提取单次命中的上下文片段
/// - 窗口按字符边界收敛到文本范围内，不会越界
/// - 内部换行替换为空格，两端裁剪空白，以省略号包裹
pub(crate) fn context_snippet(text: &str, start: usize, end: usize) -> String {
    let ctx_start = text[..start]
        .char_indices()
        .rev()
        .take(CONTEXT_CHARS)
        .last()
        .map_or(start, |(i, _)| i);
    let ctx_end = text[end..]
        .char_indices()
        .take(CONTEXT_CHARS)
        .last()
        .map_or(end, |(i, c)| end + i + c.len_utf8());
    let window = text[ctx_start..ctx_end].replace('\n', " ");
    format!("...{}...", window.trim())
}
