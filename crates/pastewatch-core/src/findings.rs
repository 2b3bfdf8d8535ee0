//! 扫描结果与命中明细（对外暴露）
use serde::Serialize;

/// 单次命中的明细
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetail {
    /// 命中的关键词（原始字符串，未折叠大小写）
    pub keyword: String,
    /// 命中起点在被扫描文本中的字节偏移
    pub position: usize,
    /// 命中前后的上下文片段，以省略号包裹
    pub context: String,
}

/// 单篇文本的扫描报告
/// 不变量：`match_count == matched_keywords.len()`；
/// `total_occurrences >= match_count`（明细受每词条数上限约束，总次数不受）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub matches_found: bool,
    /// 命中的关键词集合（按原始字符串升序，去重）
    pub matched_keywords: Vec<String>,
    /// 命中的关键词个数
    pub match_count: usize,
    /// 所有关键词的出现总次数
    pub total_occurrences: usize,
    /// 命中明细，顺序与关键词遍历顺序一致
    pub match_details: Vec<MatchDetail>,
}

impl ScanResult {
    /// 零值结果：空文本或空关键词列表时返回（正常结果，不是错误）
    pub fn empty() -> Self {
        Self {
            matches_found: false,
            matched_keywords: Vec::new(),
            match_count: 0,
            total_occurrences: 0,
            match_details: Vec::new(),
        }
    }
}
