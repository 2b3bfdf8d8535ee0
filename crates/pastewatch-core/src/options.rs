//! 扫描配置（模块）

/// 扫描配置：关键词列表 + 大小写开关
/// 每次扫描调用显式传入的不可变值；操作者调整配置时由调用方整体替换，
/// 引擎自身不保留任何跨调用状态。
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// 关键词列表（保持输入顺序；重复项不去重，原样重复扫描）
    pub keywords: Vec<String>,
    /// 是否区分大小写
    pub case_sensitive: bool,
}

impl ScanConfig {
    pub fn new(keywords: Vec<String>, case_sensitive: bool) -> Self {
        Self { keywords, case_sensitive }
    }
}
