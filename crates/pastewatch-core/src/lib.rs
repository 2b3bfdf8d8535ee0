//! 粘贴站关键词扫描核心库
//!
//! 设计要点：
//! - 扫描引擎是纯函数：配置（关键词列表 + 大小写开关）由调用方以不可变值
//!   显式传入，引擎自身不持有任何可变状态，重新配置即整体换一个值。
//! - 单一匹配原语：关键词全部转义后按字面量匹配，偏移相对原始文本，
//!   不存在编译降级路径，计数口径全程一致。
//! - 抓取失败编码在记录内（`error` 字段），由批量驱动跳过，不向上传播。

mod options;
mod types;
mod findings;
mod keywords;
mod engine;
mod scan;
mod fetch;
mod export;

// 对外暴露的公共 API
pub use export::{write_csv, write_json, CONTENT_PREVIEW_MAX};
pub use fetch::PasteClient;
pub use findings::{MatchDetail, ScanResult};
pub use keywords::{load_from_csv, load_from_lines, KeywordError};
pub use options::ScanConfig;
pub use scan::{scan, scan_documents};
pub use types::{Document, MatchReport};
