//! 公共记录类型（对外暴露）
use serde::{Deserialize, Serialize};

use crate::findings::ScanResult;

/// 抓取层产出的单篇文档
/// `error` 非空表示该记录抓取失败、不可用于扫描（由批量驱动负责跳过）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 批量扫描的输出记录：原文档字段与扫描结果字段的结构并集
/// 两侧当前没有重名字段，序列化后平铺为同一层
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    #[serde(flatten)]
    pub document: Document,
    #[serde(flatten)]
    pub result: ScanResult,
}
