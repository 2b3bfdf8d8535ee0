//! 结果导出（JSON / CSV）
use std::io::Write;

use anyhow::Result;

use crate::types::MatchReport;

/// CSV 导出中单篇内容预览的最大字符数（导出侧策略，与扫描引擎无关）
pub const CONTENT_PREVIEW_MAX: usize = 500;

/// 将报告以 JSON 数组流式写入 `out`
pub fn write_json(reports: &[MatchReport], out: &mut dyn Write) -> Result<()> {
    write!(out, "[")?;
    let mut first = true;
    for report in reports {
        if !first { write!(out, ",")?; } else { first = false; }
        serde_json::to_writer(&mut *out, report)?;
    }
    write!(out, "]")?;
    Ok(())
}

/// 将报告写成一行一篇的 CSV 汇总表，内容列只保留预览前缀
pub fn write_csv(reports: &[MatchReport], out: &mut dyn Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "title",
        "url",
        "matched_keywords",
        "match_count",
        "total_occurrences",
        "content_length",
        "content_preview",
    ])?;

    for report in reports {
        let content = &report.document.content;
        // 预览按字符截断，避免切在 UTF-8 边界中间
        let preview: String = content.chars().take(CONTENT_PREVIEW_MAX).collect();
        let matched_keywords = report.result.matched_keywords.join(", ");
        let match_count = report.result.match_count.to_string();
        let total_occurrences = report.result.total_occurrences.to_string();
        let content_length = content.chars().count().to_string();
        writer.write_record([
            report.document.title.as_str(),
            report.document.url.as_deref().unwrap_or(""),
            matched_keywords.as_str(),
            match_count.as_str(),
            total_occurrences.as_str(),
            content_length.as_str(),
            preview.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
