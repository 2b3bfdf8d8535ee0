//! 扫描主流程与批量驱动
use std::collections::BTreeSet;

use crate::engine::{context_snippet, find_occurrences};
use crate::findings::{MatchDetail, ScanResult};
use crate::options::ScanConfig;
use crate::types::{Document, MatchReport};

/// 每个关键词最多保留的命中明细条数（出现总次数的计数不受此上限约束）
pub(crate) const DETAILS_PER_KEYWORD: usize = 3;

/// 扫描单篇文本，返回结构化报告
/// 纯函数：无副作用，也没有错误路径（未命中是正常结果，不是失败）
pub fn scan(text: &str, config: &ScanConfig) -> ScanResult {
    if text.is_empty() || config.keywords.is_empty() {
        return ScanResult::empty();
    }

    let mut matched: BTreeSet<String> = BTreeSet::new();
    let mut total_occurrences = 0usize;
    let mut match_details: Vec<MatchDetail> = Vec::new();

    // 按输入顺序逐词扫描；列表中的重复关键词不去重，重复项原样重扫
    for keyword in &config.keywords {
        if keyword.is_empty() {
            // 空模式在任意位置都命中，没有意义，跳过
            continue;
        }
        let occurrences = find_occurrences(text, keyword, config.case_sensitive);
        if occurrences.is_empty() {
            continue;
        }

        matched.insert(keyword.clone());
        total_occurrences += occurrences.len();

        for &(start, end) in occurrences.iter().take(DETAILS_PER_KEYWORD) {
            match_details.push(MatchDetail {
                keyword: keyword.clone(),
                position: start,
                context: context_snippet(text, start, end),
            });
        }
    }

    let matched_keywords: Vec<String> = matched.into_iter().collect();
    ScanResult {
        matches_found: !matched_keywords.is_empty(),
        match_count: matched_keywords.len(),
        total_occurrences,
        matched_keywords,
        match_details,
    }
}

/// 批量扫描：对每篇文档调用 [`scan`]，仅保留有命中的文档
/// - 带错误标记或内容为空的文档直接跳过（无输出，无副作用）
/// - 输出顺序与输入一致，被跳过的文档不留占位
pub fn scan_documents(documents: &[Document], config: &ScanConfig) -> Vec<MatchReport> {
    let mut reports = Vec::new();
    for document in documents {
        if document.error.is_some() || document.content.is_empty() {
            continue;
        }
        let result = scan(&document.content, config);
        if !result.matches_found {
            continue;
        }
        reports.push(MatchReport { document: document.clone(), result });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(keywords: &[&str], case_sensitive: bool) -> ScanConfig {
        ScanConfig::new(keywords.iter().map(|k| k.to_string()).collect(), case_sensitive)
    }

    fn document(id: &str, content: &str) -> Document {
        Document {
            id: Some(id.to_string()),
            title: id.to_string(),
            url: None,
            content: content.to_string(),
            error: None,
        }
    }

    #[test]
    fn single_occurrence_reports_exact_position() {
        let result = scan("the password is hidden", &config(&["password"], false));
        assert!(result.matches_found);
        assert_eq!(result.match_count, 1);
        assert_eq!(result.total_occurrences, 1);
        assert_eq!(result.match_details.len(), 1);
        assert_eq!(result.match_details[0].keyword, "password");
        assert_eq!(result.match_details[0].position, 4);
    }

    #[test]
    fn empty_keyword_list_yields_zero_result() {
        assert_eq!(scan("any content at all", &config(&[], false)), ScanResult::empty());
    }

    #[test]
    fn empty_text_yields_zero_result() {
        assert_eq!(scan("", &config(&["secret"], false)), ScanResult::empty());
    }

    #[test]
    fn case_insensitive_search_matches_across_case() {
        assert!(scan("Secret", &config(&["secret"], false)).matches_found);
    }

    #[test]
    fn case_sensitive_search_rejects_differing_case() {
        let result = scan("Secret", &config(&["secret"], true));
        assert!(!result.matches_found);
        assert_eq!(result.total_occurrences, 0);
    }

    #[test]
    fn detail_cap_does_not_cap_total_occurrences() {
        let result = scan("key key key key key", &config(&["key"], false));
        assert_eq!(result.match_count, 1);
        assert_eq!(result.total_occurrences, 5);
        assert_eq!(result.match_details.len(), 3);
    }

    #[test]
    fn matched_keywords_are_sorted_ascending() {
        let result = scan("beta alpha beta", &config(&["beta", "alpha"], false));
        assert_eq!(result.matched_keywords, vec!["alpha", "beta"]);
        assert_eq!(result.match_count, 2);
        assert_eq!(result.total_occurrences, 3);
    }

    #[test]
    fn duplicate_keywords_rescan_redundantly() {
        // 重复关键词各自重扫：总次数与明细翻倍，集合视图仍去重
        let result = scan("token token", &config(&["token", "token"], false));
        assert_eq!(result.matched_keywords, vec!["token"]);
        assert_eq!(result.match_count, 1);
        assert_eq!(result.total_occurrences, 4);
        assert_eq!(result.match_details.len(), 4);
    }

    #[test]
    fn details_follow_keyword_iteration_order() {
        let result = scan("bb aa", &config(&["bb", "aa"], false));
        assert_eq!(result.match_details[0].keyword, "bb");
        assert_eq!(result.match_details[1].keyword, "aa");
        assert_eq!(result.matched_keywords, vec!["aa", "bb"]);
    }

    #[test]
    fn batch_keeps_only_matching_documents() {
        let mut failed = document("1", "");
        failed.error = Some("timeout".to_string());
        let documents = vec![
            failed,
            document("2", "nothing interesting"),
            document("3", "the secret is out"),
        ];
        let reports = scan_documents(&documents, &config(&["secret"], false));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].document.id.as_deref(), Some("3"));
        assert!(reports[0].result.matches_found);
        assert_eq!(reports[0].result.matched_keywords, vec!["secret"]);
    }

    #[test]
    fn batch_skips_error_marked_document_despite_content() {
        let mut doc = document("1", "a secret with content");
        doc.error = Some("partial fetch".to_string());
        assert!(scan_documents(&[doc], &config(&["secret"], false)).is_empty());
    }

    #[test]
    fn batch_output_mirrors_input_order() {
        let documents = vec![
            document("a", "secret one"),
            document("b", "plain"),
            document("c", "secret two"),
        ];
        let reports = scan_documents(&documents, &config(&["secret"], false));
        let ids: Vec<_> = reports.iter().filter_map(|r| r.document.id.clone()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
