//! 粘贴站抓取（归档列表 + 原文接口）
//!
//! 抓取失败一律编码为带 `error` 标记的 [`Document`] 记录，不向上传播错误，
//! 批量驱动据此跳过不可用记录。超时与限速间隔由本层自行负责，
//! 扫描侧对节奏策略没有可见性。

use std::thread;
use std::time::Duration;

use anyhow::Result;
use scraper::{Html, Selector};

use crate::types::Document;

/// 归档列表页
const ARCHIVE_URL: &str = "https://pastebin.com/archive";
/// 粘贴页与原文接口的前缀
const PASTE_URL_BASE: &str = "https://pastebin.com";
/// 单个请求的超时
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
/// 相邻原文请求之间的固定间隔，尊重目标站点的限速
const FETCH_DELAY: Duration = Duration::from_millis(500);
/// 归档页会拒绝裸客户端 UA
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// 面向粘贴站的阻塞式 HTTP 会话
pub struct PasteClient {
    http: reqwest::blocking::Client,
}

impl PasteClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// 抓取归档页最近的公开粘贴，至多 `limit` 篇
    /// 列表页整体失败返回单条错误记录；单篇失败转成对应的错误记录后继续
    pub fn fetch_recent(&self, limit: usize) -> Vec<Document> {
        let body = match self.get_text(ARCHIVE_URL) {
            Ok(body) => body,
            Err(e) => {
                return vec![error_document(
                    None,
                    "Error accessing archive",
                    Some(ARCHIVE_URL.to_string()),
                    e.to_string(),
                )]
            }
        };

        let listing = Html::parse_document(&body);
        let row_selector = Selector::parse("tr.data").expect("parse row selector");
        let link_selector = Selector::parse("a").expect("parse link selector");

        let mut pastes = Vec::new();
        for row in listing.select(&row_selector).take(limit) {
            let link = match row.select(&link_selector).next() { Some(l) => l, None => continue };
            let href = match link.value().attr("href") { Some(h) => h, None => continue };
            let paste_id = href.trim_matches('/').to_string();
            let title = link.text().collect::<String>().trim().to_string();
            let title = if title.is_empty() { "Untitled".to_string() } else { title };
            let url = format!("{}/{}", PASTE_URL_BASE, paste_id);

            // 每篇原文请求之前固定等待
            thread::sleep(FETCH_DELAY);
            let raw_url = format!("{}/raw/{}", PASTE_URL_BASE, paste_id);
            match self.get_text(&raw_url) {
                Ok(content) => pastes.push(Document {
                    id: Some(paste_id),
                    title,
                    url: Some(url),
                    content,
                    error: None,
                }),
                Err(e) => pastes.push(error_document(Some(paste_id), "Error", Some(url), e.to_string())),
            }
        }
        pastes
    }

    /// 抓取指定的粘贴 URL
    /// `/raw/` 链接直接返回响应体；普通页面解析 HTML，按 textarea、pre、code
    /// 的优先级抽取正文容器，都没有时退回整页文本
    pub fn fetch_url(&self, url: &str) -> Document {
        let body = match self.get_text(url) {
            Ok(body) => body,
            Err(e) => return error_document(None, "Error", Some(url.to_string()), e.to_string()),
        };

        if url.contains("/raw/") {
            return Document {
                id: None,
                title: "Custom Paste".to_string(),
                url: Some(url.to_string()),
                content: body,
                error: None,
            };
        }

        let page = Html::parse_document(&body);
        let textarea = Selector::parse("textarea").expect("parse content selector");
        let pre = Selector::parse("pre").expect("parse content selector");
        let code = Selector::parse("code").expect("parse content selector");
        let node = page
            .select(&textarea)
            .next()
            .or_else(|| page.select(&pre).next())
            .or_else(|| page.select(&code).next());
        let content = match node {
            Some(node) => node.text().collect::<String>(),
            None => page.root_element().text().collect::<String>(),
        };

        Document {
            id: None,
            title: "Custom Paste".to_string(),
            url: Some(url.to_string()),
            content,
            error: None,
        }
    }

    fn get_text(&self, url: &str) -> reqwest::Result<String> {
        self.http
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
    }
}

/// 构造一条带错误标记的记录，批量驱动会跳过它
fn error_document(id: Option<String>, title: &str, url: Option<String>, error: String) -> Document {
    Document {
        id,
        title: title.to_string(),
        url,
        content: String::new(),
        error: Some(error),
    }
}
