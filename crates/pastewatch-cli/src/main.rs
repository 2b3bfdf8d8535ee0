use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pastewatch_core::{
    load_from_csv, load_from_lines, scan_documents, write_csv, write_json, PasteClient, ScanConfig,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "pastewatch", version, about = "粘贴站关键词监控")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 抓取粘贴站并扫描关键词
    Scan {
        /// 指定单个粘贴 URL；缺省时抓取归档页的最近条目
        #[arg(long)]
        url: Option<String>,

        /// 抓取最近条目的数量（仅在未指定 --url 时生效）
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// 关键词文件路径
        #[arg(long)]
        keywords: PathBuf,

        /// 关键词文件格式：lines（每行一个）或 csv（取第一列）
        #[arg(long, default_value = "lines", value_parser = ["lines", "csv"])]
        keyword_format: String,

        /// 区分大小写
        #[arg(long)]
        case_sensitive: bool,

        /// 输出文件
        #[arg(long, default_value = "./matches.json")]
        output: PathBuf,

        /// 输出格式：json 或 csv
        #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
        format: String,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { url, limit, keywords, keyword_format, case_sensitive, output, format } => {
            let raw = std::fs::read_to_string(&keywords).context("read keyword file")?;
            // 表格路径的加载错误原样呈现给操作者
            let keyword_list = match keyword_format.as_str() {
                "csv" => load_from_csv(&raw)?,
                _ => load_from_lines(&raw),
            };
            if keyword_list.is_empty() {
                bail!("no keywords configured");
            }
            info!(keywords = keyword_list.len(), case_sensitive, "starting scan");

            let config = ScanConfig::new(keyword_list, case_sensitive);
            let client = PasteClient::new().context("build http client")?;

            let documents = match url {
                Some(url) => vec![client.fetch_url(&url)],
                None => client.fetch_recent(limit),
            };
            let failed = documents.iter().filter(|d| d.error.is_some()).count();
            if failed > 0 {
                warn!(failed, "some fetches failed and will be skipped");
            }

            let reports = scan_documents(&documents, &config);

            // 以缓冲方式打开输出文件并写入报告
            let mut out = BufWriter::new(File::create(&output).context("create output file")?);
            match format.as_str() {
                "csv" => write_csv(&reports, &mut out).context("write csv report")?,
                _ => write_json(&reports, &mut out).context("write json report")?,
            }
            out.flush().ok();

            info!(fetched = documents.len(), matched = reports.len(), ?output, "scan finished");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
