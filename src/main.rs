//! 应用程序入口 (Application Entrypoint)
//!
//! 负责 CLI 指令解析、遥测层初始化与服务生命周期管理。

mod api;
mod core;
mod interfaces;
mod network;
mod sites;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::api::Operation;
use crate::core::config::AppConfig;
use crate::core::error::ScrapeError;

/// 命令行界面脚手架 (CLI Scaffolding)
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 配置文件路径 (默认读取工作目录下的 config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 启动 HTTP 服务
    Serve {
        /// 覆盖配置中的监听地址
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// 按关键字搜索并输出 JSON
    Search {
        keyword: String,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// 获取帖子图片列表并输出 JSON
    Post { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 遥测层初始化 (Telemetry Layer Initialization)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            api::serve(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Search { keyword, page } => {
            let site = api::build_site(&config)?;
            tracing::info!("Searching {:?} (page {}) on {}", keyword, page, site.base_url());
            let result = site.search(&keyword, page).await;
            print_outcome(Operation::Search, result)
        }
        Commands::Post { url } => {
            let site = api::build_site(&config)?;
            tracing::info!("Fetching post details: {}", url);
            let result = site.post(&url).await;
            print_outcome(Operation::Detail, result)
        }
    }
}

/// 以与 HTTP 接口相同的 JSON 形式输出结果
fn print_outcome<T: serde::Serialize>(
    op: Operation,
    result: Result<T, ScrapeError>,
) -> anyhow::Result<ExitCode> {
    match result {
        Ok(value) => {
            println!("{}", api::to_json_text(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let (_, payload) = api::error_payload(op, &e);
            println!("{}", api::to_json_text(&payload)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
