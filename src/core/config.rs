//! 配置管理系统 (Configuration Management)
//!
//! 负责 `config.toml` 的反序列化及其层级结构映射，支持环境变量覆盖与默认值回退机制。

use std::path::Path;
use std::time::Duration;

use bon::Builder;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::core::error::{Result, ScrapeError};

/// 默认目标站点
pub const DEFAULT_BASE_URL: &str = "https://topanhanime.com";

/// 固定的桌面浏览器标识
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// 环境变量前缀，例如 `ANH__SITE__BASE_URL`
const ENV_PREFIX: &str = "ANH";

/// 全局应用配置
#[derive(Debug, Deserialize, Builder, Clone, Default)]
pub struct AppConfig {
    /// HTTP 服务监听参数
    #[serde(default)]
    #[builder(default)]
    pub server: ServerConfig,

    /// 目标站点与出站请求参数
    #[serde(default)]
    #[builder(default)]
    pub site: SiteConfig,
}

/// HTTP 服务配置
#[derive(Debug, Deserialize, Builder, Clone)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_bind")]
    #[builder(default = default_bind())]
    pub bind: String,
}

/// 站点配置
#[derive(Debug, Deserialize, Builder, Clone)]
pub struct SiteConfig {
    /// 站点根地址 (可替换为镜像站点)
    #[serde(default = "default_base_url")]
    #[builder(default = default_base_url())]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    #[builder(default = default_user_agent())]
    pub user_agent: String,

    /// 单次请求总超时 (秒)
    #[serde(default = "default_timeout_secs")]
    #[builder(default = default_timeout_secs())]
    pub timeout_secs: u64,

    /// 建立连接超时 (秒)
    #[serde(default = "default_connect_timeout_secs")]
    #[builder(default = default_connect_timeout_secs())]
    pub connect_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl SiteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_bind() -> String {
    "0.0.0.0:8888".to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_connect_timeout_secs() -> u64 {
    5
}

impl AppConfig {
    /// 从工作目录下的 `config.toml` 与环境变量加载配置
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// 从指定文件与环境变量加载配置
    ///
    /// 文件不存在时仅使用环境变量与默认值。
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let builder = Config::builder();

        let builder = if config_path.exists() {
            builder.add_source(File::from(config_path))
        } else {
            builder
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(ScrapeError::Config)?;
        settings.try_deserialize().map_err(ScrapeError::Config)
    }
}
