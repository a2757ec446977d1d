//! 用户配置模块
//!
//! # 设计思路
//!
//! 仓库坐标（owner / repo / branch）、默认外链类型与 API 地址保存在
//! 用户配置目录下的 `settings.json` 中，命令行参数可以逐项覆盖。
//!
//! # 实现思路
//!
//! - 文件不存在时返回默认配置，不视为错误。
//! - 写入前自动创建父目录。
//! - `coords()` 在 owner / repo 为空时返回 `AppError::Config`。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::link::{Provider, RepoCoords};
use crate::repo_init::DEFAULT_API_BASE;

const APP_DIR_NAME: &str = "gh-image-links";
const SETTINGS_FILE_NAME: &str = "settings.json";

fn default_branch() -> String {
    "master".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// 用户配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            branch: default_branch(),
            token: None,
            provider: Provider::default(),
            api_base: default_api_base(),
        }
    }
}

impl UserConfig {
    /// 当前配置对应的仓库坐标。
    pub fn coords(&self) -> Result<RepoCoords, AppError> {
        if self.owner.trim().is_empty() {
            return Err(AppError::Config("owner 未配置".to_string()));
        }
        if self.repo.trim().is_empty() {
            return Err(AppError::Config("repo 未配置".to_string()));
        }
        if self.branch.trim().is_empty() {
            return Err(AppError::Config("branch 未配置".to_string()));
        }
        Ok(RepoCoords::new(
            self.owner.trim(),
            self.repo.trim(),
            self.branch.trim(),
        ))
    }
}

/// 默认配置文件路径：`<config_dir>/gh-image-links/settings.json`
pub fn default_settings_path() -> Result<PathBuf, AppError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("获取用户配置目录失败".to_string()))?;
    Ok(config_dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// 读取配置文件，文件不存在时返回默认配置。
pub fn load_from_path(path: &Path) -> Result<UserConfig, AppError> {
    if !path.exists() {
        log::debug!("配置文件不存在，使用默认配置：{}", path.display());
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config = serde_json::from_str::<UserConfig>(&content)
        .map_err(|e| AppError::Config(format!("解析配置文件失败: {}", e)))?;
    Ok(config)
}

/// 以格式化 JSON 写入配置文件。
pub fn save_to_path(path: &Path, config: &UserConfig) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    log::info!("配置已保存：{}", path.display());
    Ok(())
}
