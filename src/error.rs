//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，供配置读写、剪贴板写入与
//! GitHub Contents API 调用共用，避免各模块分散的 `.map_err(|e| e.to_string())`。
//!
//! 注意：外链复制与仓库初始化本身不向调用方抛错，失败在发生处直接
//! 通过 `Notifier` 告知用户。`AppError` 只在能力接口（剪贴板、HTTP、配置）
//! 的边界上流动。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `std::io::Error` / `serde_json::Error` 提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，便于以 JSON 形式输出。

use serde::Serialize;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板读写操作失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 网络请求失败（连接、发送、读取响应）
    #[error("网络错误: {0}")]
    Network(String),

    /// 用户配置缺失或不合法
    #[error("配置错误: {0}")]
    Config(String),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化 / 反序列化失败
    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
