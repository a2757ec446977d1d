//! 用户提示能力接口
//!
//! # 设计思路
//!
//! 外链复制与仓库初始化都需要向用户反馈结果（成功 / 警告 / 错误）
//! 以及在网络请求期间展示加载状态。这两类能力以 trait 注入，
//! 业务函数不依赖具体的展示方式，测试中可替换为记录型替身。
//!
//! # 实现思路
//!
//! - `Notifier`：一次性的提示消息。
//! - `LoadingIndicator`：`service(text)` 开始、`close()` 结束的加载状态。
//! - 命令行下使用 `ConsoleNotifier` / `ConsoleLoading` 输出到终端，
//!   同时写一份 `log` 日志便于排查。

/// 提示消息服务
pub trait Notifier {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// 加载状态服务
pub trait LoadingIndicator {
    /// 展示加载状态。
    fn service(&self, text: &str);
    /// 关闭加载状态。
    fn close(&self);
}

/// 终端提示：成功信息写到 stdout，警告与错误写到 stderr。
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        log::info!("✅ {}", message);
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        log::warn!("{}", message);
        eprintln!("⚠️  {}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
        eprintln!("❌ {}", message);
    }
}

/// 终端加载状态，仅输出开始提示。
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLoading;

impl LoadingIndicator for ConsoleLoading {
    fn service(&self, text: &str) {
        log::debug!("⏳ loading: {}", text);
        eprintln!("{}", text);
    }

    fn close(&self) {
        log::debug!("⏳ loading closed");
    }
}
