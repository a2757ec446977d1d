use std::sync::{Arc, Mutex};
#[cfg(target_os = "linux")]
use std::time::Instant;
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::error::AppError;

/// 剪贴板后端：把一段文本写入剪贴板。
pub trait ClipboardBackend: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), AppError>;
}

/// 系统剪贴板（arboard）。
///
/// 每次写入都新建 `arboard::Clipboard`，不跨调用持有句柄。
///
/// X11 / Wayland 下剪贴板内容由写入方进程负责提供，进程退出后内容随之消失。
/// 短命进程（命令行）应通过 `holding` 设置保持时长：写入后阻塞，
/// 直到其他程序（如剪贴板管理器）接管内容或到达期限。
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// 写入后在 Linux 上保持剪贴板所有权至多 `hold`。
    pub fn holding(hold: Duration) -> Self {
        Self { hold: Some(hold) }
    }

    /// 当前配置的保持时长。
    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

impl ClipboardBackend for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), AppError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(e.to_string()))?;

        #[cfg(target_os = "linux")]
        if let Some(hold) = self.hold {
            use arboard::SetExtLinux;

            log::debug!("📌 保持剪贴板所有权至多 {} 秒", hold.as_secs());
            return clipboard
                .set()
                .wait_until(Instant::now() + hold)
                .text(text.to_owned())
                .map_err(|e| AppError::Clipboard(e.to_string()));
        }

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| AppError::Clipboard(e.to_string()))?;
        Ok(())
    }
}

/// 进程内剪贴板，记录每一次写入。
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    history: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次写入的文本。
    pub fn contents(&self) -> Option<String> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }

    /// 写入次数。
    pub fn copy_count(&self) -> usize {
        self.history.lock().map(|h| h.len()).unwrap_or(0)
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<(), AppError> {
        self.history
            .lock()
            .map_err(|_| AppError::Clipboard("内存剪贴板锁已中毒".to_string()))?
            .push(text.to_owned());
        Ok(())
    }
}

/// 外链文本暂存区。
///
/// 每次复制前整体覆盖内容，复制时取全部文本写入剪贴板。
pub struct ExportSurface {
    text: Mutex<String>,
    backend: Arc<dyn ClipboardBackend>,
}

impl ExportSurface {
    pub fn new(backend: Arc<dyn ClipboardBackend>) -> Self {
        Self {
            text: Mutex::new(String::new()),
            backend,
        }
    }

    /// 使用系统剪贴板创建暂存区。
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClipboard::default()))
    }

    /// 使用系统剪贴板创建暂存区，写入后保持剪贴板所有权至多 `hold`。
    pub fn system_holding(hold: Duration) -> Self {
        Self::new(Arc::new(SystemClipboard::holding(hold)))
    }

    /// 覆盖暂存区内容。
    pub fn stage(&self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("📝 暂存外链文本 - {} 字符", text.chars().count());
        match self.text.lock() {
            Ok(mut staged) => *staged = text,
            Err(poisoned) => *poisoned.into_inner() = text,
        }
    }

    /// 当前暂存内容。
    pub fn staged(&self) -> String {
        match self.text.lock() {
            Ok(staged) => staged.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 选中全部暂存文本并复制到剪贴板。
    ///
    /// 剪贴板不可用时只记录日志，不报错。
    pub fn copy_selection(&self) {
        let text = self.staged();
        if let Err(err) = self.backend.copy_text(&text) {
            log::warn!("复制到剪贴板失败（已忽略）：{}", err);
        }
    }
}

/// 暂存区单例槽。
///
/// `get_or_create` 只在第一次调用时创建暂存区，之后始终返回同一个引用。
pub struct SurfaceSlot {
    cell: OnceCell<ExportSurface>,
}

impl SurfaceSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_create<F>(&self, create: F) -> &ExportSurface
    where
        F: FnOnce() -> ExportSurface,
    {
        self.cell.get_or_init(|| {
            log::debug!("🆕 创建外链暂存区");
            create()
        })
    }
}

impl Default for SurfaceSlot {
    fn default() -> Self {
        Self::new()
    }
}
