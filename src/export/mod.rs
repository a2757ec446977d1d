//! # 外链复制模块（export）
//!
//! ## 设计思路
//!
//! 将格式化好的外链文本写入“暂存区”，再整体复制到系统剪贴板。
//! 暂存区在应用启动时显式创建一次，并以引用形式传给复制函数，
//! 不依赖全局查找。
//!
//! - `surface`：暂存区 `ExportSurface`、单例槽 `SurfaceSlot`、剪贴板后端
//! - `exporter`：单张复制 `copy_one` 与批量复制 `copy_batch`
//!
//! ## 实现思路
//!
//! 复制命令失败（例如无图形环境、剪贴板不可用）只记录 `warn` 日志，
//! 不向调用方报错，成功提示照常发出。
//! 连续两次复制时后一次会直接覆盖暂存区内容，这里不做任何串行化。

mod exporter;
mod surface;

pub use exporter::{copy_batch, copy_one, format_image_link};
pub use surface::{ClipboardBackend, ExportSurface, MemoryClipboard, SurfaceSlot, SystemClipboard};
