//! # GitHub 图床外链工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 命令行 (main.rs, clap)                    │
//! │     link ── copy ── init ── config                        │
//! └───────┬───────────────┬───────────────┬──────────────────┘
//!         ↓               ↓               ↓
//!  settings (UserConfig → RepoCoords)     │
//!         ↓               ↓               ↓
//!  ┌─ link ─────────┐  ┌─ export ─────┐  ┌─ repo_init ─────────┐
//!  │ Provider       │→ │ ExportSurface│  │ ContentsApi (PUT)   │
//!  │ render_link    │  │ copy_one     │  │ initialize_repository│
//!  │ to_markdown    │  │ copy_batch   │  └──────────┬──────────┘
//!  └────────────────┘  └──────┬───────┘             │
//!                             ↓                     ↓
//!                     notify (Notifier / LoadingIndicator)
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`link`] | 外链类型、URL 模板查找表、Markdown 包装、图片元数据 |
//! | [`export`] | 暂存区与剪贴板写入，单张 / 批量复制外链 |
//! | [`repo_init`] | 通过 Contents API 创建 README 初始化空仓库 |
//! | [`notify`] | 提示消息与加载状态的能力接口及终端实现 |
//! | [`settings`] | 用户配置文件读写 |

pub mod error;
pub mod export;
pub mod link;
pub mod notify;
pub mod repo_init;
pub mod settings;
