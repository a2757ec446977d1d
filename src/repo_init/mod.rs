//! # 仓库初始化模块（repo_init）
//!
//! ## 设计思路
//!
//! GitHub Git Database API 不支持在空仓库上操作，因此需要先在空仓库中
//! 创建一个 `README.md` 把仓库“种”起来。整个流程只有一次 PUT 请求：
//!
//! ```text
//! loading.service("正在初始化仓库...")
//!    ↓
//! ContentsApi::put_file(README.md)
//!    ├─ 201       → loading.close()
//!    └─ 其他/失败 → notifier.error("仓库初始化失败")
//! ```
//!
//! ## 实现思路
//!
//! - `api`：`ContentsApi` 能力接口与基于 `reqwest` 的 `GitHubContentsApi` 实现
//! - `initializer`：固定的提交信息、欢迎文档与状态码分支
//!
//! 单次尝试，不重试，也不区分网络失败与 API 拒绝。

mod api;
mod initializer;

pub use api::{ContentsApi, CreateFileRequest, DEFAULT_API_BASE, GitHubContentsApi};
pub use initializer::{
    INIT_COMMIT_MESSAGE, InitOutcome, README_PATH, WELCOME_DOCUMENT, initialize_repository,
    readme_request,
};
