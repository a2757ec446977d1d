//! # 外链格式化模块（link）
//!
//! ## 设计思路
//!
//! 图片上传到 GitHub 仓库后，可以通过多个 CDN 镜像或 GitHub 本身访问。
//! 本模块只做纯字符串模板替换，不做任何校验，也不产生副作用：
//!
//! - `coords`：仓库坐标 `(owner, repo, branch)`，会话内只读
//! - `provider`：外链类型标签（jsDelivr / Staticaly / zzko / GitHub）
//! - `template`：唯一的“类型 → 模板函数”查找表，兜底项为 GitHub
//! - `markdown`：Markdown 图片语法包装与文件名截取
//! - `image`：已上传图片的元数据（每种外链一个字段）
//!
//! ## 实现思路
//!
//! 所有按外链类型分派的逻辑（生成 URL、读取图片对应字段、提示文案）
//! 都收敛到 `template::LINK_TEMPLATES` 一张表，新增外链类型只需加一行。

mod coords;
mod image;
mod markdown;
mod provider;
mod template;

pub use coords::RepoCoords;
pub use image::UploadedImage;
pub use markdown::{file_name, to_markdown_image};
pub use provider::Provider;
pub use template::{render_link, render_link_for_tag};

pub(crate) use template::template_for;
