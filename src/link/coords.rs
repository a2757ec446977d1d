use serde::{Deserialize, Serialize};

/// 仓库坐标：图片所在的 `owner / repo / branch`。
///
/// 由用户配置在会话开始时给出，格式化与仓库初始化均只读使用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCoords {
    owner: String,
    repo: String,
    branch: String,
}

impl RepoCoords {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }
}
