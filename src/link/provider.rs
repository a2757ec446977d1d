use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 外链类型（CDN / 镜像选择）。
///
/// 仅作为分派键使用，没有先后顺序语义。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// `cdn.jsdelivr.net`，默认外链类型。
    #[default]
    JsDelivr,
    /// `cdn.staticaly.com`
    Staticaly,
    /// `jsd.cdn.zzko.cn`
    Zzko,
    /// 直接从 GitHub 仓库读取。
    GitHub,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::JsDelivr,
        Provider::Staticaly,
        Provider::Zzko,
        Provider::GitHub,
    ];

    /// 稳定的字符串标签，供配置文件与命令行使用。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JsDelivr => "jsdelivr",
            Self::Staticaly => "staticaly",
            Self::Zzko => "zzko",
            Self::GitHub => "github",
        }
    }

    /// 宽松解析：无法识别的标签回退为 `GitHub`。
    ///
    /// ```
    /// use gh_image_links::link::Provider;
    ///
    /// assert_eq!(Provider::from_tag("zzko"), Provider::Zzko);
    /// assert_eq!(Provider::from_tag("unknown-cdn"), Provider::GitHub);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Self::GitHub)
    }

    /// 严格解析，未知标签返回 `AppError::Config`。
    pub fn parse(tag: &str) -> Result<Self, AppError> {
        match tag.trim().to_lowercase().as_str() {
            "jsdelivr" => Ok(Self::JsDelivr),
            "staticaly" => Ok(Self::Staticaly),
            "zzko" => Ok(Self::Zzko),
            "github" => Ok(Self::GitHub),
            other => Err(AppError::Config(format!(
                "未知外链类型：{}（可选：jsdelivr / staticaly / zzko / github）",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Provider;

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Provider::parse(" JsDelivr ").unwrap(), Provider::JsDelivr);
        assert_eq!(Provider::parse("GITHUB").unwrap(), Provider::GitHub);
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = Provider::parse("imgur").unwrap_err();
        assert!(err.to_string().contains("imgur"));
    }

    #[test]
    fn tags_round_trip_through_as_str() {
        for provider in Provider::ALL {
            assert_eq!(Provider::parse(provider.as_str()).unwrap(), provider);
        }
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Provider::GitHub).unwrap();
        assert_eq!(json, "\"github\"");
        let parsed: Provider = serde_json::from_str("\"staticaly\"").unwrap();
        assert_eq!(parsed, Provider::Staticaly);
    }
}
