use serde::{Deserialize, Serialize};

use super::{Provider, RepoCoords, render_link, template_for};

/// 已上传图片的元数据。
///
/// 图片上传完成时创建，之后只读。每种外链类型各有一个预先生成的 URL 字段，
/// 字段名与上传记录的 JSON 保持一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// 图片名，可以带目录前缀。
    pub name: String,
    /// 复制时是否转换为 Markdown 格式。
    #[serde(default)]
    pub is_transform_md: bool,
    pub github_url: String,
    pub jsdelivr_cdn_url: String,
    pub staticaly_cdn_url: String,
    pub zzko_cdn_url: String,
}

impl UploadedImage {
    /// 根据仓库内相对路径一次性生成全部外链。
    pub fn from_path(
        name: impl Into<String>,
        path: &str,
        coords: &RepoCoords,
        is_transform_md: bool,
    ) -> Self {
        Self {
            name: name.into(),
            is_transform_md,
            github_url: render_link(Provider::GitHub, path, coords),
            jsdelivr_cdn_url: render_link(Provider::JsDelivr, path, coords),
            staticaly_cdn_url: render_link(Provider::Staticaly, path, coords),
            zzko_cdn_url: render_link(Provider::Zzko, path, coords),
        }
    }

    /// 读取指定外链类型对应的 URL 字段。
    pub fn url_for(&self, provider: Provider) -> &str {
        (template_for(provider).image_url)(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_fills_every_provider_field() {
        let coords = RepoCoords::new("a", "b", "main");
        let image = UploadedImage::from_path("x.png", "img/x.png", &coords, false);

        for provider in Provider::ALL {
            assert_eq!(image.url_for(provider), render_link(provider, "img/x.png", &coords));
        }
    }

    #[test]
    fn deserializes_upload_record_without_md_flag() {
        let json = r#"{
            "name": "dir/a.png",
            "github_url": "g",
            "jsdelivr_cdn_url": "j",
            "staticaly_cdn_url": "s",
            "zzko_cdn_url": "z"
        }"#;
        let image: UploadedImage = serde_json::from_str(json).expect("record should parse");
        assert!(!image.is_transform_md);
        assert_eq!(image.url_for(Provider::Zzko), "z");
        assert_eq!(image.url_for(Provider::JsDelivr), "j");
    }
}
