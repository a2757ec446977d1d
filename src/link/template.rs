//! 外链模板查找表。
//!
//! 每种外链类型对应一行：模板函数、提示文案、图片元数据中的字段。
//! 未识别的标签统一落到 `default_template()`（GitHub）。

use super::{Provider, RepoCoords, UploadedImage};

pub(crate) struct LinkTemplate {
    pub(crate) provider: Provider,
    /// 复制成功提示中使用的名称，例如 `jsDelivr CDN`。
    pub(crate) label: &'static str,
    pub(crate) render: fn(&RepoCoords, &str) -> String,
    pub(crate) image_url: fn(&UploadedImage) -> &str,
}

static LINK_TEMPLATES: [LinkTemplate; 4] = [
    LinkTemplate {
        provider: Provider::Staticaly,
        label: "Staticaly CDN",
        render: staticaly_link,
        image_url: staticaly_url,
    },
    LinkTemplate {
        provider: Provider::Zzko,
        label: "zzko CDN",
        render: zzko_link,
        image_url: zzko_url,
    },
    LinkTemplate {
        provider: Provider::JsDelivr,
        label: "jsDelivr CDN",
        render: jsdelivr_link,
        image_url: jsdelivr_url,
    },
    LinkTemplate {
        provider: Provider::GitHub,
        label: "GitHub",
        render: github_link,
        image_url: github_url,
    },
];

fn default_template() -> &'static LinkTemplate {
    &LINK_TEMPLATES[3]
}

fn staticaly_link(c: &RepoCoords, path: &str) -> String {
    format!("https://cdn.staticaly.com/gh/{}/{}@{}/{}", c.owner(), c.repo(), c.branch(), path)
}

fn zzko_link(c: &RepoCoords, path: &str) -> String {
    format!("https://jsd.cdn.zzko.cn/gh/{}/{}@{}/{}", c.owner(), c.repo(), c.branch(), path)
}

fn jsdelivr_link(c: &RepoCoords, path: &str) -> String {
    format!("https://cdn.jsdelivr.net/gh/{}/{}@{}/{}", c.owner(), c.repo(), c.branch(), path)
}

fn github_link(c: &RepoCoords, path: &str) -> String {
    format!("https://github.com/{}/{}/raw/{}/{}", c.owner(), c.repo(), c.branch(), path)
}

fn staticaly_url(image: &UploadedImage) -> &str {
    &image.staticaly_cdn_url
}

fn zzko_url(image: &UploadedImage) -> &str {
    &image.zzko_cdn_url
}

fn jsdelivr_url(image: &UploadedImage) -> &str {
    &image.jsdelivr_cdn_url
}

fn github_url(image: &UploadedImage) -> &str {
    &image.github_url
}

pub(crate) fn template_for(provider: Provider) -> &'static LinkTemplate {
    LINK_TEMPLATES
        .iter()
        .find(|t| t.provider == provider)
        .unwrap_or_else(default_template)
}

fn template_for_tag(tag: &str) -> &'static LinkTemplate {
    match Provider::parse(tag) {
        Ok(provider) => template_for(provider),
        Err(_) => default_template(),
    }
}

/// 按外链类型生成图片外链。
///
/// 不校验 `path` 与仓库坐标，非法输入只会得到非法 URL。
///
/// ```
/// use gh_image_links::link::{Provider, RepoCoords, render_link};
///
/// let coords = RepoCoords::new("a", "b", "main");
/// assert_eq!(
///     render_link(Provider::GitHub, "img/x.png", &coords),
///     "https://github.com/a/b/raw/main/img/x.png"
/// );
/// ```
pub fn render_link(provider: Provider, path: &str, coords: &RepoCoords) -> String {
    (template_for(provider).render)(coords, path)
}

/// 按字符串标签生成外链；无法识别的标签使用 GitHub 模板。
pub fn render_link_for_tag(tag: &str, path: &str, coords: &RepoCoords) -> String {
    (template_for_tag(tag).render)(coords, path)
}
