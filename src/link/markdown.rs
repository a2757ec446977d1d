/// 截取路径中的文件名部分（最后一个 `/` 或 `\` 之后的内容）。
///
/// 不含分隔符时原样返回。
pub fn file_name(name: &str) -> &str {
    match name.rfind(['/', '\\']) {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// 将图片外链包装为 Markdown 图片语法：`![文件名](url)`。
///
/// ```
/// use gh_image_links::link::to_markdown_image;
///
/// assert_eq!(to_markdown_image("folder/pic.png", "https://u"), "![pic.png](https://u)");
/// ```
pub fn to_markdown_image(display_name: &str, url: &str) -> String {
    format!("![{}]({})", file_name(display_name), url)
}
