use crate::link::{Provider, UploadedImage, template_for, to_markdown_image};
use crate::notify::Notifier;

use super::ExportSurface;

const BATCH_EMPTY_WARNING: &str = "请先选择图片";
const BATCH_SUCCESS: &str = "批量复制图片链接成功";

/// 生成单张图片在指定外链类型下的复制文本。
///
/// 图片标记了 `is_transform_md` 时包装为 Markdown 图片语法，否则为原始 URL。
pub fn format_image_link(image: &UploadedImage, provider: Provider) -> String {
    let url = image.url_for(provider);
    if image.is_transform_md {
        to_markdown_image(&image.name, url)
    } else {
        url.to_string()
    }
}

/// 复制单张图片的外链。
pub fn copy_one(
    surface: &ExportSurface,
    notifier: &dyn Notifier,
    image: &UploadedImage,
    provider: Provider,
) {
    let label = template_for(provider).label;
    let success_info = if image.is_transform_md {
        format!("Markdown 格式的 {}", label)
    } else {
        label.to_string()
    };

    surface.stage(format_image_link(image, provider));
    surface.copy_selection();
    notifier.success(&format!("{} 外链复制成功！", success_info));
}

/// 批量复制多张图片的外链，按顺序以换行拼接（末尾无换行）。
///
/// 列表为空时只清空暂存区并给出警告，不执行复制。
pub fn copy_batch(
    surface: &ExportSurface,
    notifier: &dyn Notifier,
    images: &[UploadedImage],
    provider: Provider,
) {
    surface.stage(String::new());

    if images.is_empty() {
        notifier.warning(BATCH_EMPTY_WARNING);
        return;
    }

    let text = images
        .iter()
        .map(|image| format_image_link(image, provider))
        .collect::<Vec<_>>()
        .join("\n");

    log::debug!("📋 批量复制 {} 条外链（{}）", images.len(), provider);
    surface.stage(text);
    surface.copy_selection();
    notifier.success(BATCH_SUCCESS);
}
