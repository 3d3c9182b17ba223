use common::Rect;
use image::{
    RgbaImage,
    imageops::{self, FilterType},
};
use tracing::debug;

use crate::error::RecognitionError;

/// 缩放后内容的最大边长
pub const SCALED_MAX: u32 = 20;
/// 归一化画布边长
pub const NORMALIZED_SIZE: u32 = 28;

/// 图像归一化器
///
/// 裁剪 -> 保持纵横比缩放 -> 居中填充到 28x28, 步骤顺序决定结果可复现
pub struct ImageNormalizer;

impl ImageNormalizer {
    /// 裁剪包围盒区域
    ///
    /// 包围盒先收敛到图像边界内再向下取整到整数像素,
    /// 收敛后面积为零时返回 `InvalidRegion`
    ///
    /// # 参数
    ///
    /// * `image` - 源图像
    /// * `rect` - 包围盒
    fn crop(image: &RgbaImage, rect: &Rect) -> Result<RgbaImage, RecognitionError> {
        let (width, height) = image.dimensions();
        let x0 = rect.min_x.max(0.0).floor();
        let y0 = rect.min_y.max(0.0).floor();
        let x1 = rect.max_x.min(width as f32).floor();
        let y1 = rect.max_y.min(height as f32).floor();

        if x1 - x0 < 1.0 || y1 - y0 < 1.0 {
            return Err(RecognitionError::InvalidRegion(format!(
                "包围盒收敛后面积为零: {:?}",
                rect
            )));
        }

        Ok(imageops::crop_imm(
            image,
            x0 as u32,
            y0 as u32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        )
        .to_image())
    }

    /// 保持纵横比缩放
    ///
    /// 长边缩放到 20, 短边按比例取整, 每边不超过 20 且不小于 1.
    /// 使用最近邻插值, 保留每个目标像素的墨迹有无而不是混合边缘
    ///
    /// # 参数
    ///
    /// * `image` - 裁剪后的图像
    fn scale(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let scale = SCALED_MAX as f32 / width.max(height) as f32;
        let scaled_width = ((width as f32 * scale).round() as u32).clamp(1, SCALED_MAX);
        let scaled_height = ((height as f32 * scale).round() as u32).clamp(1, SCALED_MAX);
        imageops::resize(image, scaled_width, scaled_height, FilterType::Nearest)
    }

    /// 居中填充到 28x28 透明画布
    ///
    /// 偏移量为 `(28 - 边长) / 2` 整数向下取整除法,
    /// 填充量为奇数时多出的一个像素固定落在右/下侧
    ///
    /// # 参数
    ///
    /// * `image` - 缩放后的图像
    fn center(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let mut normalized = RgbaImage::new(NORMALIZED_SIZE, NORMALIZED_SIZE);
        let x = (NORMALIZED_SIZE - width) / 2;
        let y = (NORMALIZED_SIZE - height) / 2;
        imageops::replace(&mut normalized, image, x as i64, y as i64);
        normalized
    }

    /// 归一化图像
    ///
    /// # 参数
    ///
    /// * `image` - 源图像快照
    /// * `rect` - 墨迹包围盒
    pub fn normalize(image: &RgbaImage, rect: &Rect) -> Result<RgbaImage, RecognitionError> {
        let cropped = Self::crop(image, rect)?;
        let scaled = Self::scale(&cropped);
        debug!(
            "图像归一化: 裁剪 {:?} -> 缩放 {:?}",
            cropped.dimensions(),
            scaled.dimensions()
        );
        Ok(Self::center(&scaled))
    }
}
