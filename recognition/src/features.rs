use image::RgbaImage;

use crate::normalizer::NORMALIZED_SIZE;

/// 特征提取器
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// 将归一化图像展开为特征向量
    ///
    /// 行优先顺序 (y 外层, x 内层), 每个像素取 alpha 通道除以 255.
    /// 该顺序是外部网络的输入约定, 不可改变
    ///
    /// # 参数
    ///
    /// * `image` - 28x28 归一化图像
    pub fn extract(image: &RgbaImage) -> Vec<f32> {
        debug_assert_eq!(image.dimensions(), (NORMALIZED_SIZE, NORMALIZED_SIZE));
        let (width, height) = image.dimensions();
        let mut features = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                features.push(image.get_pixel(x, y).0[3] as f32 / 255.0);
            }
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_length_and_range() {
        let mut image = RgbaImage::new(NORMALIZED_SIZE, NORMALIZED_SIZE);
        image.put_pixel(10, 10, Rgba([0, 0, 0, 128]));

        let features = FeatureExtractor::extract(&image);
        assert_eq!(features.len(), 784);
        assert!(features.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_row_major_order() {
        let mut image = RgbaImage::new(NORMALIZED_SIZE, NORMALIZED_SIZE);
        image.put_pixel(3, 2, Rgba([0, 0, 0, 255]));

        let features = FeatureExtractor::extract(&image);
        assert_eq!(features[(2 * NORMALIZED_SIZE + 3) as usize], 1.0);
        assert_eq!(features.iter().filter(|&&v| v > 0.0).count(), 1);
    }

    #[test]
    fn test_alpha_scaling() {
        let mut image = RgbaImage::new(NORMALIZED_SIZE, NORMALIZED_SIZE);
        image.put_pixel(0, 0, Rgba([255, 255, 255, 51]));

        let features = FeatureExtractor::extract(&image);
        assert!((features[0] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut image = RgbaImage::new(NORMALIZED_SIZE, NORMALIZED_SIZE);
        for i in 0..NORMALIZED_SIZE {
            image.put_pixel(i, i, Rgba([0, 0, 0, (i * 9) as u8]));
        }

        let first = FeatureExtractor::extract(&image);
        let second = FeatureExtractor::extract(&image);
        assert_eq!(first, second);
    }
}
