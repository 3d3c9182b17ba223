use common::{Point, Size};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use tracing::debug;

use crate::surface::DrawingSurface;

const INK_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 墨迹画布
///
/// 用 RGBA 缓冲区承载笔画, alpha 通道作为墨迹浓度.
/// 笔画以圆形笔刷沿线段逐步盖章, 形成圆头线条
pub struct InkCanvas {
    buffer: RgbaImage,
    brush_width: f32,
}

impl InkCanvas {
    /// 创建墨迹画布
    ///
    /// # 参数
    ///
    /// * `size` - 画布尺寸
    /// * `brush_width` - 笔刷宽度
    pub fn new(size: Size, brush_width: f32) -> Self {
        Self {
            buffer: RgbaImage::new(size.width, size.height),
            brush_width,
        }
    }

    /// 在指定位置盖章圆形笔刷
    fn stamp(&mut self, center: &Point) {
        let radius = (self.brush_width / 2.0).round() as i32;
        draw_filled_circle_mut(
            &mut self.buffer,
            (center.x.round() as i32, center.y.round() as i32),
            radius,
            INK_COLOR,
        );
    }
}

impl DrawingSurface for InkCanvas {
    fn size(&self) -> Size {
        let (width, height) = self.buffer.dimensions();
        Size { width, height }
    }

    fn snapshot(&self) -> RgbaImage {
        self.buffer.clone()
    }

    fn draw_line(&mut self, from: &Point, to: &Point) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let length = (dx * dx + dy * dy).sqrt();

        self.stamp(from);
        let steps = length.ceil() as u32;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.stamp(&Point {
                x: from.x + dx * t,
                y: from.y + dy * t,
            });
        }
        debug!("绘制笔画: {:?} -> {:?}", from, to);
    }

    fn clear(&mut self) {
        let (width, height) = self.buffer.dimensions();
        self.buffer = RgbaImage::new(width, height);
        debug!("画布已清空");
    }
}
