use common::{Point, Size};
use image::RgbaImage;

/// 画布接口
///
/// 绘制表面是识别核心的外部协作者: 提供墨迹快照, 接受清空命令
pub trait DrawingSurface {
    /// 画布尺寸
    fn size(&self) -> Size;
    /// 获取画布只读快照
    ///
    /// alpha 通道作为墨迹浓度 (0-255)
    fn snapshot(&self) -> RgbaImage;
    /// 绘制一段笔画
    ///
    /// 起点与终点相同时绘制一个圆点
    ///
    /// # 参数
    ///
    /// * `from` - 笔画起点
    /// * `to` - 笔画终点
    fn draw_line(&mut self, from: &Point, to: &Point);
    /// 清空画布
    fn clear(&mut self);
}
