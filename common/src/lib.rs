use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

//常用结构体

/// 尺寸
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    #[schemars(title = "宽度")]
    pub width: u32,
    #[schemars(title = "高度")]
    pub height: u32,
}

/// 画布坐标点
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    #[schemars(title = "X 坐标")]
    pub x: f32,
    #[schemars(title = "Y 坐标")]
    pub y: f32,
}

/// 轴对齐矩形
///
/// 不变量: `max_x >= min_x`, `max_y >= min_y`
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    #[schemars(title = "左边界")]
    pub min_x: f32,
    #[schemars(title = "上边界")]
    pub min_y: f32,
    #[schemars(title = "右边界")]
    pub max_x: f32,
    #[schemars(title = "下边界")]
    pub max_y: f32,
}

impl Rect {
    /// 矩形宽度
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// 矩形高度
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// 矩形面积
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// 点是否在矩形内 (含边界)
    ///
    /// # 参数
    ///
    /// - `point` - 点坐标
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// 以点为中心生成正方形矩形
///
/// # 参数
///
/// - `point` - 中心点坐标
/// - `side` - 边长
pub fn square_rect_around(point: &Point, side: f32) -> Rect {
    let half = side / 2.0;
    Rect {
        min_x: point.x - half,
        min_y: point.y - half,
        max_x: point.x + half,
        max_y: point.y + half,
    }
}

/// 置信度转百分比字符串
///
/// 乘以 100 后保留两位小数, 例如 `0.9342` -> `93.42%`
///
/// # 参数
///
/// - `confidence` - 置信度 (0-1)
pub fn percent_string(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}
