use common::{Point, Rect, square_rect_around};
use tracing::debug;

/// 包围盒向外扩张 (纯函数)
///
/// 逐轴逐方向判断: 点越过某一边界时, 该边界外推 `brush_width + margin`.
/// 点落在包围盒内部时不做任何修改, 包围盒只增不减
///
/// # 参数
///
/// * `rect` - 当前包围盒
/// * `point` - 新到达的墨迹点
/// * `brush_width` - 笔刷宽度
/// * `margin` - 外边距
pub fn extend_rect(rect: &Rect, point: &Point, brush_width: f32, margin: f32) -> Rect {
    let pad = brush_width + margin;
    let mut rect = *rect;
    if point.x < rect.min_x {
        rect.min_x = point.x - pad;
    } else if point.x > rect.max_x {
        rect.max_x = point.x + pad;
    }
    if point.y < rect.min_y {
        rect.min_y = point.y - pad;
    } else if point.y > rect.max_y {
        rect.max_y = point.y + pad;
    }
    rect
}

/// 墨迹包围盒跟踪器
///
/// 在一次手势内维护所有墨迹点的最小外接矩形 (带外边距).
/// 手势之外不存在包围盒; 包围盒一旦打开, 直到显式 `reset` 前保持打开
pub struct BoundingBoxTracker {
    brush_width: f32,
    margin: f32,
    rect: Option<Rect>,
}

impl BoundingBoxTracker {
    /// 创建包围盒跟踪器
    ///
    /// # 参数
    ///
    /// * `brush_width` - 笔刷宽度
    /// * `margin` - 外边距
    pub fn new(brush_width: f32, margin: f32) -> Self {
        Self {
            brush_width,
            margin,
            rect: None,
        }
    }

    /// 手势开始
    ///
    /// 仅在没有包围盒时, 以点为中心初始化边长为笔刷宽度的正方形包围盒
    ///
    /// # 参数
    ///
    /// * `point` - 手势起始点
    pub fn begin(&mut self, point: &Point) {
        if self.rect.is_none() {
            let rect = square_rect_around(point, self.brush_width);
            debug!("打开包围盒: {:?}", rect);
            self.rect = Some(rect);
        }
    }

    /// 墨迹点到达, 向外扩张包围盒
    ///
    /// # 参数
    ///
    /// * `point` - 新到达的墨迹点
    pub fn extend(&mut self, point: &Point) {
        if let Some(rect) = &self.rect {
            self.rect = Some(extend_rect(rect, point, self.brush_width, self.margin));
        }
    }

    /// 当前包围盒
    pub fn current(&self) -> Option<Rect> {
        self.rect
    }

    /// 丢弃包围盒
    ///
    /// 每次分类尝试之后调用, 无论成功与否
    pub fn reset(&mut self) {
        self.rect = None;
    }
}
