use std::cell::Cell;
use std::rc::Rc;

use canvas::DrawingSurface;
use common::{Point, Rect, percent_string};
use network::Network;
use tracing::{debug, info, warn};

use crate::classifier::{ClassificationResult, Classifier};
use crate::config::RecognizerConfig;
use crate::error::RecognitionError;
use crate::features::FeatureExtractor;
use crate::normalizer::ImageNormalizer;
use crate::tracker::BoundingBoxTracker;

/// 流水线状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// 空闲, 等待第一个墨迹点
    Idle,
    /// 包围盒打开, 墨迹累积中
    Drawing,
    /// 正在执行分类
    Classifying,
}

/// 单次分类触发令牌
///
/// 停笔超时到期后由调用方持令牌触发分类.
/// 新手势开始时未消费的令牌会被作废, 作废令牌触发的分类是空操作而不是迟到的重复调用
#[derive(Debug, Clone)]
pub struct ClassifyToken {
    cancelled: Rc<Cell<bool>>,
}

impl ClassifyToken {
    fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// 令牌是否已被作废
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// 一次分类尝试的结果
#[derive(Debug)]
pub enum RecognizeOutcome {
    /// 识别成功
    Recognized(ClassificationResult),
    /// 网络输出为空, 无法解释 (以错误标签呈现给用户, 不是崩溃)
    NoResult,
    /// 画布无内容或包围盒区域无效, 跳过分类
    EmptyCanvas,
    /// 分类触发已被新手势作废, 本次调用为空操作
    Superseded,
}

/// 识别流水线
///
/// 串联包围盒跟踪 -> 图像归一化 -> 特征提取 -> 分类.
/// 每次分类尝试使用自己的一次性快照, 调用之间不共享可变状态
pub struct RecognitionPipeline<N: Network> {
    tracker: BoundingBoxTracker,
    classifier: Classifier<N>,
    state: PipelineState,
    pending: Option<ClassifyToken>,
}

impl<N: Network> RecognitionPipeline<N> {
    /// 创建识别流水线
    ///
    /// # 参数
    ///
    /// * `network` - 预训练网络, 流水线整个生命周期持有
    /// * `config` - 识别器配置
    pub fn new(network: N, config: &RecognizerConfig) -> Self {
        Self {
            tracker: BoundingBoxTracker::new(config.brush_width, config.margin),
            classifier: Classifier::new(network),
            state: PipelineState::Idle,
            pending: None,
        }
    }

    /// 当前流水线状态
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// 当前墨迹包围盒 (UI 层可用于快照框展示)
    pub fn bounding_box(&self) -> Option<Rect> {
        self.tracker.current()
    }

    /// 墨迹开始
    ///
    /// 作废上一次手势未消费的分类令牌, 并打开包围盒
    ///
    /// # 参数
    ///
    /// * `point` - 手势起始点
    pub fn ink_begin(&mut self, point: &Point) {
        if let Some(token) = self.pending.take() {
            token.cancel();
            debug!("作废上一次手势的分类令牌");
        }
        self.tracker.begin(point);
        self.state = PipelineState::Drawing;
    }

    /// 墨迹移动, 扩张包围盒
    ///
    /// # 参数
    ///
    /// * `point` - 新到达的墨迹点
    pub fn ink_move(&mut self, point: &Point) {
        self.tracker.extend(point);
    }

    /// 墨迹结束, 签发单次分类令牌
    pub fn ink_end(&mut self) -> ClassifyToken {
        let token = ClassifyToken::new();
        self.pending = Some(token.clone());
        token
    }

    /// 执行一次分类尝试
    ///
    /// 除令牌被作废外, 任何返回路径 (成功, 无结果, 区域无效或推理失败)
    /// 都会重置包围盒并清空画布, 失败不得留下污染下一次手势的状态
    ///
    /// # 参数
    ///
    /// * `surface` - 绘制表面
    /// * `token` - 分类令牌
    pub fn classify(
        &mut self,
        surface: &mut dyn DrawingSurface,
        token: &ClassifyToken,
    ) -> Result<RecognizeOutcome, RecognitionError> {
        if token.is_cancelled() {
            debug!("分类令牌已作废, 跳过本次分类");
            return Ok(RecognizeOutcome::Superseded);
        }
        self.pending = None;
        self.state = PipelineState::Classifying;

        let outcome = self.classify_inner(surface);

        self.tracker.reset();
        surface.clear();
        self.state = PipelineState::Idle;
        outcome
    }

    /// 分类主体: 归一化 -> 特征提取 -> 分类
    fn classify_inner(
        &self,
        surface: &mut dyn DrawingSurface,
    ) -> Result<RecognizeOutcome, RecognitionError> {
        let Some(rect) = self.tracker.current() else {
            debug!("没有墨迹包围盒, 跳过分类");
            return Ok(RecognizeOutcome::EmptyCanvas);
        };

        let snapshot = surface.snapshot();
        let normalized = match ImageNormalizer::normalize(&snapshot, &rect) {
            Ok(image) => image,
            Err(RecognitionError::InvalidRegion(reason)) => {
                warn!("包围盒区域无效, 跳过分类: {}", reason);
                return Ok(RecognizeOutcome::EmptyCanvas);
            }
            Err(e) => return Err(e),
        };

        let features = FeatureExtractor::extract(&normalized);
        match self.classifier.classify(&features)? {
            Some(result) => {
                info!(
                    "识别到数字: {}, 置信度: {}",
                    result.label,
                    percent_string(result.confidence)
                );
                Ok(RecognizeOutcome::Recognized(result))
            }
            None => {
                warn!("网络输出为空, 无法解释");
                Ok(RecognizeOutcome::NoResult)
            }
        }
    }
}
