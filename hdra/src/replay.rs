use std::{thread, time::Duration};

use anyhow::Result;
use canvas::{DrawingSurface, InkCanvas};
use common::{Point, percent_string};
use network::Network;
use recognition::{GestureScript, RecognitionPipeline, RecognizeOutcome, RecognizerConfig};
use tracing::{debug, error, info, warn};

/// 回放结果统计
#[derive(Debug, Default)]
struct ReplayStats {
    recognized: u32,
    no_result: u32,
    empty: u32,
}

/// 手势回放器
///
/// 以脚本回放代替真实触摸输入: 逐笔画驱动画布与流水线,
/// 每个字形回放完最后一条笔画后模拟停笔超时, 持令牌触发一次分类
pub struct Replayer {
    inactivity_timeout: Duration,
    wait: bool,
    stats: ReplayStats,
}

impl Replayer {
    /// 创建手势回放器
    ///
    /// # 参数
    ///
    /// * `config` - 识别器配置
    /// * `wait` - 是否真实等待停笔超时
    pub fn new(config: &RecognizerConfig, wait: bool) -> Self {
        Self {
            inactivity_timeout: Duration::from_millis(config.inactivity_timeout_ms),
            wait,
            stats: ReplayStats::default(),
        }
    }

    /// 回放一条笔画
    ///
    /// # 参数
    ///
    /// * `pipeline` - 识别流水线
    /// * `canvas` - 墨迹画布
    /// * `stroke` - 墨迹点序列
    fn replay_stroke<N: Network>(
        pipeline: &mut RecognitionPipeline<N>,
        canvas: &mut InkCanvas,
        stroke: &[Point],
    ) {
        let Some(first) = stroke.first() else {
            return;
        };
        pipeline.ink_begin(first);

        if stroke.len() == 1 {
            // 单点笔画绘制圆点
            canvas.draw_line(first, first);
            return;
        }

        let mut last = first;
        for point in &stroke[1..] {
            canvas.draw_line(last, point);
            pipeline.ink_move(point);
            last = point;
        }
    }

    /// 回放手势脚本
    ///
    /// 字形内每条笔画结束都会签发分类令牌, 下一条笔画开始时令牌被作废,
    /// 只有最后一条笔画的令牌真正触发分类
    ///
    /// # 参数
    ///
    /// * `script` - 手势脚本
    /// * `pipeline` - 识别流水线
    /// * `canvas` - 墨迹画布
    pub fn replay<N: Network>(
        &mut self,
        script: &GestureScript,
        pipeline: &mut RecognitionPipeline<N>,
        canvas: &mut InkCanvas,
    ) -> Result<()> {
        for (index, glyph) in script.glyphs.iter().enumerate() {
            info!(
                "回放第 {} 个字形, 共 {} 条笔画",
                index + 1,
                glyph.strokes.len()
            );

            let mut token = None;
            for stroke in &glyph.strokes {
                Self::replay_stroke(pipeline, canvas, stroke);
                token = Some(pipeline.ink_end());
            }
            let Some(token) = token else {
                warn!("字形没有任何笔画, 跳过");
                continue;
            };

            if self.wait {
                thread::sleep(self.inactivity_timeout);
            }

            match pipeline.classify(canvas, &token) {
                Ok(RecognizeOutcome::Recognized(result)) => {
                    info!(
                        "输出: {}, 置信度: {}",
                        result.label,
                        percent_string(result.confidence)
                    );
                    self.stats.recognized += 1;
                }
                Ok(RecognizeOutcome::NoResult) => {
                    error!("输出: Error (网络输出不可解释)");
                    self.stats.no_result += 1;
                }
                Ok(RecognizeOutcome::EmptyCanvas) => {
                    warn!("字形没有可识别的内容");
                    self.stats.empty += 1;
                }
                Ok(RecognizeOutcome::Superseded) => {
                    debug!("分类触发已被作废, 跳过");
                }
                Err(e) => {
                    // 单次手势的失败不中断回放
                    error!("识别失败: {}", e);
                    self.stats.no_result += 1;
                }
            }
        }
        Ok(())
    }

    /// 打印回放统计
    pub fn print_stats(&self) {
        info!(
            "回放结果: 识别成功 {} 个, 无结果 {} 个, 空白 {} 个",
            self.stats.recognized, self.stats.no_result, self.stats.empty
        );
    }
}
