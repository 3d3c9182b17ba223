use network::{Network, NetworkError};
use tracing::debug;

use crate::error::RecognitionError;

/// 分类结果
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// 数字标签 (0-9)
    pub label: usize,
    /// 置信度: 输出向量的最大值本身, 不做 softmax 归一化.
    /// 网络输出是否为真实概率无法从权重文件判定, 此处按原始幅值上报
    pub confidence: f32,
}

/// 分类器
///
/// 在整个生命周期内持有一个网络句柄
pub struct Classifier<N: Network> {
    network: N,
}

impl<N: Network> Classifier<N> {
    /// 创建分类器
    ///
    /// # 参数
    ///
    /// * `network` - 预训练网络
    pub fn new(network: N) -> Self {
        Self { network }
    }

    /// 分类特征向量
    ///
    /// 特征向量长度按 28x28 提取时恒等于网络输入宽度, 但仍然显式校验
    ///
    /// # 参数
    ///
    /// * `features` - 特征向量
    pub fn classify(
        &self,
        features: &[f32],
    ) -> Result<Option<ClassificationResult>, RecognitionError> {
        if features.len() != self.network.input_len() {
            return Err(NetworkError::Inference {
                expected: self.network.input_len(),
                actual: features.len(),
            }
            .into());
        }

        let output = self.network.infer(features)?;
        debug!("网络输出向量: {:?}", output);
        Ok(Self::interpret(&output))
    }

    /// 解释输出向量
    ///
    /// 线性扫描取最大值下标为标签, 最大值本身为置信度.
    /// 出现相同最大值时取第一个下标; 输出为空时返回 None ("无结果")
    ///
    /// # 参数
    ///
    /// * `output` - 网络输出向量
    pub fn interpret(output: &[f32]) -> Option<ClassificationResult> {
        if output.is_empty() {
            return None;
        }

        let mut label = 0;
        let mut confidence = f32::NEG_INFINITY;
        for (index, &value) in output.iter().enumerate() {
            if value > confidence {
                label = index;
                confidence = value;
            }
        }
        Some(ClassificationResult { label, confidence })
    }
}
