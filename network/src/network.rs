use crate::error::NetworkError;

/// 神经网络接口
///
/// 预训练网络只通过该接口消费: 任何满足 `infer` 约定的实现都可以作为分类后端
pub trait Network {
    /// 网络输入向量长度
    fn input_len(&self) -> usize;
    /// 网络输出向量长度
    fn output_len(&self) -> usize;
    /// 前向推理
    ///
    /// # 参数
    ///
    /// * `features` - 特征向量, 长度必须等于 `input_len`
    fn infer(&self, features: &[f32]) -> Result<Vec<f32>, NetworkError>;
}
