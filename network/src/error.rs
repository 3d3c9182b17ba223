use thiserror::Error;

/// 网络错误
#[derive(Error, Debug)]
pub enum NetworkError {
    /// 启动期加载预训练网络资源失败, 不可恢复
    #[error("加载网络资源失败: {0}")]
    ResourceLoad(String),
    /// 推理输入长度与网络输入宽度不匹配
    #[error("推理输入长度不匹配: 期望 {expected}, 实际 {actual}")]
    Inference { expected: usize, actual: usize },
}
