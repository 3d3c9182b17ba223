use network::NetworkError;
use thiserror::Error;

/// 识别错误
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// 包围盒收敛到图像边界后面积为零
    #[error("裁剪区域无效: {0}")]
    InvalidRegion(String),
    /// 网络推理失败
    #[error(transparent)]
    Network(#[from] NetworkError),
}
