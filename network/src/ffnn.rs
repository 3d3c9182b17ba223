use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NetworkError;
use crate::network::Network;

/// 激活函数
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Sigmoid,
    Relu,
    Identity,
}

impl Activation {
    /// 对向量逐元素应用激活函数
    fn apply(&self, z: Array1<f32>) -> Array1<f32> {
        match self {
            Activation::Sigmoid => z.mapv(|v| 1.0 / (1.0 + (-v).exp())),
            Activation::Relu => z.mapv(|v| v.max(0.0)),
            Activation::Identity => z,
        }
    }
}

/// 权重文件中的网络层
#[derive(Serialize, Deserialize, Debug, Clone)]
struct LayerDoc {
    weights: Vec<Vec<f32>>,
    biases: Vec<f32>,
    activation: Activation,
}

/// 权重文件文档
#[derive(Serialize, Deserialize, Debug, Clone)]
struct NetworkDoc {
    input_size: usize,
    layers: Vec<LayerDoc>,
}

/// 已加载的网络层
struct Layer {
    weights: Array2<f32>,
    biases: Array1<f32>,
    activation: Activation,
}

/// 从权重文件加载的前馈神经网络
///
/// 权重文件为 JSON 文档: `{ input_size, layers: [{ weights, biases, activation }] }`,
/// 其中 `weights` 按行存储, 每行长度等于上一层的输出长度
pub struct FfnnNetwork {
    input_size: usize,
    layers: Vec<Layer>,
}

impl FfnnNetwork {
    /// 从权重文件加载网络
    ///
    /// 仅在启动期调用一次, 失败不可恢复
    ///
    /// # 参数
    ///
    /// * `path` - 权重文件路径
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            NetworkError::ResourceLoad(format!("读取权重文件 {} 失败: {}", path.display(), e))
        })?;
        let doc: NetworkDoc = serde_json::from_slice(&data)
            .map_err(|e| NetworkError::ResourceLoad(format!("解析权重文件失败: {}", e)))?;
        let network = Self::from_doc(doc)?;
        debug!(
            "前馈神经网络加载成功: {} 层, 输入 {}, 输出 {}",
            network.layers.len(),
            network.input_len(),
            network.output_len()
        );
        Ok(network)
    }

    /// 校验并构建网络层
    fn from_doc(doc: NetworkDoc) -> Result<Self, NetworkError> {
        if doc.input_size == 0 {
            return Err(NetworkError::ResourceLoad("网络输入长度不能为零".into()));
        }
        if doc.layers.is_empty() {
            return Err(NetworkError::ResourceLoad("网络层不能为空".into()));
        }

        let mut layers = Vec::with_capacity(doc.layers.len());
        let mut prev_size = doc.input_size;
        for (index, layer) in doc.layers.into_iter().enumerate() {
            let rows = layer.weights.len();
            if rows == 0 || rows != layer.biases.len() {
                return Err(NetworkError::ResourceLoad(format!(
                    "第 {} 层权重行数 {} 与偏置长度 {} 不匹配",
                    index,
                    rows,
                    layer.biases.len()
                )));
            }
            let mut flat = Vec::with_capacity(rows * prev_size);
            for row in &layer.weights {
                if row.len() != prev_size {
                    return Err(NetworkError::ResourceLoad(format!(
                        "第 {} 层权重列数 {} 与上一层输出长度 {} 不匹配",
                        index,
                        row.len(),
                        prev_size
                    )));
                }
                flat.extend_from_slice(row);
            }
            let weights = Array2::from_shape_vec((rows, prev_size), flat)
                .map_err(|e| NetworkError::ResourceLoad(format!("构建权重矩阵失败: {}", e)))?;
            layers.push(Layer {
                weights,
                biases: Array1::from_vec(layer.biases),
                activation: layer.activation,
            });
            prev_size = rows;
        }

        Ok(Self {
            input_size: doc.input_size,
            layers,
        })
    }
}

impl Network for FfnnNetwork {
    fn input_len(&self) -> usize {
        self.input_size
    }

    fn output_len(&self) -> usize {
        self.layers
            .last()
            .map(|layer| layer.biases.len())
            .unwrap_or(0)
    }

    fn infer(&self, features: &[f32]) -> Result<Vec<f32>, NetworkError> {
        if features.len() != self.input_size {
            return Err(NetworkError::Inference {
                expected: self.input_size,
                actual: features.len(),
            });
        }

        let mut x = Array1::from_vec(features.to_vec());
        for layer in &self.layers {
            let z = layer.weights.dot(&x) + &layer.biases;
            x = layer.activation.apply(z);
        }
        Ok(x.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2 输入 -> 2 输出的恒等网络文档
    fn identity_doc() -> NetworkDoc {
        NetworkDoc {
            input_size: 2,
            layers: vec![LayerDoc {
                weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
                biases: vec![0.0, 0.0],
                activation: Activation::Identity,
            }],
        }
    }

    fn write_temp_doc(name: &str, doc: &NetworkDoc) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("hdra-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, serde_json::to_string(doc).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load_and_infer_identity() {
        let path = write_temp_doc("identity", &identity_doc());
        let network = FfnnNetwork::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(network.input_len(), 2);
        assert_eq!(network.output_len(), 2);
        let output = network.infer(&[0.25, 0.75]).unwrap();
        assert_eq!(output, vec![0.25, 0.75]);
    }

    #[test]
    fn test_infer_two_layers_with_activation() {
        let doc = NetworkDoc {
            input_size: 2,
            layers: vec![
                LayerDoc {
                    weights: vec![vec![1.0, 1.0], vec![1.0, -1.0]],
                    biases: vec![0.0, 0.0],
                    activation: Activation::Relu,
                },
                LayerDoc {
                    weights: vec![vec![1.0, 0.0]],
                    biases: vec![0.5],
                    activation: Activation::Identity,
                },
            ],
        };
        let network = FfnnNetwork::from_doc(doc).unwrap();

        // 第一层: [3.0, -1.0] -> relu -> [3.0, 0.0], 第二层: 3.0 + 0.5
        let output = network.infer(&[1.0, 2.0]).unwrap();
        assert_eq!(output, vec![3.5]);
    }

    #[test]
    fn test_sigmoid_activation_range() {
        let doc = NetworkDoc {
            input_size: 1,
            layers: vec![LayerDoc {
                weights: vec![vec![10.0]],
                biases: vec![0.0],
                activation: Activation::Sigmoid,
            }],
        };
        let network = FfnnNetwork::from_doc(doc).unwrap();
        let output = network.infer(&[1.0]).unwrap();
        assert!(output[0] > 0.99 && output[0] < 1.0);
    }

    #[test]
    fn test_load_missing_file() {
        let result = FfnnNetwork::load("does-not-exist.json");
        assert!(matches!(result, Err(NetworkError::ResourceLoad(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let path = std::env::temp_dir().join(format!("hdra-malformed-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let result = FfnnNetwork::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(NetworkError::ResourceLoad(_))));
    }

    #[test]
    fn test_shape_validation() {
        let mut doc = identity_doc();
        doc.layers[0].weights[0].push(1.0);
        assert!(matches!(
            FfnnNetwork::from_doc(doc),
            Err(NetworkError::ResourceLoad(_))
        ));

        let mut doc = identity_doc();
        doc.layers[0].biases.pop();
        assert!(matches!(
            FfnnNetwork::from_doc(doc),
            Err(NetworkError::ResourceLoad(_))
        ));

        let doc = NetworkDoc {
            input_size: 2,
            layers: vec![],
        };
        assert!(matches!(
            FfnnNetwork::from_doc(doc),
            Err(NetworkError::ResourceLoad(_))
        ));
    }

    #[test]
    fn test_infer_length_mismatch() {
        let network = FfnnNetwork::from_doc(identity_doc()).unwrap();
        let result = network.infer(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(NetworkError::Inference {
                expected: 2,
                actual: 3
            })
        ));
    }
}
