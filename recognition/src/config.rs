use std::fs;

use anyhow::{Context, Result};
use common::Size;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 识别器配置
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct RecognizerConfig {
    #[schemars(title = "画布尺寸")]
    pub canvas_size: Size,
    #[schemars(title = "笔刷宽度")]
    pub brush_width: f32,
    #[schemars(title = "包围盒外边距")]
    pub margin: f32,
    #[schemars(title = "停笔触发分类的超时时长 (单位: 毫秒)")]
    pub inactivity_timeout_ms: u64,
}

impl RecognizerConfig {
    /// 加载内置默认配置
    pub fn load_default() -> Result<Self> {
        serde_yaml::from_str(include_str!("../config/default.yaml"))
            .context("解析内置默认配置失败")
    }

    /// 通过文件名加载配置
    ///
    /// # 参数
    ///
    /// * `config_file` - 配置文件名
    pub fn load(config_file: &str) -> Result<Self> {
        let config_data = fs::read(config_file).context("读取配置文件失败")?;
        let config = serde_yaml::from_slice::<RecognizerConfig>(config_data.as_slice())
            .context("解析配置文件失败, 请检查格式是否正确")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default() -> Result<()> {
        let config = RecognizerConfig::load_default()?;
        assert_eq!(config.canvas_size.width, 280);
        assert_eq!(config.canvas_size.height, 280);
        assert_eq!(config.brush_width, 20.0);
        assert_eq!(config.margin, 20.0);
        assert_eq!(config.inactivity_timeout_ms, 400);
        Ok(())
    }

    #[test]
    fn test_yaml_round_trip() -> Result<()> {
        let config = RecognizerConfig::load_default()?;
        let yaml = serde_yaml::to_string(&config)?;
        let parsed = serde_yaml::from_str::<RecognizerConfig>(&yaml)?;
        assert_eq!(parsed.brush_width, config.brush_width);
        assert_eq!(parsed.canvas_size, config.canvas_size);
        Ok(())
    }
}
