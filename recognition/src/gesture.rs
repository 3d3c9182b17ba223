use std::fs;

use anyhow::{Context, Result};
use common::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 单个字形
///
/// 一个字形由若干条笔画组成, 每条笔画是按时间顺序排列的墨迹点序列
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct Glyph {
    #[schemars(title = "笔画列表")]
    pub strokes: Vec<Vec<Point>>,
}

/// 手势脚本
///
/// 以脚本回放代替真实触摸输入: 每个字形回放完最后一条笔画后,
/// 模拟停笔超时触发一次分类
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct GestureScript {
    #[schemars(title = "字形列表")]
    pub glyphs: Vec<Glyph>,
}

impl GestureScript {
    /// 通过文件名加载手势脚本
    ///
    /// # 参数
    ///
    /// * `script_file` - 手势脚本文件名
    pub fn load(script_file: &str) -> Result<Self> {
        let script_data = fs::read(script_file).context("读取手势脚本文件失败")?;
        let script = serde_yaml::from_slice::<GestureScript>(script_data.as_slice())
            .context("解析手势脚本文件失败, 请检查格式是否正确")?;
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() -> Result<()> {
        let yaml = r#"
glyphs:
  - strokes:
      - - { x: 50.0, y: 20.0 }
        - { x: 50.0, y: 80.0 }
  - strokes:
      - - { x: 30.0, y: 30.0 }
      - - { x: 60.0, y: 30.0 }
"#;
        let script = serde_yaml::from_str::<GestureScript>(yaml)?;
        assert_eq!(script.glyphs.len(), 2);
        assert_eq!(script.glyphs[0].strokes[0].len(), 2);
        assert_eq!(script.glyphs[1].strokes.len(), 2);
        assert_eq!(script.glyphs[0].strokes[0][1], Point { x: 50.0, y: 80.0 });
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(GestureScript::load("does-not-exist.yaml").is_err());
    }
}
