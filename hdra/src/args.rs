use clap::Parser;
use tracing::Level;

/// 欢迎使用 HDRA (Handwritten Digit Recognition Assistant) 手写数字识别助手
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 预训练网络权重文件路径
    #[arg(short, long, default_value = "handwriting-ffnn.json")]
    pub network_file: String,

    /// 手势脚本文件路径 (可指定多个)
    #[arg(short, long, required = true)]
    pub gesture_files: Vec<String>,

    /// 识别器配置文件路径 (缺省使用内置默认配置)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// 日志等级 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: Option<Level>,

    /// 日志文件路径
    #[arg(long, default_value = "hdra.log")]
    pub log_file: String,

    /// 追加日志到文件
    #[arg(long, default_value_t = false)]
    pub append_log: bool,

    /// 回放时不模拟停笔超时等待
    #[arg(long, default_value_t = false)]
    pub no_wait: bool,
}

impl Args {
    /// 创建命令行参数解析器
    pub fn new() -> Self {
        Self::parse()
    }
}
