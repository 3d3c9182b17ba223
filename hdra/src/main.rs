use anyhow::{Context, Result};
use canvas::InkCanvas;
use network::{FfnnNetwork, Network};
use recognition::{GestureScript, RecognitionPipeline, RecognizerConfig};
use tracing::{error, info};

use crate::args::Args;
use crate::log::init_log;
use crate::replay::Replayer;

mod args;
mod log;
mod replay;

/// 程序入口
fn application() -> Result<()> {
    let args = Args::new();

    init_log(&args)?;

    info!("欢迎使用 HDRA (Handwritten Digit Recognition Assistant) 手写数字识别助手");

    let config = match &args.config_file {
        Some(config_file) => RecognizerConfig::load(config_file)?,
        None => RecognizerConfig::load_default()?,
    };

    // 启动期一次性加载预训练网络, 失败直接退出
    let network = FfnnNetwork::load(&args.network_file).context("加载预训练网络失败")?;
    info!(
        "预训练网络加载成功: 输入 {}, 输出 {}",
        network.input_len(),
        network.output_len()
    );

    // 墨迹画布
    let mut canvas = InkCanvas::new(config.canvas_size, config.brush_width);
    // 识别流水线
    let mut pipeline = RecognitionPipeline::new(network, &config);
    // 手势回放器
    let mut replayer = Replayer::new(&config, !args.no_wait);

    for gesture_file in &args.gesture_files {
        info!("加载手势脚本: {}", gesture_file);
        let script = GestureScript::load(gesture_file)?;
        replayer.replay(&script, &mut pipeline, &mut canvas)?;
    }
    replayer.print_stats();
    Ok(())
}

fn main() {
    match application() {
        Ok(_) => {
            info!("程序已执行完毕");
        }
        Err(e) => {
            error!("程序存在异常: {}", e);
            std::process::exit(1);
        }
    }
}
