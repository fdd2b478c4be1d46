use clap::Parser;

use bmp_hide::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_info, handle_show},
};

/// 程序的主入口点
///
/// 负责初始化日志、解析命令行参数，并根据子命令将执行分派到相应的处理函数。
/// 任何错误都在这里打印并以退出码 1 结束进程。
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut env_builder = env_logger::Builder::from_default_env();
    match cli.loglevel {
        Some(level) => {
            env_builder.filter_level(level.to_level_filter());
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            env_builder.filter_level(log::LevelFilter::Warn);
        }
        None => {}
    }
    env_builder.format_timestamp(None).try_init()?;

    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Show(args) => handle_show(args),
        Commands::Info(args) => handle_info(args),
    }
}
