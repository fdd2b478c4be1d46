//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令、位置参数和全局日志选项。

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 24 位 BMP 图像中隐藏或恢复任意数据。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在未压缩的 24 位 BMP 图像中隐藏或恢复任意数据。\n每个数据字节占用 4 个像素字节的最低 2 位。"
)]
pub struct Cli {
    /// 日志级别，未指定时沿用 RUST_LOG。
    #[arg(long, global = true, value_enum)]
    pub loglevel: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、show (恢复) 和 info (查看容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文件内容隐藏到 BMP 图像中。
    Hide(HideArgs),

    /// 从经过隐写的 BMP 图像中恢复隐藏的数据。
    Show(ShowArgs),

    /// 显示 BMP 图像的尺寸和可隐藏的字节数。
    Info(InfoArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入 BMP 图像路径。
    #[arg(value_name = "SOURCE_IMAGE")]
    pub image: PathBuf,

    /// 要隐藏的数据文件路径。
    #[arg(value_name = "HIDDEN_FILE")]
    pub hidden: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(value_name = "DEST_IMAGE")]
    pub dest: PathBuf,

    /// 保留像素数组之后的多余字节 (默认丢弃)。
    #[arg(long)]
    pub keep_trailer: bool,
}

/// 'show' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// 已隐藏数据的 BMP 图像路径。
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// 恢复数据后的保存路径。
    #[arg(value_name = "OUTPUT_DATA")]
    pub output: PathBuf,
}

/// 'info' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// 要检查的 BMP 图像路径。
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_hide() {
        let cli = Cli::try_parse_from(["bmp_hide", "hide", "in.bmp", "secret.txt", "out.bmp"])
            .unwrap();
        match cli.command {
            Commands::Hide(args) => {
                assert_eq!(args.image, PathBuf::from("in.bmp"));
                assert_eq!(args.hidden, PathBuf::from("secret.txt"));
                assert_eq!(args.dest, PathBuf::from("out.bmp"));
                assert!(!args.keep_trailer);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.loglevel.is_none());
    }

    #[test]
    fn parses_show_with_loglevel() {
        let cli = Cli::try_parse_from([
            "bmp_hide", "show", "out.bmp", "data.bin", "--loglevel", "debug",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Show(_)));
        assert!(matches!(cli.loglevel, Some(LogLevel::Debug)));
    }

    #[test]
    fn missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["bmp_hide", "hide", "in.bmp", "secret.txt"]).is_err());
        assert!(Cli::try_parse_from(["bmp_hide", "show", "out.bmp"]).is_err());
        assert!(Cli::try_parse_from(["bmp_hide"]).is_err());
        assert!(Cli::try_parse_from(["bmp_hide", "recover", "a", "b"]).is_err());
    }
}
