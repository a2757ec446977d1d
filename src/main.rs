//! # GitHub 图床外链工具 — 命令行入口
//!
//! 本文件只负责参数解析、配置合并与能力装配，
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use gh_image_links::error::AppError;
use gh_image_links::export::{self, ExportSurface, SurfaceSlot};
use gh_image_links::link::{self, Provider, UploadedImage};
use gh_image_links::notify::{ConsoleLoading, ConsoleNotifier};
use gh_image_links::repo_init::{self, GitHubContentsApi, InitOutcome};
use gh_image_links::settings::{self, UserConfig};

/// 进程内唯一的外链暂存区
static EXPORT_SURFACE: SurfaceSlot = SurfaceSlot::new();

/// Linux 下复制后保持剪贴板所有权的默认秒数
const DEFAULT_CLIPBOARD_HOLD_SECS: u64 = 15;

#[derive(Debug, Parser)]
#[command(name = "gh-image-links", version, about = "GitHub 图床外链生成、复制与仓库初始化")]
struct Cli {
    /// 配置文件路径（默认位于用户配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 仓库所有者，覆盖配置文件
    #[arg(long, global = true)]
    owner: Option<String>,

    /// 仓库名，覆盖配置文件
    #[arg(long, global = true)]
    repo: Option<String>,

    /// 分支名，覆盖配置文件
    #[arg(long, global = true)]
    branch: Option<String>,

    /// 访问令牌，覆盖配置文件
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 输出图片外链
    Link {
        /// 仓库内的图片相对路径
        path: String,
        /// 外链类型：jsdelivr / staticaly / zzko / github
        #[arg(long)]
        provider: Option<String>,
        /// 输出 Markdown 图片语法
        #[arg(long)]
        markdown: bool,
        /// Markdown 中使用的图片名（默认取路径）
        #[arg(long)]
        name: Option<String>,
    },
    /// 复制一张或多张图片的外链到剪贴板
    Copy {
        /// 仓库内的图片相对路径
        paths: Vec<String>,
        #[arg(long)]
        provider: Option<String>,
        #[arg(long)]
        markdown: bool,
        /// Linux 下复制后等待剪贴板管理器接管的最长秒数，0 表示不等待
        #[arg(long, default_value_t = DEFAULT_CLIPBOARD_HOLD_SECS)]
        hold_secs: u64,
    },
    /// 在空仓库中创建 README 完成初始化
    Init,
    /// 查看或修改配置
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// 打印当前配置（令牌不输出）
    Show,
    /// 更新配置项并写回配置文件
    ///
    /// 全局参数 `--owner` / `--repo` / `--branch` / `--token` 也会一并写入。
    Set {
        #[arg(long)]
        provider: Option<String>,
        #[arg(long)]
        api_base: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let settings_path = match cli.config.clone() {
        Some(path) => path,
        None => settings::default_settings_path()?,
    };
    let mut config = settings::load_from_path(&settings_path)?;
    apply_overrides(&mut config, &cli);

    match cli.command {
        Command::Link {
            path,
            provider,
            markdown,
            name,
        } => {
            let provider = resolve_provider(provider.as_deref(), &config)?;
            let coords = config.coords()?;
            let url = link::render_link(provider, &path, &coords);
            if markdown {
                let name = name.unwrap_or_else(|| path.clone());
                println!("{}", link::to_markdown_image(&name, &url));
            } else {
                println!("{url}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Copy {
            paths,
            provider,
            markdown,
            hold_secs,
        } => {
            let provider = resolve_provider(provider.as_deref(), &config)?;
            let coords = config.coords()?;
            let images: Vec<UploadedImage> = paths
                .iter()
                .map(|path| UploadedImage::from_path(path.as_str(), path, &coords, markdown))
                .collect();

            let surface = EXPORT_SURFACE.get_or_create(|| system_surface(hold_secs));
            match images.as_slice() {
                [image] => export::copy_one(surface, &ConsoleNotifier, image, provider),
                _ => export::copy_batch(surface, &ConsoleNotifier, &images, provider),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Init => {
            let coords = config.coords()?;
            let api = GitHubContentsApi::new(config.api_base.clone(), config.token.clone())?;
            let runtime = tokio::runtime::Runtime::new()?;
            let outcome = runtime.block_on(repo_init::initialize_repository(
                &api,
                &coords,
                &ConsoleNotifier,
                &ConsoleLoading,
            ));
            Ok(match outcome {
                InitOutcome::Initialized => ExitCode::SUCCESS,
                InitOutcome::Failed => ExitCode::FAILURE,
            })
        }
        Command::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let mut shown = config.clone();
                    shown.token = shown.token.map(|_| "******".to_string());
                    println!("{}", serde_json::to_string_pretty(&shown)?);
                }
                ConfigAction::Set { provider, api_base } => {
                    if let Some(tag) = provider {
                        config.provider = Provider::parse(&tag)?;
                    }
                    if let Some(base) = api_base {
                        config.api_base = base;
                    }
                    settings::save_to_path(&settings_path, &config)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 命令行参数覆盖配置文件中的同名字段。
fn apply_overrides(config: &mut UserConfig, cli: &Cli) {
    if let Some(owner) = &cli.owner {
        config.owner = owner.clone();
    }
    if let Some(repo) = &cli.repo {
        config.repo = repo.clone();
    }
    if let Some(branch) = &cli.branch {
        config.branch = branch.clone();
    }
    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }
}

fn system_surface(hold_secs: u64) -> ExportSurface {
    match hold_secs {
        0 => ExportSurface::system(),
        secs => ExportSurface::system_holding(Duration::from_secs(secs)),
    }
}

fn resolve_provider(tag: Option<&str>, config: &UserConfig) -> Result<Provider, AppError> {
    match tag {
        Some(tag) => Provider::parse(tag),
        None => Ok(config.provider),
    }
}
