use anyhow::Result;
use clap::{Parser, ValueEnum};
use snap_renamer_core::{app_paths, load_config, run_batch, RunTotals};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "snap-renamer-cli")]
#[command(about = "チャットアプリ等が付けた画像ファイル名を撮影日時へ一括リネームします")]
struct Cli {
    paths: Vec<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[arg(long, default_value_t = false)]
    show_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.show_config {
        return print_config();
    }

    if cli.paths.is_empty() {
        anyhow::bail!("引数がありません。ディレクトリまたはファイルを指定してください。");
    }

    let (directories, files) = classify_paths(&cli.paths);

    let config = load_config()?;
    let totals = run_batch(&directories, &files, &config.extra_patterns)?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&totals)?),
        OutputFormat::Table => {
            println!("リネーム済み: {}/{}件", totals.renamed, totals.total);
        }
    }

    report_exit_status(&totals)
}

fn print_config() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("設定ファイル: {}", paths.config_path.display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn classify_paths(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            debug!("ディレクトリ引数: {}", path.display());
            directories.push(path.clone());
        } else if path.is_file() {
            debug!("ファイル引数: {}", path.display());
            files.push(path.clone());
        } else {
            debug!("存在しないパスを無視します: {}", path.display());
        }
    }

    (directories, files)
}

fn report_exit_status(totals: &RunTotals) -> Result<()> {
    if !totals.all_renamed() {
        anyhow::bail!(
            "リネームできなかったファイルがあります: {}/{}件",
            totals.renamed,
            totals.total
        );
    }
    Ok(())
}
