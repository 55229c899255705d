use clap::Parser;
use essentials_catalog::{cli, config, error, pipeline, writer};
use cli::Cli;
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = Config::load(cli.config.as_deref())?;
    let output = cli.resolve_output(&config);
    let options = cli.resolve_options(&config);

    println!("🥫 essentials-catalog - カタログ生成\n");

    // 1. 読み込み・正規化
    println!("[1/3] {} を読み込み中...", cli.input.display());
    let (catalog, stats) = pipeline::run(&cli.input, &options)?;
    println!(
        "✔ 有効な商品 {}件 (対象国: {}), スキップ {}件",
        stats.accepted,
        options.country,
        stats.skipped()
    );
    println!("  - 対象国以外: {}件", stats.not_in_country);
    println!("  - 不正な行: {}件", stats.rejected);
    if cli.verbose {
        for (rejection, count) in &stats.rejections {
            println!("    {}: {}件", rejection, count);
        }
    }
    println!();

    // 2. ランキング
    println!("[2/3] スキャン数で上位{}件を選択", options.limit);
    println!("✔ {}件を選択\n", stats.selected);

    // 3. 書き出し
    println!("[3/3] カタログを書き出し中...");
    let size = writer::write_catalog(&catalog, &output)?;
    println!("✔ カタログを保存: {}", output.display());
    println!("  ファイルサイズ: {:.1} KB", size as f64 / 1024.0);

    println!("\n✅ 完了");

    Ok(())
}

/// ログ出力を初期化（--verbose > RUST_LOG > warn）
fn init_logging(cli: &Cli) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(cli.log_filter(rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(cli::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
