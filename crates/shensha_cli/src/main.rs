//! Shensha CLI
//!
//! 차트 평가 / 카탈로그 조회 / 시드 기반 배치 통계 도구
//!
//! 로그는 stderr, 레벨은 `RUST_LOG` (기본 warn)
//! 설정 파일은 `batch`에서만 읽는다.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shensha_core::{
    api, standard_catalog, ActivationHistogram, Category, Chart, ChartGenerator, EngineConfig,
    Evaluator, Statistics,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "shensha")]
#[command(about = "Evaluate shensha conditions on four-pillar charts", long_about = None)]
struct Cli {
    /// Config file (JSON or YAML). Falls back to SHENSHA_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one chart, e.g. "甲子 乙丑 丙寅 丁卯"
    Eval {
        /// Chart text (four pillars)
        chart: String,

        /// Only evaluate these rule ids (comma separated)
        #[arg(long, value_delimiter = ',')]
        rules: Vec<String>,

        /// Print the JSON API response instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List the rule catalog
    Catalog {
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Evaluate random charts and print activation rates
    Batch {
        /// Number of charts
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Override the generator seed
        #[arg(long)]
        seed: Option<u64>,

        /// Draw pillars from the full 10x12 product instead of the 60-cycle
        #[arg(long, default_value = "false")]
        full_product: bool,
    },

    /// Print JSON schemas of the evaluation request/response
    Schema,
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::from_env().context("Failed to load config from environment")?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { chart, rules, json } => run_eval(&chart, &rules, json)?,
        Commands::Catalog { json } => run_catalog(json),
        Commands::Batch { count, seed, full_product } => {
            let config = load_config(cli.config.as_ref())?;
            let mut generator_config = config.generator;
            if let Some(seed) = seed {
                generator_config.seed = seed;
            }
            if full_product {
                generator_config.sexagenary_only = false;
            }
            run_batch(&config, generator_config, count)?;
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&api::request_schema())?);
            println!("{}", serde_json::to_string_pretty(&api::response_schema())?);
        }
    }

    Ok(())
}

fn run_eval(text: &str, rules: &[String], json: bool) -> Result<()> {
    if json {
        let request = serde_json::json!({
            "chart": text,
            "rule_ids": if rules.is_empty() { None } else { Some(rules) },
        });
        let response = api::evaluate_chart_json(&request.to_string());
        println!("{}", response);
        return ensure_success(&response);
    }

    let chart: Chart = text.parse().with_context(|| format!("Invalid chart: {text}"))?;
    let evaluator = Evaluator::new(standard_catalog());
    let matches = if rules.is_empty() {
        evaluator.evaluate_all(&chart)
    } else {
        evaluator.evaluate_selected(rules, &chart)?
    };

    println!("🀄 Chart: {}", chart);
    let balance = chart.element_balance();
    println!(
        "   五行: 金{} 木{} 水{} 火{} 土{}",
        balance.metal, balance.wood, balance.water, balance.fire, balance.earth
    );
    println!();

    for m in &matches {
        println!(
            "   {:<10} {:<18} {:?} / {:?} / power {}",
            m.display_name, m.rule_id, m.category, m.element, m.power
        );
    }

    let stats = Statistics::from_results(&matches);
    println!();
    println!(
        "✅ {} active (吉 {} / 凶 {} / 特 {}), net fortune {}",
        stats.total,
        stats.category_count(Category::Auspicious),
        stats.category_count(Category::Inauspicious),
        stats.category_count(Category::Extraordinary),
        Statistics::net_fortune(&matches)
    );
    Ok(())
}

/// 에러 응답이면 실패 종료 (본문은 이미 stdout에 출력됨)
fn ensure_success(response: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(response).context("Malformed API response")?;
    if value["success"] != true {
        let code = value["error"]["code"].as_str().unwrap_or("UNKNOWN");
        bail!("evaluation failed: {code}");
    }
    Ok(())
}

fn run_catalog(json: bool) {
    if json {
        println!("{}", api::catalog_json());
        return;
    }

    let catalog = standard_catalog();
    for rule in catalog.iter() {
        println!(
            "{:<22} {:<8} {:<28} {:?} / {:?} / power {}",
            rule.id, rule.display_name, rule.english_name, rule.category, rule.element, rule.power
        );
    }

    let stats = Statistics::from_catalog(catalog);
    println!();
    println!("📊 {} rules", stats.total);
    for (category, count) in &stats.by_category {
        println!("   {:?}: {}", category, count);
    }
    for (tier, count) in &stats.by_tier {
        println!("   {:?}: {}", tier, count);
    }
}

fn run_batch(
    config: &EngineConfig,
    generator_config: shensha_core::GeneratorConfig,
    count: usize,
) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    info!(count, seed = generator_config.seed, "generating charts");
    let charts = ChartGenerator::from_config(&generator_config).generate(count);

    let catalog = standard_catalog();
    let evaluator = Evaluator::with_batch_config(catalog, config.batch);
    let batch = evaluator.evaluate_batch(&charts);
    let histogram = ActivationHistogram::from_batch(catalog, &batch);

    println!(
        "🔨 Evaluated {} charts (seed {}, {})",
        histogram.charts,
        generator_config.seed,
        if generator_config.sexagenary_only { "60-cycle" } else { "full product" }
    );
    for (id, hits) in &histogram.counts {
        println!("   {:<22} {:>7}  {:>6.2}%", id, hits, histogram.rate(id) * 100.0);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_success() {
        let ok = api::evaluate_chart_json(r#"{"chart":"甲申 丙子 戊辰 庚子"}"#);
        assert!(ensure_success(&ok).is_ok());

        let failed = api::evaluate_chart_json(r#"{"chart":"甲子 乙丑 丙寅"}"#);
        let err = ensure_success(&failed).unwrap_err();
        assert!(err.to_string().contains("INVALID_CHART"));

        assert!(ensure_success("not json").is_err());
    }

    #[test]
    fn test_eval_json_exit_status() {
        assert!(run_eval("甲子 乙丑 丙寅 丁卯", &[], true).is_ok());
        assert!(run_eval("甲子 乙丑 丙寅 丁卯", &["nope".to_string()], true).is_err());
    }

    #[test]
    fn test_config_not_read_outside_batch() {
        let cli = Cli::parse_from(["shensha", "--config", "/definitely/not/here.yaml", "catalog"]);
        assert!(matches!(cli.command, Commands::Catalog { json: false }));
        assert!(load_config(cli.config.as_ref()).is_err());
        assert!(run_eval("甲子 乙丑 丙寅 丁卯", &[], false).is_ok());
    }
}
