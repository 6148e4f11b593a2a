use std::fs;

use anyhow::{Context, Result};
use riskboard_core::item::ALL_STATUSES;
use riskboard_core::scoring::format_score;
use riskboard_infra::import::import_json;
use riskboard_infra::sample::seed_register;
use riskboard_infra::settings::Settings;
use riskboard_infra::store::{RegisterMetrics, RiskRegister, UuidIdGenerator};
use riskboard_infra::telemetry::init_logging;

fn main() -> Result<()> {
    let settings = Settings::load(None).context("loading settings")?;
    init_logging(&settings.log_filter).context("initializing logging")?;

    let mut ids = UuidIdGenerator;
    let mut metrics = RegisterMetrics::new();
    let mut register = RiskRegister::new();

    if settings.seed_sample_risks {
        register = seed_register(&register, &mut ids, &mut metrics)?;
    }

    if let Some(path) = &settings.import_path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading import file {}", path.display()))?;
        let imported = import_json(&text, settings.import_max_rows);
        for error in &imported.errors {
            eprintln!("import: {error}");
        }
        if imported.success {
            register = register.add_all(imported.risks, &mut ids, &mut metrics)?.0;
        }
    }

    print_register(&register, settings.residual_precision);
    print_summary(&register);
    tracing::info!(
        risks = register.len(),
        adds = metrics.adds_total(),
        imports = metrics.imports_total(),
        "done"
    );
    Ok(())
}

fn print_register(register: &RiskRegister, precision: usize) {
    println!(
        "{:<36}  {:<50}  {:>5}  {:<12}  {:>8}  {:<12}  {:<11}",
        "ID", "DESCRIPTION", "SCORE", "LEVEL", "RESIDUAL", "RES. LEVEL", "STATUS"
    );
    for item in register.items() {
        println!(
            "{:<36}  {:<50}  {:>5}  {:<12}  {:>8}  {:<12}  {:<11}",
            item.id.as_str(),
            truncate(&item.description, 50),
            item.score,
            item.risk_level,
            format_score(item.residual_score, precision),
            item.residual_risk_level,
            item.status.as_str(),
        );
    }
}

fn print_summary(register: &RiskRegister) {
    let summary = register.summary();
    println!();
    println!("Total risks: {}", summary.total);
    for (level, count) in summary.level_counts() {
        println!("  {:<12} {count}", level.name);
    }
    for status in ALL_STATUSES {
        let count = summary.status_count(status);
        if count > 0 {
            println!("  {:<12} {count}", status.as_str());
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
