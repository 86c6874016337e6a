use clap::Parser;
use hazsim::{Session, SimulationParams};
use std::path::PathBuf;

/// Симулятор опасностей и генератор плана эвакуации для Даэта
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    /// (без него используются параметры по умолчанию)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Количество симулируемых обнаружений опасностей
    #[arg(short = 'n', long, default_value_t = 5)]
    hazards: usize,

    /// Путь для сохранения выгрузки JSON
    #[arg(short, long, default_value = "daet_ai_plan.json")]
    output: PathBuf,

    /// Путь для сохранения карты в PNG (по умолчанию карта не сохраняется)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Сторона квадратной канвы карты в пикселях
    #[arg(long, default_value_t = 1024)]
    map_size: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let params = match &cli.config {
        Some(path) => {
            println!("🔍 Загрузка конфигурации...");
            SimulationParams::from_toml_file(path.to_str().ok_or("invalid config path")?)?
        }
        None => SimulationParams::default(),
    };

    let mut session = Session::new(params);
    session.attach_canvas(cli.map_size, cli.map_size);

    println!("Симуляция обнаружений (всего: {})...", cli.hazards);
    for _ in 0..cli.hazards {
        let hazard = session.detect_hazard();
        println!(
            "  {} @ ({:.4}, {:.4}), риск {}",
            hazard.kind.label(),
            hazard.location.0,
            hazard.location.1,
            hazard.risk
        );
    }

    session.analyze();
    let plan = session.generate_plan();

    println!("\n{}", session.report_text());

    println!("\nРекомендации ({}):", plan.len());
    for item in &plan {
        println!(
            "  ({:.4}, {:.4}): {}",
            item.location.0, item.location.1, item.recommendation
        );
    }

    if let Some(map_path) = &cli.map {
        println!("\nСохранение карты в {map_path:?}");
        session.save_map_png(map_path.to_str().ok_or("invalid map path")?)?;
    }

    println!("Сохранение выгрузки в {:?}", cli.output);
    session.export_to_file(cli.output.to_str().ok_or("invalid output path")?)?;

    println!("\nГотово! План сохранён.");
    Ok(())
}
