use clap::Parser;
use doctor_directory::config::Settings;
use doctor_directory::utils::error::{DirectoryError, ErrorSeverity};
use doctor_directory::utils::logger::{self, LogFormat};
use doctor_directory::views::ViewOptions;
use doctor_directory::{CliConfig, DirectoryApp, FilterAction, HttpDoctorSource, MemoryHistory};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    tracing::info!("Starting doctor-directory CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = Settings::load(&cli).unwrap_or_else(|e| exit_with(&e));
    let source = HttpDoctorSource::from_config(&settings).unwrap_or_else(|e| exit_with(&e));

    let initial = format!("/?{}", cli.query.trim_start_matches('?'));
    let mut app = DirectoryApp::new(
        source,
        MemoryHistory::new(&initial),
        settings.fallback_enabled,
        ViewOptions::from_config(&settings),
    );

    app.start().await;
    // 重試只由使用者明確要求，且最多一次
    if cli.retry && app.directory().error().is_some() {
        app.retry().await;
    }
    if let Some(error) = app.directory().error() {
        eprintln!("❌ {}", error);
        eprintln!("💡 Run again with --retry to retry the fetch");
    }

    // 依命令列參數模擬使用者在篩選面板上的操作
    if cli.clear {
        app.dispatch(FilterAction::Clear);
    }
    if let Some(search) = &cli.search {
        app.dispatch(FilterAction::SetSearch(search.clone()));
    }
    if let Some(mode) = cli.mode {
        app.dispatch(FilterAction::SetMode(mode));
    }
    for speciality in &cli.specialities {
        app.dispatch(FilterAction::ToggleSpeciality(speciality.clone()));
    }
    if let Some(sort) = cli.sort {
        app.dispatch(FilterAction::SetSort(sort));
    }

    if let Some(id) = &cli.book {
        if let Err(e) = app.book(id) {
            exit_with(&e);
        }
        if cli.reload {
            app.reload();
        }
    }

    println!("{}", app.render());
    println!("🔗 {}", app.location().href());

    Ok(())
}

fn exit_with(e: &DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
