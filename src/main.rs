use clap::Parser;
use std::io::Write;
use temp_calc::core::session::render;
use temp_calc::core::ConfigProvider;
use temp_calc::utils::error::ErrorSeverity;
use temp_calc::utils::{logger, validation::Validate};
use temp_calc::{Action, CalcError, CliConfig, FormState, Session, ThreadRandom, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    let loaded = cli.validate().and_then(|_| cli.load_config());

    // 初始化日誌 (配置載入失敗時使用預設值)
    match &loaded {
        Ok(config) if config.json_logging() => logger::init_json_logger(cli.verbose, config.log_level()),
        Ok(config) => logger::init_cli_logger(cli.verbose, config.log_level()),
        Err(_) => logger::init_cli_logger(cli.verbose, None),
    }

    tracing::info!("Starting temp-calc");
    tracing::info!("📁 Configuration: {}", cli.describe_config_source());
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            exit_with(e);
        }
    };

    if let Err(e) = run(&cli, &config) {
        tracing::error!(
            "❌ temp-calc failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(e);
    }
}

fn run(cli: &CliConfig, config: &TomlConfig) -> temp_calc::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let state = match cli.action() {
        Action::Interactive => {
            let mut session = Session::new(config, ThreadRandom);
            return session.run(std::io::stdin().lock(), &mut out);
        }
        Action::Show => FormState::default(),
        Action::Edit(reading) => FormState::default().apply(reading).state,
        Action::Preset(preset) => {
            let reading = preset.to_reading(&mut ThreadRandom, config.random_range());
            tracing::debug!(?preset, value = reading.value, "preset applied");
            FormState::default().apply(reading).state
        }
    };

    let snapshot = state.snapshot(&config.color_scale());
    writeln!(out, "{}", render(&snapshot, config.output_format())?)?;
    Ok(())
}

fn exit_with(e: CalcError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
