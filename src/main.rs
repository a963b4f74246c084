use jobboard_lib::shared::utils::logger::init_logger;
use jobboard_lib::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before loading config so its summary line is not lost
    init_logger();
    let config = AppConfig::from_env()?;
    jobboard_lib::run(config).await
}
