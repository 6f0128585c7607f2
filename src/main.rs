use eyre::{Result, WrapErr};
use toolcheck_fixture::config::DemoConfig;
use toolcheck_fixture::demo;

fn main() -> Result<()> {
    color_eyre::install().ok();
    env_logger::init();

    log::info!("Fixture demo starting");

    let config = DemoConfig::from_env().wrap_err("Failed to load demo configuration")?;

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    demo::run(&config, &mut writer)?;

    log::info!("Fixture demo finished");

    Ok(())
}
