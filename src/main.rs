use anyhow::Result;
use log::{info, warn};

use vitalwatch::{MonitorConfig, VitalsMonitor};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("vitalwatch starting up...");

    let config = MonitorConfig::from_env();
    let poll_interval = config.poll_interval;
    let monitor = VitalsMonitor::new(config)?;

    // Recommendations are display passthrough; the backend being away is fine.
    match monitor.api().recommendations().await {
        Ok(recs) => info!(
            "recommendations loaded: {} exercise, {} sleep, {} nutrition",
            recs.exercise.len(),
            recs.sleep.len(),
            recs.nutrition.len()
        ),
        Err(err) => warn!("recommendation service unavailable: {err:#}"),
    }

    monitor.start(poll_interval).await?;
    info!("monitoring active ({}ms interval), Ctrl-C to stop", poll_interval.as_millis());

    tokio::signal::ctrl_c().await?;

    monitor.stop().await?;

    let vitals = monitor.vitals().await;
    let alerts = monitor.alerts().await;
    info!(
        "final vitals: {} bpm, {}% SpO2, {:.1}h sleep, {} activity, status {}",
        vitals.heart_rate,
        vitals.blood_oxygen,
        vitals.sleep_hours,
        vitals.activity_level.as_str(),
        vitals.status.as_str()
    );
    info!("{} alert(s) recorded this session", alerts.len());

    Ok(())
}
