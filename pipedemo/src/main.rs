use log::info;
use xpipe::{PipelineConfig, StatusStream};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    info!(
        "Starting pipeline: values={:?}, interval={:?}",
        config.values(),
        config.interval
    );

    let summary = xpipe::run(&config, StatusStream::stdout()).expect("Pipeline failed");

    info!("=== Pipeline Complete ===");
    info!("Produced: {} values", summary.produced);
    info!("Consumed: {} lines", summary.consumed.len());
    info!("Completion flag set: {}", summary.flag_set);
    info!("Time: {:.2} seconds", summary.elapsed.as_secs_f64());
}
