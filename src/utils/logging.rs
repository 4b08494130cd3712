use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger with a reasonable default configuration.
///
/// Defaults to info level for this crate, respects RUST_LOG overrides, and
/// silences modules that log on every frame or request.
pub fn init_logger() {
    let mut builder = Builder::new();

    builder.filter_level(LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    // Reduce noise from networking
    builder.filter_module("hyper", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Warn);
    builder.filter_module("rustls", LevelFilter::Warn);

    // Reduce egui noise - these modules log on every frame/panel refresh
    builder.filter_module("egui", LevelFilter::Warn);
    builder.filter_module("egui_winit", LevelFilter::Warn);
    builder.filter_module("egui_glow", LevelFilter::Warn);
    builder.filter_module("eframe", LevelFilter::Warn);
    builder.filter_module("winit", LevelFilter::Warn);

    builder
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            writeln!(
                buf,
                "[{} {} {}] {}",
                ts,
                record.level(),
                record.module_path().unwrap_or_default(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .write_style(env_logger::WriteStyle::Auto);

    // try_init so tests that initialize twice don't panic
    let _ = builder.try_init();
}
