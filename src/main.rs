fn main() {
    let default_filter = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(default_filter)
        .format_timestamp_secs()
        .init();

    if let Err(e) = waterlogger_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
