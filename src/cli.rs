use date_selector::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init(); // RUST_LOG=debug for selection traces
    Cli::run()
}
