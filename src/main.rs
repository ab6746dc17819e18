mod cli;
mod logging;
mod plan;
mod runner;
mod scaffold;
mod templates;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
