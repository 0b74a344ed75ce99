use anyhow::Context;
use log::info;
use mandelbrot_explorer::{CliRenderController, PpmFilePresenter, parse_args};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1)).context("Failed to parse arguments")?;
    let controller = CliRenderController::new(PpmFilePresenter::new());

    controller
        .run(&args)
        .with_context(|| format!("Failed to render {}", args.out.display()))?;

    info!("Done.");

    Ok(())
}
