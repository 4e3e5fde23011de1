use std::process::ExitCode;

use httpget::client;
use httpget::config::Config;

const USAGE: &str = "Usage: httpget http://hostname[:port]/path_to_file";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [url] = args.as_slice() else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.max_level()?)
        .init();

    let outcome = client::run(url, &cfg).await?;
    Ok(outcome.exit_code())
}
