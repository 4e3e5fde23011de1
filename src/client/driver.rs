//! Runs one fetch end to end and records its outcome in the sink.

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::client::connector;
use crate::client::outcome::Outcome;
use crate::client::target::Target;
use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::request::build_request;

/// Creates the output file, fetches `url` into it and returns the outcome.
///
/// The file is created before the URL is even looked at, so rejections can
/// still leave their sentinel. Only a failure to create or finalise the file
/// is an `Err`.
pub async fn run(url: &str, config: &Config) -> anyhow::Result<Outcome> {
    let mut sink = File::create(&config.output_path)
        .await
        .with_context(|| format!("creating output file {}", config.output_path.display()))?;

    let outcome = run_with_sink(url, config, &mut sink)
        .await
        .with_context(|| format!("writing output file {}", config.output_path.display()))?;

    Ok(outcome)
}

/// Same as [`run`] but writes into any sink.
///
/// The sink ends up holding either the body or one sentinel line, never both.
pub async fn run_with_sink<W>(url: &str, config: &Config, sink: &mut W) -> std::io::Result<Outcome>
where
    W: AsyncWrite + Unpin,
{
    let outcome = fetch(url, config, sink).await;

    if let Some(sentinel) = outcome.sentinel() {
        sink.write_all(sentinel.as_bytes()).await?;
        sink.write_all(b"\n").await?;
    }
    sink.flush().await?;

    if outcome.is_success() {
        tracing::info!(outcome = %outcome, "Fetch finished");
    } else {
        tracing::warn!(outcome = %outcome, "Fetch failed");
    }

    Ok(outcome)
}

/// Connect, send, stream. The connection is dropped, and so closed, on every return.
async fn fetch<W>(url: &str, config: &Config, sink: &mut W) -> Outcome
where
    W: AsyncWrite + Unpin,
{
    let target = match Target::parse(url) {
        Ok(target) => target,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Rejected URL");
            return Outcome::from(&e);
        }
    };
    tracing::debug!(host = %target.host, port = target.port, path = %target.path, "Parsed target");

    let stream = match connector::connect(&target.host, target.port).await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!(error = %e, "Connection failed");
            return Outcome::from(&e);
        }
    };

    let mut conn = Connection::with_read_size(stream, config.read_buffer_size);

    let request = build_request(&target.host, &target.path, &config.user_agent);
    if let Err(e) = conn.send_request(request).await {
        tracing::warn!(error = %e, "Request not sent");
        return Outcome::from(&e);
    }

    match conn.read_response(sink).await {
        Ok(bytes) => Outcome::Success { bytes },
        Err(e) => {
            tracing::warn!(error = %e, "Response rejected");
            Outcome::from(&e)
        }
    }
}
