use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use client_core::{
    execute, load_settings, AbstractClient, AppController, FieldView, ResultsView, NO_DATA,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Summarize an article through the abstract service")]
struct Args {
    /// Article to analyze; defaults to the sample article
    url: Option<String>,
    #[arg(long)]
    api_base_url: Option<String>,
    /// Save the result on the service under this name
    #[arg(long)]
    save: Option<String>,
    /// Print the raw response body instead of the rendered summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_base_url) = &args.api_base_url {
        settings = settings.with_api_base_url(api_base_url);
    }
    let client = AbstractClient::new(&settings)?;
    info!(base_url = client.base_url(), "abstract service configured");

    let mut controller = match args.url {
        Some(url) => AppController::new(url),
        None => AppController::default(),
    };

    if let Some(cmd) = controller.submit_analysis() {
        let event = execute(&client, cmd).await;
        controller.apply_event(event, Instant::now());
    }
    if let Some(message) = controller.error_message() {
        error!("analysis failed: {message}");
        bail!("{message}");
    }

    match (args.json, controller.results(), controller.current_result()) {
        (true, _, Some(result)) => println!("{}", serde_json::to_string_pretty(result)?),
        (false, Some(view), _) => print!("{}", render_text(view)),
        _ => bail!("analysis finished without a result"),
    }

    if let Some(filename) = args.save {
        controller.filename_input = filename;
        if let Some(cmd) = controller.submit_save() {
            let now = Instant::now();
            let event = execute(&client, cmd).await;
            controller.apply_event(event, now);
            match controller.success_notice(now) {
                Some(notice) => eprintln!("{notice}"),
                None if controller.error_message().is_none() => {
                    warn!("save endpoint did not acknowledge the file")
                }
                None => {}
            }
        }
        if let Some(message) = controller.error_message() {
            error!("save failed: {message}");
            bail!("{message}");
        }
    }

    Ok(())
}

fn render_text(view: &ResultsView) -> String {
    let mut out = String::new();
    let source = view
        .source
        .as_ref()
        .map(|link| link.href.as_str())
        .unwrap_or(NO_DATA);
    out.push_str(&format!("Analyzed URL: {source}\n"));
    for section in view.sections() {
        out.push_str(&format!("\n== {} ==\n", section.strategy.label()));
        push_field(&mut out, "Classic abstract", &section.classic);
        push_field(&mut out, "Keyword abstract", &section.keywords);
    }
    out
}

fn push_field(out: &mut String, title: &str, field: &FieldView) {
    out.push_str(title);
    out.push_str(":\n");
    for line in field.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{render_results, AnalysisResult};
    use serde_json::json;

    #[test]
    fn renders_sections_with_placeholders() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "url": "https://x",
            "neural_network": {"keyword_abstract": ["k1", "k2"]},
            "sentence_extraction": {"classic_abstract": "B", "keyword_abstract": "k3\n*k4"}
        }))
        .expect("decode");

        let text = render_text(&render_results(&result));
        assert_eq!(
            text,
            "Analyzed URL: https://x\n\
             \n== Neural network ==\n\
             Classic abstract:\n  No data\n\
             Keyword abstract:\n  • k1\n  • k2\n\
             \n== Sentence extraction ==\n\
             Classic abstract:\n  B\n\
             Keyword abstract:\n  k3\n  •k4\n"
        );
    }
}
