use clap::{Arg, Command};
use hcfy_deeplx::{
    ClientRequest, DeepLxClient, LanguageRegistry, MockBackend, MockMode, SIMPLIFIED_CHINESE,
    TranslationBackend, config, to_backend_request, to_client_response,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let matches = Command::new("hcfy-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate text through a DeepLX backend the way the Hcfy relay does")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required_unless_present("list")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target language, as an Hcfy display name or a DeepLX code")
                .default_value(SIMPLIFIED_CHINESE),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .env(config::ENDPOINT_VAR)
                .help("DeepLX translate URL"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Seconds to wait for the backend (0 waits forever)")
                .value_parser(clap::value_parser!(u64))
                .default_value("30"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock backend instead of DeepLX")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .help("List supported languages and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the request and reply in both dialects")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let registry = LanguageRegistry::new();

    if matches.get_flag("list") {
        for (code, display_name) in registry.languages() {
            println!("{}\t{}", code, display_name);
        }
        return Ok(());
    }

    let text = matches
        .get_one::<String>("text")
        .ok_or("text is required")?;
    let target = matches
        .get_one::<String>("to")
        .ok_or("target language is required")?;
    let verbose = matches.get_flag("verbose");

    let Some(code) = registry.resolve(target) else {
        eprintln!("❌ Unknown language: {}", target);
        eprintln!("   Run with --list to see supported languages");
        return Err(format!("unknown language {target:?}").into());
    };

    let request = ClientRequest {
        name: String::new(),
        text: text.clone(),
        destination: vec![registry.display_name_for(code).to_string()],
        source: "auto".to_string(),
    };
    let backend_request = to_backend_request(&registry, &request);

    if verbose {
        println!("📝 Hcfy request: {}", serde_json::to_string(&request)?);
        println!("📤 DeepLX request: {}", serde_json::to_string(&backend_request)?);
    }

    let backend: Box<dyn TranslationBackend> = if matches.get_flag("mock") {
        Box::new(MockBackend::new(MockMode::Suffix))
    } else {
        let Some(endpoint) = matches.get_one::<String>("endpoint") else {
            eprintln!("❌ {} environment variable not set", config::ENDPOINT_VAR);
            eprintln!("   Pass --endpoint http://127.0.0.1:1188/translate");
            eprintln!("   Or use --mock to use the mock backend");
            return Err("missing endpoint".into());
        };
        let timeout = matches
            .get_one::<u64>("timeout")
            .copied()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Box::new(DeepLxClient::new(endpoint, timeout)?)
    };

    let reply = match backend.translate(&backend_request).await {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("❌ {} call failed: {}", backend.provider_name(), e);
            return Err(e.into());
        }
    };

    if verbose {
        println!("📥 DeepLX reply: {}", serde_json::to_string(&reply)?);
    }

    let response = to_client_response(reply, &request);

    if verbose {
        println!("🌍 Hcfy response:");
    }
    for line in &response.result {
        println!("{}", line);
    }

    Ok(())
}
