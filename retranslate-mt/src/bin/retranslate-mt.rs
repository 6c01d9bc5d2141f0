use clap::{Arg, ArgMatches, Command};
use retranslate::{TranslationRecord, decide};
use retranslate_mt::{
    DeepLProvider, MachineTranslator, MockMode, MockTranslator, translate_partial,
};

fn api_key_arg() -> Arg {
    Arg::new("api-key")
        .long("api-key")
        .short('k')
        .env("DEEPL_API_KEY")
        .hide_env_values(true)
        .help("DeepL API key")
}

fn mock_arg() -> Arg {
    Arg::new("mock")
        .long("mock")
        .short('m')
        .help("Use mock translator instead of DeepL")
        .action(clap::ArgAction::SetTrue)
}

fn cli() -> Command {
    Command::new("retranslate-mt")
        .version("0.1.0")
        .about("Translate text, or update an existing translation after a small source edit")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Show the decision process")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate a text with the provider")
                .arg(Arg::new("text").help("Text to translate").required(true).index(1))
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .help("Target language code")
                        .default_value("JA"),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Source language code (default: detected)"),
                )
                .arg(api_key_arg())
                .arg(mock_arg()),
        )
        .subcommand(
            Command::new("partial")
                .about("Update an English translation after its Japanese source was edited")
                .arg(
                    Arg::new("original-translation")
                        .long("original-translation")
                        .required(true)
                        .help("Existing English translation"),
                )
                .arg(
                    Arg::new("original-source")
                        .long("original-source")
                        .required(true)
                        .help("Japanese text the translation was made from"),
                )
                .arg(
                    Arg::new("modified-source")
                        .long("modified-source")
                        .required(true)
                        .help("Edited Japanese text"),
                )
                .arg(api_key_arg())
                .arg(mock_arg()),
        )
        .subcommand(
            Command::new("diff")
                .about("Show token differences and the path a partial update would take")
                .arg(Arg::new("original").required(true).index(1))
                .arg(Arg::new("modified").required(true).index(2)),
        )
}

fn translator(matches: &ArgMatches) -> Result<Box<dyn MachineTranslator>, Box<dyn std::error::Error>> {
    if matches.get_flag("mock") {
        return Ok(Box::new(MockTranslator::new(MockMode::Suffix)));
    }
    Ok(Box::new(DeepLProvider::from_env()?))
}

fn api_key(matches: &ArgMatches) -> Result<String, Box<dyn std::error::Error>> {
    if matches.get_flag("mock") {
        return Ok(matches.get_one::<String>("api-key").cloned().unwrap_or_default());
    }
    match matches.get_one::<String>("api-key") {
        Some(key) if !key.trim().is_empty() => Ok(key.clone()),
        _ => {
            eprintln!("❌ No DeepL API key given");
            eprintln!("   Set it with: export DEEPL_API_KEY=your_api_key");
            eprintln!("   Or pass --api-key, or use --mock to use mock translator");
            Err("Missing API key".into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose");

    match matches.subcommand() {
        Some(("translate", sub)) => {
            let text = sub.get_one::<String>("text").map(String::as_str).unwrap_or_default();
            let target = sub.get_one::<String>("target").map(String::as_str).unwrap_or("JA");
            let source = sub.get_one::<String>("source").map(String::as_str);
            let key = api_key(sub)?;
            let provider = translator(sub)?;

            if verbose {
                println!("📝 Source: \"{}\"", text);
                println!("🌍 {} → {}", source.unwrap_or("auto"), target);
                println!("🔌 Provider: {}", provider.provider_name());
                println!();
            }

            let translation = provider.translate(text, source, target, &key).await?;
            if verbose {
                if let Some(detected) = &translation.detected_source_lang {
                    println!("🔎 Detected source language: {}", detected);
                }
            }
            println!("{}", translation.text);
        }
        Some(("partial", sub)) => {
            let get = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
            let record = TranslationRecord::new(
                get("original-source"),
                get("original-translation"),
                get("modified-source"),
            );
            let key = api_key(sub)?;
            let provider = translator(sub)?;

            let result = translate_partial(provider.as_ref(), &record, &key).await?;
            if verbose {
                println!(
                    "📦 {} token difference(s), {}",
                    result.difference_count,
                    result.outcome.as_str()
                );
            }
            println!("{}", result.text);
        }
        Some(("diff", sub)) => {
            let original = sub.get_one::<String>("original").map(String::as_str).unwrap_or_default();
            let modified = sub.get_one::<String>("modified").map(String::as_str).unwrap_or_default();
            let decision = decide(original, modified);

            for difference in decision.differences() {
                println!(
                    "[{}] {}: \"{}\" → \"{}\"",
                    difference.index,
                    difference.kind,
                    difference.original_token,
                    difference.modified_token
                );
            }
            println!(
                "{} difference(s): {}",
                decision.differences().len(),
                decision.label()
            );
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}
