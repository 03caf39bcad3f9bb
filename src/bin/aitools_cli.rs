//! aitools-cli: 在命令行中调用 AI 工具目录的各项智能功能
//!
//! Usage:
//!   aitools-cli summary <text>                     Summarise a personal profile
//!   aitools-cli recommend <behavior> --tools <f>   Recommend tools
//!   aitools-cli search <query> --tools <f>         Rank tools for a query
//!   aitools-cli intent <query>                     Describe the query intent
//!   aitools-cli compare <id>... --tools <f>        Compare tools
//!   aitools-cli analyze <id> --tools <f>           Analyse one tool

use aitools_client::{AiToolsClient, AiToolsClientBuilder, Degraded, ToolDescriptor};
use anyhow::{anyhow, bail, Context};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("aitools-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        command => run(command, &args[2..]).await,
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"aitools-cli: AI 工具目录命令行工具

USAGE:
    aitools-cli <COMMAND> [OPTIONS]

COMMANDS:
    summary <text>                    Summarise a personal profile
    recommend <behavior> --tools <f>  Recommend tools for a browsing behaviour
    search <query> --tools <f>        Rank tools for a search query
    intent <query>                    Describe the intent behind a query
    compare <id>... --tools <f>       Compare the selected tools
    analyze <id> --tools <f>          Analyse a single tool
    version                           Show version information
    help                              Show this help message

ENVIRONMENT:
    OPENROUTER_API_KEY                Bearer credential
    OPENROUTER_BASE_URL               Endpoint base (default https://openrouter.ai/api/v1)
    SITE_URL, SITE_NAME               Sent as HTTP-Referer / X-Title
    RUST_LOG                          Log filter (e.g. aitools_client=debug)"#
    );
}

/// Positional arguments plus the value of `--tools`, if given.
fn split_args(args: &[String]) -> anyhow::Result<(Vec<String>, Option<PathBuf>)> {
    let mut positional = Vec::new();
    let mut tools = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--tools" {
            let path = iter.next().ok_or_else(|| anyhow!("--tools requires a path"))?;
            tools = Some(PathBuf::from(path));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((positional, tools))
}

fn load_tools(path: Option<PathBuf>) -> anyhow::Result<Vec<ToolDescriptor>> {
    let path = path.ok_or_else(|| anyhow!("this command needs --tools <file>"))?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn select(tools: &[ToolDescriptor], ids: &[String]) -> anyhow::Result<Vec<ToolDescriptor>> {
    ids.iter()
        .map(|raw| {
            let id: u64 = raw
                .parse()
                .with_context(|| format!("invalid tool id: {raw}"))?;
            tools
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("no tool with id {id}"))
        })
        .collect()
}

fn report<T>(degraded: Degraded<T>) -> T {
    eprintln!(
        "warning: {} ({}); showing offline result",
        degraded.user_message(),
        degraded.kind()
    );
    degraded.into_fallback()
}

async fn run(command: &str, args: &[String]) -> anyhow::Result<()> {
    let (positional, tools_path) = split_args(args)?;
    let client: AiToolsClient = AiToolsClientBuilder::new().build()?;
    let text = positional.join(" ");

    match command {
        "summary" => {
            if text.is_empty() {
                bail!("summary needs profile text");
            }
            println!("{}", client.generate_ai_summary(&text).await?);
        }
        "intent" => {
            if text.is_empty() {
                bail!("intent needs a query");
            }
            println!("{}", client.process_natural_language_query(&text).await?);
        }
        "recommend" => {
            let tools = load_tools(tools_path)?;
            let doc = client
                .generate_tool_recommendations(&text, &tools)
                .await
                .unwrap_or_else(report);
            println!("{doc}");
        }
        "search" => {
            let tools = load_tools(tools_path)?;
            let ids = client
                .enhance_search(&text, &tools)
                .await
                .unwrap_or_else(report);
            for id in ids {
                if let Some(tool) = tools.iter().find(|t| t.id == id) {
                    println!("{:>4}  {}", tool.id, tool.name);
                }
            }
        }
        "compare" => {
            let tools = load_tools(tools_path)?;
            let selected = select(&tools, &positional)?;
            if selected.len() < 2 {
                bail!("compare needs at least two tool ids");
            }
            let doc = client.compare_tools(&selected).await.unwrap_or_else(report);
            println!("{doc}");
        }
        "analyze" => {
            let tools = load_tools(tools_path)?;
            let selected = select(&tools, &positional)?;
            let [tool] = selected.as_slice() else {
                bail!("analyze takes exactly one tool id");
            };
            let doc = client
                .generate_tool_analysis(tool)
                .await
                .unwrap_or_else(report);
            println!("{doc}");
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    let stats = client.stats();
    tracing::debug!(
        dispatches = stats.dispatches,
        fallbacks = stats.fallbacks,
        cache_hits = stats.cache.hits,
        "session finished"
    );
    Ok(())
}
