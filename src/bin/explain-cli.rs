use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "explain-cli")]
#[command(about = "Query a running explaind docstring server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a symbol's value docstring
    Value { name: String },
    /// Look up a symbol's function docstring
    Function { name: String },
    /// Look up both docstrings, labelled
    Explain { name: String },
    /// Show the server's endpoint summary
    Help,
    /// Check server status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let path = match &cli.command {
        Commands::Value { name } => format!("/explain/value/{name}"),
        Commands::Function { name } => format!("/explain/function/{name}"),
        Commands::Explain { name } => format!("/explain/explain/{name}"),
        Commands::Help => "/explain/help".to_string(),
        Commands::Status => "/status".to_string(),
    };

    let res = client.get(format!("{}{}", cli.url, path)).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if status.is_success() {
        print!("{text}");
        Ok(())
    } else {
        eprintln!("Error: server returned status {status}");
        eprint!("{text}");
        std::process::exit(1);
    }
}
