use std::process;

#[tokio::main]
async fn main() {
    if let Err(err) = github_fetch_pullrequest::handle().await {
        eprintln!("{}", err);
        process::exit(err.exit_code());
    }
}
