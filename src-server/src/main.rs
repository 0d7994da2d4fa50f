#[tokio::main]
async fn main() {
    if let Err(e) = pre_taste_server_lib::run().await {
        eprintln!("pre-taste-server: {e}");
        std::process::exit(1);
    }
}
