#[tokio::main]
async fn main() {
    warung::start_server().await;
}
