#[tokio::main]
async fn main() {
    store_ratings_be::start_server().await;
}
