#[tokio::main]
async fn main() {
    studio_booking::run().await;
}
