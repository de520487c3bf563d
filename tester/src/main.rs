use clap::Parser;
use reqwest::Client;
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of a running warung server
    #[arg(default_value = "http://localhost:3001")]
    url: String,
}

const SAMPLE_ADDRESSES: &[&str] = &[
    "SMK Taruna Bhakti, Depok",
    "Jl. Raya Cimangis No. 123, Kota Depok",
    "Pekapuran, dekat pasar",
    "Margonda, Kota Depok",
    "Jl. Sudirman, Jakarta Selatan",
    "abc",
    "rumah teman saya dekat situ",
];

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let client = Client::new();

    for address in SAMPLE_ADDRESSES {
        let response = client
            .post(format!("{}/validate-address", args.url))
            .json(&json!({ "address": address }))
            .send()
            .await
            .unwrap();

        let status = response.status();
        let body: Value = response.json().await.unwrap();

        println!("{address}");
        println!("  {status} {body}\n");
    }
}
