//! Look up a dataset and its features.
//!
//! Run with: cargo run --example dataset_lookup -- 61

use openml_client::{FetchOutcome, OpenMlClient, OpenMlResult};

#[tokio::main]
async fn main() -> OpenMlResult<()> {
    tracing_subscriber::fmt::init();

    let dataset_id = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(61);

    let mut builder = OpenMlClient::builder();
    if let Ok(key) = std::env::var("OPENML_API_KEY") {
        builder = builder.api_key(key);
    }
    let client = builder.build()?;

    match client.datasets().get(dataset_id).await? {
        FetchOutcome::Json(description) => {
            let info = &description["data_set_description"];
            println!("Dataset {}: {}", dataset_id, info["name"]);
            println!("  Version: {}", info["version"]);
            println!("  Format:  {}", info["format"]);
        }
        FetchOutcome::Text(text) => println!("{}", text),
    }

    if let FetchOutcome::Json(features) = client.datasets().features(dataset_id).await? {
        let count = features["data_features"]["feature"]
            .as_array()
            .map(Vec::len)
            .unwrap_or(0);
        println!("  Features: {}", count);
    }

    Ok(())
}
