use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;

use crate::config::S3Config;

// Credentials come from the SDK's default provider chain. A host without
// credentials still starts; uploads then fail per request and the product
// falls back to the placeholder image.
pub async fn load_s3_client(config: &S3Config) -> S3Client {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let s3_client = S3Client::new(&sdk_config);

    tracing::info!(
        "AWS S3 client initialized for bucket {} in {}",
        config.bucket,
        config.region
    );

    s3_client
}
