use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use uuid::Uuid;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

// Extension is whatever follows the last dot; extensionless uploads get a
// bare uuid key.
pub fn object_key(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
        _ => Uuid::new_v4().to_string(),
    }
}

pub fn object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
}

pub async fn upload_object(
    client: &s3::Client,
    bucket: &str,
    region: &str,
    key: &str,
    body: Bytes,
) -> Result<String, s3::Error> {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .send()
        .await?;

    Ok(object_url(bucket, region, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_keeps_filename_extension() {
        let key = object_key("lamp.png");
        let (stem, ext) = key.rsplit_once('.').unwrap();

        assert_eq!(ext, "png");
        assert!(Uuid::parse_str(stem).is_ok());
    }

    #[test]
    fn object_key_uses_last_extension_segment() {
        let key = object_key("archive.tar.gz");

        assert!(key.ends_with(".gz"));
    }

    #[test]
    fn object_key_without_extension_is_bare_uuid() {
        let key = object_key("README");

        assert!(!key.contains('.'));
        assert!(Uuid::parse_str(&key).is_ok());
    }

    #[test]
    fn object_key_with_trailing_dot_is_bare_uuid() {
        let key = object_key("weird.");

        assert!(!key.contains('.'));
        assert!(Uuid::parse_str(&key).is_ok());
    }

    #[test]
    fn object_keys_never_collide() {
        assert_ne!(object_key("a.png"), object_key("a.png"));
    }

    #[test]
    fn object_url_is_deterministic() {
        assert_eq!(
            object_url("my-test-bucket", "eu-central-1", "abc.png"),
            "https://my-test-bucket.s3.eu-central-1.amazonaws.com/abc.png"
        );
    }
}
