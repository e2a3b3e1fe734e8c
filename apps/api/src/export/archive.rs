use aws_sdk_s3::primitives::ByteStream;
use tracing::{info, warn};

use crate::export::ExportedFile;

/// Optional S3 copy of every produced export, keyed `exports/{filename}`.
#[derive(Clone)]
pub struct ExportArchive {
    s3: aws_sdk_s3::Client,
    bucket: String,
}

impl ExportArchive {
    pub fn new(s3: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
        }
    }

    pub fn key_for(file: &ExportedFile) -> String {
        format!("exports/{}", file.filename)
    }

    pub async fn upload(&self, file: &ExportedFile) -> anyhow::Result<String> {
        let key = Self::key_for(file);
        self.s3
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(file.bytes.clone()))
            .content_type(file.content_type)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;
        Ok(key)
    }

    /// Upload that never fails the caller; errors are logged.
    pub async fn store(&self, file: &ExportedFile) {
        match self.upload(file).await {
            Ok(key) => info!("Archived export to s3://{}/{}", self.bucket, key),
            Err(e) => warn!("Export archive skipped for {}: {e}", file.filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;

    #[test]
    fn test_archive_key() {
        let file = ExportedFile::new(ExportFormat::Docx, "Jane Doe", Vec::new());
        assert_eq!(ExportArchive::key_for(&file), "exports/Jane_Doe.docx");
    }
}
