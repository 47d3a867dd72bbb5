use super::types::CorpusError;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the whole corpus file into memory.
pub async fn load_corpus(path: impl AsRef<Path>) -> Result<String, CorpusError> {
    let path = path.as_ref();
    tracing::info!("Data file path: {}", path.display());

    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => CorpusError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CorpusError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Corpus is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    tracing::info!("Successfully read file ({} bytes)", text.len());
    Ok(text)
}
