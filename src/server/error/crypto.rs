use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Failed to encrypt value")]
    Encrypt,

    /// Stored value is not valid base64 or is shorter than a nonce.
    #[error("Encrypted value is malformed")]
    Malformed,

    /// Authentication tag mismatch, usually a different `APP_KEY`.
    #[error("Failed to decrypt value")]
    Decrypt,
}
