use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    /// Transport failure talking to the mail relay.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Relay answered but refused the message.
    #[error("Mail relay rejected message to {recipient} with status {status}")]
    Rejected { recipient: String, status: u16 },
}
