use thiserror::Error;

pub type DeployResult<T> = Result<T, DeployError>;

#[derive(Error, Debug, PartialEq)]
pub enum DeployError {
    #[error("Transaction did not emit a {event} event")]
    MissingEvent { event: String },

    #[error("Event {event} does not carry a '{attribute}' attribute")]
    MissingEventAttribute { event: String, attribute: String },

    #[error("{address} is not a valid bech32 address")]
    InvalidAddress { address: String },

    #[error("Missing required setting {key}")]
    MissingConfig { key: String },

    #[error("Invalid value '{value}' for setting {key}")]
    InvalidConfig { key: String, value: String },
}
