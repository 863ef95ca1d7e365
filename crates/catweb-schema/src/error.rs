use thiserror::Error;

/// Failure to read a closed token domain from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown {domain} {token:?}")]
    UnknownToken { domain: &'static str, token: String },
}

pub(crate) fn unknown(domain: &'static str, token: &str) -> DomainError {
    log::debug!("rejecting {domain} token {token:?}");
    DomainError::UnknownToken { domain, token: token.to_owned() }
}
