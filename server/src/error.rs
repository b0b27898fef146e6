//! Request handling errors and their HTTP mapping

use thiserror::Error;

/// Everything that can go wrong while producing a mint signature.
/// Each variant renders to the exact client-facing message and HTTP
/// status the game's claim flow categorizes on.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: walletAddress and points are required")]
    MissingFields,

    #[error("Invalid token amount, please try again")]
    PointsOutOfRange,

    #[error("Invalid wallet address format")]
    InvalidWalletAddress,

    #[error("Server configuration error: {0}")]
    Configuration(String),

    #[error("Contract connection timeout. Please try again.")]
    RpcTimeout,

    #[error("Failed to connect to contract. Please try again.")]
    Rpc(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn rpc(detail: impl Into<String>) -> Self {
        Self::Rpc(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingFields | Self::PointsOutOfRange | Self::InvalidWalletAddress => 400,
            Self::RpcTimeout => 503,
            Self::Configuration(_) | Self::Rpc(_) | Self::Internal(_) => 500,
        }
    }

    /// Detail for the server log; the `Display` impl is what clients
    /// see and deliberately omits internals.
    pub fn log_detail(&self) -> String {
        match self {
            Self::Configuration(detail) | Self::Rpc(detail) | Self::Internal(detail) => {
                format!("{self} ({detail})")
            }
            _ => self.to_string(),
        }
    }
}
