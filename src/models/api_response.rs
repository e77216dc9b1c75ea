use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: String,
}

// Error envelope shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
