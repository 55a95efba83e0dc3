//! Server reply to an order submission.

use serde::Deserialize;

/// Status value that marks an accepted order.
pub const STATUS_SUCCESS: &str = "success";

/// Raw reply body: `{status, message?, redirect?}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// The server accepted the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAccepted {
    pub message: Option<String>,
    pub redirect: Option<String>,
}

/// The server answered with any status other than success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRejected {
    pub status: String,
    pub message: Option<String>,
}

impl OrderReply {
    pub fn into_result(self) -> Result<OrderAccepted, OrderRejected> {
        if self.status == STATUS_SUCCESS {
            Ok(OrderAccepted {
                message: non_blank(self.message),
                redirect: non_blank(self.redirect),
            })
        } else {
            Err(OrderRejected {
                status: self.status,
                message: self.message,
            })
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
