use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Fixed acknowledgement body, e.g. `{"message": "put called"}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Ack {
    pub message: &'static str,
}
