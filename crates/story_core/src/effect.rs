use crate::{Endpoint, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RunFetch {
        request_id: RequestId,
        endpoint: Endpoint,
    },
    PersistQuery(String),
}
