use service::customer::CustomerService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService,
}

impl ServerState {
    pub fn new(customers: CustomerService) -> Self { Self { customers } }
}
