use common::model::messages::ClientRequest;

// Messages from the console to the game thread
#[derive(Debug, Clone, PartialEq)]
pub enum GameRequest {
    Client(ClientRequest),
    // Input the console could not turn into a request
    Invalid { input: String, reason: String },
}

impl From<ClientRequest> for GameRequest {
    fn from(request: ClientRequest) -> Self {
        GameRequest::Client(request)
    }
}
