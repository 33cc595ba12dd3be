use crate::db::Database;
use crate::remote::RemoteFunction;

/// Process-wide dependencies, built once at startup and shared with every handler
#[derive(Clone, Debug)]
pub struct AppContext {
    pub database: Database,
    pub remote: RemoteFunction,
}

impl AppContext {
    pub fn new(database: Database, remote: RemoteFunction) -> Self {
        AppContext { database, remote }
    }
}
