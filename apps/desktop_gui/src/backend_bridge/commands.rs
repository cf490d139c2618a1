//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    FetchPage { page: u32 },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchPage { .. } => "fetch_page",
            Self::Shutdown => "shutdown",
        }
    }
}
