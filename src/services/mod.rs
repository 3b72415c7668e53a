pub mod api_client;
pub mod storage_service;

pub use api_client::ApiClient;
pub use storage_service::StorageService;
