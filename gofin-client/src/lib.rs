//! gofin-client: backend access, dashboard loading and CSV import submission

pub mod api;
pub mod dashboard;
pub mod error;
pub mod import;

pub use api::{HttpApi, ImportPayload, TransactionsApi, TransactionsResponse, IMPORT_FIELD};
pub use dashboard::{DashboardData, DashboardLoader, DashboardView};
pub use error::{ApiError, FetchError, UploadError};
pub use import::{ImportUploader, Navigator, Selection, SubmitOutcome, UploadedFile};
