/**
 * API client for the docdrop backend.
 *  One module per endpoint, all funneled through
 *  a single request/response/error contract.
 */
pub mod api;
/**
 * Share-link routing.
 * Maps URL paths like `/view/:id` to the view
 *  that should handle them, with an explicit
 *  navigation history.
 */
pub mod routes;
/**
 * Persisting downloaded bytes to user storage
 *  under a suggested filename.
 */
pub mod save;

pub mod prelude {
    pub use crate::api::client::{ApiClient, ApiError, ApiRequest, RawBody};
    pub use crate::api::document::access::{AccessRequest, AccessResponse};
    pub use crate::api::document::delete::{DeleteRequest, DeleteResponse};
    pub use crate::api::document::download::DownloadRequest;
    pub use crate::api::document::upload::{UploadRequest, UploadResponse};
    pub use crate::api::health::{HealthRequest, HealthResponse};
    pub use crate::routes::{Navigator, Route, RouteError, RouteMatch, RouteTable, View};
    pub use crate::save::{save_binary_as, SaveError, SavedFile};
}
