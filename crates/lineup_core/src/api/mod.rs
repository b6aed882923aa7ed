//! JSON API
//!
//! String-in, string-out entry points for hosts that talk JSON (UI bridges,
//! the command-line front end). Every response is wrapped in [`ApiResponse`].

pub mod board_json;
pub mod response;

pub use board_json::{
    api_schema_json, arrange_formation_json, catalog_json, evaluate_drop_json, ArrangeRequest,
    ArrangeResponse, CatalogRequest, CatalogResponse, DropRequest, DropResponse, DropTarget,
};
pub use response::{ApiError, ApiResponse, API_VERSION};
