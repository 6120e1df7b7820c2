//! REST API endpoint implementations.
//!
//! Free functions taking the agent and base URL. Domain clients pick which
//! family to call based on the resolved API variant.

mod auth;
mod es_proxy;
pub mod query;
mod roles;
mod saved_objects;
mod spaces;
pub mod url_encoding;

pub use auth::{exchange_credentials, login_jwt, replace_session};
pub use es_proxy::{
    VERSION_HEADER, create_document, delete_document, document_prefix, get_document,
    search_documents, update_document,
};
pub use roles::{delete_role, get_role, list_roles, put_role};
pub use saved_objects::{create_object, delete_object, find_objects, get_object, update_object};
pub use spaces::{create_space, delete_space, get_space, list_spaces, update_space};
