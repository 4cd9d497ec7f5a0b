//! dq-figma: Figma REST API access
//!
//! ## Endpoints
//!
//! | Key | Path |
//! |-----|------|
//! | `files` | `/files/{param}` |
//! | `images` | `/images/{param}` |
//! | `projects` | `/projects/{param}` |
//! | `team_projects` | `/teams/{param}/projects` |
//! | `components` | `/components/{param}` |
//! | `component_sets` | `/component_sets/{param}` |
//! | `styles` | `/styles/{param}` |
//! | `comments` | `/files/{param}/comments` |
//! | `user_me` | `/me` |
//! | `file_nodes` | `/files/{param}/nodes` |
//! | `team_components` | `/teams/{param}/components` |
//! | `team_styles` | `/teams/{param}/styles` |
//!
//! ## Authentication
//! - Header: `Authorization: Bearer {FIGMA_ACCESS_TOKEN}`
//! - Environment: `FIGMA_ACCESS_TOKEN`
//!
//! Every call returns an [`ApiResult`]: either the JSON payload or an error
//! string. Nothing past [`FigmaClient::fetch`] returns `Err`.

pub mod client;
pub mod dump;
pub mod endpoint;
pub mod normalize;

pub use client::FigmaClient;
pub use endpoint::{resolve, Endpoint, QueryParams, RouteError};
pub use normalize::{normalize, ApiResult};
