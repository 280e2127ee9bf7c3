//! Client for the NVD CVE API 2.0.
//!
//! Queries are built from logical parameter names, validated and renamed to
//! the API's wire names by [`translate`], then sent as a single GET by
//! [`Client`].
//!
//! ```no_run
//! # async fn run() -> Result<(), nvd_api::Error> {
//! use nvd_api::{Client, CveQuery};
//!
//! let client = Client::new(None)?;
//! let records = client
//!     .search(&CveQuery::new().with_keyword_search("perl cpan").with_no_rejected(true))
//!     .await?;
//! println!("{} matches", records.len());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::Error;
pub use self::query::{
    translate, CveQuery, ParamValue, Parameter, ParameterKind, ParameterSpec, Pattern,
    TranslatedQuery,
};
