//! Add-on options subsystem.
//!
//! # Data Flow
//! ```text
//! /data/options.json (written by the supervisor)
//!     → document.rs (read & parse, missing file is not an error)
//!     → projection.rs (whitelist filter, value coercion)
//!     → ExportedEnv (handed to the launch step, never to std::env)
//! ```

pub mod document;
pub mod projection;

use std::fmt;

pub use document::{read_options, OptionsDocument, OptionsError};
pub use projection::{project, ExportedEnv, Projection};

/// The keys the launcher is allowed to propagate to the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    SurrealUrl,
    ShopifyUrl,
    ShopifyAccessToken,
    EtsyKeystring,
    EtsySecret,
    EtsyShopId,
}

impl OptionKey {
    /// Every whitelisted key, in export order.
    pub const ALL: [OptionKey; 6] = [
        OptionKey::SurrealUrl,
        OptionKey::ShopifyUrl,
        OptionKey::ShopifyAccessToken,
        OptionKey::EtsyKeystring,
        OptionKey::EtsySecret,
        OptionKey::EtsyShopId,
    ];

    /// Name used both in the options document and in the environment.
    pub const fn as_str(self) -> &'static str {
        match self {
            OptionKey::SurrealUrl => "SURREAL_URL",
            OptionKey::ShopifyUrl => "SHOPIFY_URL",
            OptionKey::ShopifyAccessToken => "SHOPIFY_ACCESS_TOKEN",
            OptionKey::EtsyKeystring => "ETSY_KEYSTRING",
            OptionKey::EtsySecret => "ETSY_SECRET",
            OptionKey::EtsyShopId => "ETSY_SHOP_ID",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
