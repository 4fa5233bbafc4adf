//! Domain models.
//!
//! - [`family`] - The remote catalog shape (families, variants, subsets)
//! - [`variant`] - Variant keys ("400", "700i") and their parsed form
//! - [`result`] - Parsed CSS tables and fetch results

pub mod family;
pub mod result;
pub mod variant;

pub use family::{Family, FontMetadata, Metadata};
pub use result::{
    FamilyFonts, FetchAllResult, FetchFontResult, FetchFontsResult, FontFace, ParsedCss,
};
pub use variant::VariantKey;
