//! Simple Dublin Core (`oai_dc`) crosswalk: every field maps to its own
//! element inside the `dc` container.

use crate::catalog::QueryCatalog;
use crate::error::MappingResult;
use metabridge_types::{Datastream, DcField};

pub const SCHEMA: &str = "DC";

pub fn can_import(datastream: &Datastream) -> bool {
    matches!(datastream.format(), Some("DC" | "oai_dc"))
}

pub fn catalog() -> MappingResult<QueryCatalog> {
    let mut builder = QueryCatalog::builder();
    for field in DcField::ALL {
        let query = format!("//dc/{}", field.name().to_ascii_lowercase());
        builder = builder.map(field, &[query.as_str()])?;
    }
    Ok(builder.build())
}
