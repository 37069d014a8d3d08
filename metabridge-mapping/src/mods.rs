//! MODS (Metadata Object Description Schema) crosswalk.

use crate::catalog::QueryCatalog;
use crate::error::MappingResult;
use metabridge_types::{Datastream, DcField};

pub const SCHEMA: &str = "MODS";

pub fn can_import(datastream: &Datastream) -> bool {
    datastream.format() == Some(SCHEMA)
}

pub fn catalog() -> MappingResult<QueryCatalog> {
    Ok(QueryCatalog::builder()
        .map(DcField::Title, &["//mods/titleInfo/title"])?
        // one value per creator, family and given parts joined
        .map_joined(
            DcField::Creator,
            &[r#"//mods/name[role="creator"]"#],
            "namePart",
            ", ",
        )?
        .map(DcField::Subject, &["//mods/subject/topic"])?
        .map(
            DcField::Description,
            &["//mods/abstract", "//mods/note", "//mods/tableOfContents"],
        )?
        .map(DcField::Publisher, &["//mods/originInfo/publisher"])?
        // name/namePart → Contributor varies too much between institutions
        .unmapped(DcField::Contributor)
        .map(
            DcField::Date,
            &[
                "//mods/originInfo/dateIssued",
                "//mods/originInfo/dateCreated",
                "//mods/originInfo/dateCaptured",
                "//mods/originInfo/dateOther",
            ],
        )?
        .map(DcField::Type, &["//mods/typeOfResource", "//mods/genre"])?
        .map(
            DcField::Format,
            &[
                "//mods/physicalDescription/internetMediaType",
                "//mods/physicalDescription/extent",
                "//mods/physicalDescription/form",
            ],
        )?
        .map(
            DcField::Identifier,
            &["//mods/identifier", "//mods/location/uri"],
        )?
        .map(
            DcField::Source,
            &[
                r#"//mods/relatedItem[@type="original"]/titleInfo/title"#,
                r#"//mods/relatedItem[@type="original"]/location/url"#,
            ],
        )?
        .map(DcField::Language, &["//mods/language"])?
        .map(
            DcField::Relation,
            &[
                "//mods/relatedItem/titleInfo/title",
                "//mods/relatedItem/location/url",
            ],
        )?
        .map(
            DcField::Coverage,
            &[
                "//mods/subject/temporal",
                "//mods/subject/geographic",
                "//mods/subject/hierarchicalGeographic",
                "//mods/subject/cartographics",
            ],
        )?
        // TODO: map accessCondition once Rights handling is signed off; until
        // then Rights stays empty like the deployed crosswalk.
        .unmapped(DcField::Rights)
        .build())
}
