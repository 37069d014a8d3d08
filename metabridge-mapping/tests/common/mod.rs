//! Shared fixtures for mapping tests.

#![allow(dead_code)]

/// A MODS record using a prefixed namespace, with two notes and no abstract.
pub const MODS_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mods:mods xmlns:mods="http://www.loc.gov/mods/v3" version="3.4">
    <mods:titleInfo>
        <mods:title>Letter from Thomas Jefferson</mods:title>
    </mods:titleInfo>
    <mods:name type="personal">
        <mods:namePart>Jefferson, Thomas</mods:namePart>
        <mods:role><mods:roleTerm type="text">creator</mods:roleTerm></mods:role>
    </mods:name>
    <mods:name type="personal">
        <mods:namePart>Madison, James</mods:namePart>
        <mods:role><mods:roleTerm type="text">recipient</mods:roleTerm></mods:role>
    </mods:name>
    <mods:typeOfResource>text</mods:typeOfResource>
    <mods:genre>correspondence</mods:genre>
    <mods:originInfo>
        <mods:publisher>University of Virginia Library</mods:publisher>
        <mods:dateCreated>1801-03-04</mods:dateCreated>
        <mods:dateOther>1801</mods:dateOther>
    </mods:originInfo>
    <mods:language>eng</mods:language>
    <mods:physicalDescription>
        <mods:extent>2 leaves</mods:extent>
        <mods:form>manuscript</mods:form>
    </mods:physicalDescription>
    <mods:note>Written at Washington.</mods:note>
    <mods:note>Docketed by Madison.</mods:note>
    <mods:subject>
        <mods:topic>Presidents</mods:topic>
        <mods:topic>Inaugurations</mods:topic>
        <mods:geographic>Washington (D.C.)</mods:geographic>
    </mods:subject>
    <mods:identifier type="local">MSS 38-1</mods:identifier>
    <mods:relatedItem type="original">
        <mods:titleInfo><mods:title>Jefferson Papers</mods:title></mods:titleInfo>
    </mods:relatedItem>
    <mods:relatedItem type="host">
        <mods:location><mods:url>http://example.edu/collections/jefferson</mods:url></mods:location>
    </mods:relatedItem>
    <mods:accessCondition>Public domain.</mods:accessCondition>
</mods:mods>"#;

/// The same kind of record using a default namespace instead of a prefix.
pub const MODS_DEFAULT_NS: &str = r#"<mods xmlns="http://www.loc.gov/mods/v3">
    <titleInfo><title>Untitled map</title></titleInfo>
    <abstract>Survey of Albemarle County.</abstract>
    <note>Hand colored.</note>
    <tableOfContents>Sheet 1; Sheet 2</tableOfContents>
</mods>"#;

/// An oai_dc record.
pub const DC_RECORD: &str = r#"<oai_dc:dc xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
    xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>Rotunda, north facade</dc:title>
    <dc:creator>Holsinger, Rufus W.</dc:creator>
    <dc:subject>Architecture</dc:subject>
    <dc:subject>University of Virginia</dc:subject>
    <dc:date>1915</dc:date>
    <dc:rights>Copyright not evaluated.</dc:rights>
</oai_dc:dc>"#;
