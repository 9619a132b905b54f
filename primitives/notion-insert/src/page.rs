//! Request body for creating a title-only page in a Notion database.

use serde::Serialize;

/// Body of `POST /v1/pages`.
///
/// Serializes as
/// `{"parent":{"database_id":ID},"properties":{"Title":{"title":[{"text":{"content":TITLE}}]}}}`.
#[derive(Debug, Serialize)]
pub struct NewPage<'a> {
    pub parent: Parent<'a>,
    pub properties: Properties<'a>,
}

#[derive(Debug, Serialize)]
pub struct Parent<'a> {
    pub database_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Properties<'a> {
    #[serde(rename = "Title")]
    pub title: TitleProperty<'a>,
}

/// A title property holding exactly one text segment.
#[derive(Debug, Serialize)]
pub struct TitleProperty<'a> {
    pub title: [RichText<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct RichText<'a> {
    pub text: TextContent<'a>,
}

#[derive(Debug, Serialize)]
pub struct TextContent<'a> {
    pub content: &'a str,
}

impl<'a> NewPage<'a> {
    pub fn new(database_id: &'a str, title: &'a str) -> Self {
        Self {
            parent: Parent { database_id },
            properties: Properties {
                title: TitleProperty {
                    title: [RichText {
                        text: TextContent { content: title },
                    }],
                },
            },
        }
    }
}
