//! Child content blocks of a record, used for the long course description.
use serde::Deserialize;
use serde_json::Value;

use crate::{
    properties::{lenient, RichText},
    Client, Result,
};

/// One content block. Only paragraphs carry text we care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub block_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub paragraph: Option<Paragraph>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paragraph {
    #[serde(default, deserialize_with = "lenient")]
    pub rich_text: Vec<RichText>,
}

impl Block {
    /// Decode a block leniently; a mis-shaped block becomes an empty one.
    pub fn from_value(v: Value) -> Self {
        serde_json::from_value(v).unwrap_or_default()
    }
}

/// Flatten paragraph blocks to plain text: runs are concatenated with no
/// separator within a block, blocks are joined with a blank line, and empty
/// paragraphs are dropped. `None` when nothing non-empty remains.
pub fn paragraph_text(blocks: &[Block]) -> Option<String> {
    let paragraphs: Vec<String> = blocks
        .iter()
        .filter(|b| b.block_type == "paragraph")
        .filter_map(|b| b.paragraph.as_ref())
        .map(|p| {
            p.rich_text
                .iter()
                .map(|r| r.plain_text.as_str())
                .collect::<String>()
        })
        .filter(|s| !s.is_empty())
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n\n"))
    }
}

#[derive(Deserialize)]
struct BlockChildrenResp {
    #[serde(default)]
    results: Vec<Value>,
}

impl Client {
    /// Retrieve a record's child content blocks.
    pub fn page_blocks(&self, page_id: &str) -> Result<Vec<Block>> {
        let resp: BlockChildrenResp = self.get(&format!("blocks/{}/children", page_id))?;
        Ok(resp.results.into_iter().map(Block::from_value).collect())
    }
}
