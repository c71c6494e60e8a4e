use crate::record::{char_prefix, DistributionRecord};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub const CATEGORY_LABEL_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLeaf {
    pub name: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Category name, truncated for display.
    pub name: String,
    pub children: Vec<ModelLeaf>,
}

/// Two-level rollup: category → model → record count, both levels in
/// first-seen order. Grouping uses the full category; only the label is cut.
pub fn build_hierarchy<'a, I>(records: I) -> Vec<CategoryNode>
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let mut out: Vec<CategoryNode> = Vec::new();
    let mut cat_index: AHashMap<&str, usize> = AHashMap::new();
    let mut leaf_index: AHashMap<(usize, &str), usize> = AHashMap::new();

    for r in records {
        let ci = *cat_index.entry(r.category.as_str()).or_insert_with(|| {
            out.push(CategoryNode {
                name: char_prefix(&r.category, CATEGORY_LABEL_CHARS).to_string(),
                children: Vec::new(),
            });
            out.len() - 1
        });
        let children = &mut out[ci].children;
        let li = *leaf_index.entry((ci, r.model.as_str())).or_insert_with(|| {
            children.push(ModelLeaf { name: r.model.clone(), size: 0 });
            children.len() - 1
        });
        children[li].size += 1;
    }
    out
}
