//! Query documents for the `articles` collection.

use crate::model::ArticleType;
use mongodb::bson::{doc, Document};

/// Tags written to type `a` articles.
pub const TYPE_A_TAGS: [&str; 3] = ["tag1-a", "tag2-a", "tag3"];
/// Tags written to every article that is not type `a`.
pub const OTHER_TAGS: [&str; 3] = ["tag2", "tag3", "super"];
/// Tags searched for and then pulled from every article.
pub const PULLED_TAGS: [&str; 2] = ["tag2", "tag1-a"];

pub fn by_type(kind: ArticleType) -> Document {
    doc! { "type": kind.as_str() }
}

pub fn excluding_type(kind: ArticleType) -> Document {
    doc! { "type": { "$ne": kind.as_str() } }
}

/// Matches articles whose tags contain at least one of `tags`.
pub fn tags_any_of(tags: &[&str]) -> Document {
    doc! { "tags": { "$in": tags } }
}

/// Replaces the whole tag list.
pub fn set_tags(tags: &[&str]) -> Document {
    doc! { "$set": { "tags": tags } }
}

/// Removes every occurrence of `tags`, keeping the order of the rest.
pub fn pull_tags(tags: &[&str]) -> Document {
    doc! { "$pull": { "tags": { "$in": tags } } }
}

/// Empty filter.
pub fn all() -> Document {
    Document::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filters_match_and_exclude() {
        assert_eq!(by_type(ArticleType::A), doc! { "type": "a" });
        assert_eq!(
            excluding_type(ArticleType::A),
            doc! { "type": { "$ne": "a" } }
        );
    }

    #[test]
    fn tag_updates_carry_exact_lists() {
        assert_eq!(
            set_tags(&TYPE_A_TAGS),
            doc! { "$set": { "tags": ["tag1-a", "tag2-a", "tag3"] } }
        );
        assert_eq!(
            pull_tags(&PULLED_TAGS),
            doc! { "$pull": { "tags": { "$in": ["tag2", "tag1-a"] } } }
        );
        assert_eq!(
            tags_any_of(&PULLED_TAGS),
            doc! { "tags": { "$in": ["tag2", "tag1-a"] } }
        );
    }

    #[test]
    fn all_is_an_empty_filter() {
        assert!(all().is_empty());
    }
}
