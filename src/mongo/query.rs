use mongodb::{Collection, bson::Document, options::FindOptions};

use crate::mongo::cursor;

/// A `find` command with the cursor modifiers the report uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    pub filter: Document,
    pub projection: Option<Document>,
    pub sort: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl FindQuery {
    pub fn options(&self) -> FindOptions {
        let mut options = FindOptions::default();
        options.projection = self.projection.clone();
        options.sort = self.sort.clone();
        options.skip = self.skip;
        options.limit = self.limit;
        options
    }
}

pub async fn find(
    collection: &Collection<Document>,
    query: &FindQuery,
) -> mongodb::error::Result<Vec<Document>> {
    let cursor = collection.find(query.filter.clone(), query.options()).await?;
    cursor::collect_all(cursor).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn options_carry_every_modifier() {
        let query = FindQuery {
            filter: doc! {},
            projection: Some(doc! { "title": 1 }),
            sort: Some(doc! { "title": 1 }),
            skip: Some(5),
            limit: Some(5),
        };

        let options = query.options();
        assert_eq!(options.projection, Some(doc! { "title": 1 }));
        assert_eq!(options.sort, Some(doc! { "title": 1 }));
        assert_eq!(options.skip, Some(5));
        assert_eq!(options.limit, Some(5));
    }

    #[test]
    fn default_query_has_no_modifiers() {
        let options = FindQuery::default().options();
        assert!(options.projection.is_none());
        assert!(options.sort.is_none());
        assert!(options.skip.is_none());
        assert!(options.limit.is_none());
    }
}
