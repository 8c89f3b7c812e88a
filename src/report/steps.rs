//! The fixed catalogue of report steps and the commands each one sends.

use mongodb::bson::{doc, Document};
use serde::Serialize;

use crate::config::PAGE_SIZE;
use crate::mongo::query::FindQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    InStockAfter2010,
    PriceAscending,
    PriceDescending,
    FirstPage,
    SecondPage,
    AveragePriceByGenre,
    TopAuthor,
    BooksByDecade,
    TitleIndex,
    AuthorYearIndex,
    ExplainTitle,
    ExplainAuthorYear,
}

/// What a step asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Find(FindQuery),
    Aggregate(Vec<Document>),
    CreateIndex(Document),
    Explain(Document),
}

impl Step {
    pub const ALL: [Step; 12] = [
        Step::InStockAfter2010,
        Step::PriceAscending,
        Step::PriceDescending,
        Step::FirstPage,
        Step::SecondPage,
        Step::AveragePriceByGenre,
        Step::TopAuthor,
        Step::BooksByDecade,
        Step::TitleIndex,
        Step::AuthorYearIndex,
        Step::ExplainTitle,
        Step::ExplainAuthorYear,
    ];

    /// Section number shown in the output. Both pages of the title listing
    /// share section 4.
    pub fn number(self) -> u8 {
        match self {
            Step::InStockAfter2010 => 1,
            Step::PriceAscending => 2,
            Step::PriceDescending => 3,
            Step::FirstPage | Step::SecondPage => 4,
            Step::AveragePriceByGenre => 5,
            Step::TopAuthor => 6,
            Step::BooksByDecade => 7,
            Step::TitleIndex => 8,
            Step::AuthorYearIndex => 9,
            Step::ExplainTitle => 10,
            Step::ExplainAuthorYear => 11,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::InStockAfter2010 => "Books in stock after 2010",
            Step::PriceAscending => "Books sorted by price ascending",
            Step::PriceDescending => "Books sorted by price descending",
            Step::FirstPage => "Pagination (Page 1 - 5 books)",
            Step::SecondPage => "Pagination (Page 2 - 5 books)",
            Step::AveragePriceByGenre => "Average price of books by genre",
            Step::TopAuthor => "Author with most books",
            Step::BooksByDecade => "Books grouped by decade",
            Step::TitleIndex => "Creating index on title",
            Step::AuthorYearIndex => "Creating compound index on author + published_year",
            Step::ExplainTitle => "Explain query without index",
            Step::ExplainAuthorYear => "Explain query using compound index",
        }
    }

    pub fn operation(self) -> Operation {
        match self {
            Step::InStockAfter2010 => Operation::Find(FindQuery {
                filter: doc! { "in_stock": true, "published_year": { "$gt": 2010 } },
                projection: Some(summary_projection()),
                ..FindQuery::default()
            }),
            Step::PriceAscending => Operation::Find(sorted_summary(doc! { "price": 1 })),
            Step::PriceDescending => Operation::Find(sorted_summary(doc! { "price": -1 })),
            Step::FirstPage => Operation::Find(title_page(1)),
            Step::SecondPage => Operation::Find(title_page(2)),
            Step::AveragePriceByGenre => Operation::Aggregate(vec![doc! {
                "$group": { "_id": "$genre", "averagePrice": { "$avg": "$price" } }
            }]),
            Step::TopAuthor => Operation::Aggregate(vec![
                doc! { "$group": { "_id": "$author", "totalBooks": { "$sum": 1 } } },
                doc! { "$sort": { "totalBooks": -1 } },
                doc! { "$limit": 1 },
            ]),
            Step::BooksByDecade => Operation::Aggregate(vec![
                doc! {
                    "$project": {
                        "decade": {
                            "$multiply": [
                                { "$floor": { "$divide": ["$published_year", 10] } },
                                10
                            ]
                        }
                    }
                },
                doc! { "$group": { "_id": "$decade", "booksCount": { "$sum": 1 } } },
                doc! { "$sort": { "_id": 1 } },
            ]),
            Step::TitleIndex => Operation::CreateIndex(doc! { "title": 1 }),
            Step::AuthorYearIndex => {
                Operation::CreateIndex(doc! { "author": 1, "published_year": -1 })
            }
            Step::ExplainTitle => Operation::Explain(doc! { "title": "The Hobbit" }),
            Step::ExplainAuthorYear => Operation::Explain(doc! {
                "author": "J.K. Rowling",
                "published_year": { "$gt": 1990 }
            }),
        }
    }
}

/// Title, author and price; `_id` suppressed.
pub fn summary_projection() -> Document {
    doc! { "title": 1, "author": 1, "price": 1, "_id": 0 }
}

fn sorted_summary(sort: Document) -> FindQuery {
    FindQuery {
        projection: Some(summary_projection()),
        sort: Some(sort),
        ..FindQuery::default()
    }
}

/// One-based page of the title listing. Page 0 is treated as page 1.
pub fn title_page(page: u64) -> FindQuery {
    FindQuery {
        skip: Some(page.saturating_sub(1) * PAGE_SIZE as u64),
        limit: Some(PAGE_SIZE),
        ..sorted_summary(doc! { "title": 1 })
    }
}
