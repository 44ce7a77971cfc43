pub struct UpdateBook;
pub mod update_book {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "UpdateBook";
    pub const QUERY: &'static str = "mutation UpdateBook($bookId: ID!, $book: BookInput!) {\n    updateBook(bookId: $bookId, book: $book) {\n        ...BookFragment\n    }\n}\n\nfragment BookFragment on Book {\n    id\n    name\n    publisher {\n        id\n        name\n    }\n    authors {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct BookInput {
        pub name: String,
        #[serde(rename = "publisherId")]
        pub publisher_id: ID
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct UpdateBookUpdateBookPublisher {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct UpdateBookUpdateBookAuthors {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct UpdateBookUpdateBook {
        pub id: ID,
        pub name: String,
        pub publisher: UpdateBookUpdateBookPublisher,
        pub authors: Vec<UpdateBookUpdateBookAuthors>
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        #[serde(rename = "bookId")]
        pub book_id: ID,
        pub book: BookInput
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "updateBook")]
        pub update_book: UpdateBookUpdateBook
    }
}
impl alexandria::GraphQLQuery for UpdateBook {
    type Variables = update_book::Variables;
    type ResponseData = update_book::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: update_book::QUERY,
                operation_name: update_book::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 1021903708,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Book", "Publisher", "Author"]
            }
        )
    }
}
