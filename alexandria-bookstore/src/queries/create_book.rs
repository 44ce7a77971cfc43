pub struct CreateBook;
pub mod create_book {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "CreateBook";
    pub const QUERY: &'static str = "mutation CreateBook($book: BookInput!) {\n    createBook(book: $book) {\n        ...BookFragment\n    }\n}\n\nfragment BookFragment on Book {\n    id\n    name\n    publisher {\n        id\n        name\n    }\n    authors {\n        id\n        name\n    }\n}";
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
    pub struct CreateBookCreateBookPublisher {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct CreateBookCreateBookAuthors {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct CreateBookCreateBook {
        pub id: ID,
        pub name: String,
        pub publisher: CreateBookCreateBookPublisher,
        pub authors: Vec<CreateBookCreateBookAuthors>
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        pub book: BookInput
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "createBook")]
        pub create_book: CreateBookCreateBook
    }
}
impl alexandria::GraphQLQuery for CreateBook {
    type Variables = create_book::Variables;
    type ResponseData = create_book::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: create_book::QUERY,
                operation_name: create_book::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 3511254009,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Book", "Publisher", "Author"]
            }
        )
    }
}
