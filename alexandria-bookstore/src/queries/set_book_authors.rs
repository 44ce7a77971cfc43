pub struct SetBookAuthors;
pub mod set_book_authors {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "SetBookAuthors";
    pub const QUERY: &'static str = "mutation SetBookAuthors($bookId: ID!, $authorIds: [ID!]!) {\n    setBookAuthors(bookId: $bookId, authorIds: $authorIds) {\n        ...BookFragment\n    }\n}\n\nfragment BookFragment on Book {\n    id\n    name\n    publisher {\n        id\n        name\n    }\n    authors {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct SetBookAuthorsSetBookAuthorsPublisher {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct SetBookAuthorsSetBookAuthorsAuthors {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct SetBookAuthorsSetBookAuthors {
        pub id: ID,
        pub name: String,
        pub publisher: SetBookAuthorsSetBookAuthorsPublisher,
        pub authors: Vec<SetBookAuthorsSetBookAuthorsAuthors>
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        #[serde(rename = "bookId")]
        pub book_id: ID,
        #[serde(rename = "authorIds")]
        pub author_ids: Vec<ID>
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "setBookAuthors")]
        pub set_book_authors: SetBookAuthorsSetBookAuthors
    }
}
impl alexandria::GraphQLQuery for SetBookAuthors {
    type Variables = set_book_authors::Variables;
    type ResponseData = set_book_authors::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: set_book_authors::QUERY,
                operation_name: set_book_authors::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 2749671213,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Book", "Publisher", "Author"]
            }
        )
    }
}
