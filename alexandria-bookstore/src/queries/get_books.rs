pub struct GetBooks;
pub mod get_books {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "GetBooks";
    pub const QUERY: &'static str = "query GetBooks {\n    books {\n        ...BookFragment\n    }\n}\n\nfragment BookFragment on Book {\n    id\n    name\n    publisher {\n        id\n        name\n    }\n    authors {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct GetBooksBooksPublisher {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct GetBooksBooksAuthors {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct GetBooksBooks {
        pub id: ID,
        pub name: String,
        pub publisher: GetBooksBooksPublisher,
        pub authors: Vec<GetBooksBooksAuthors>
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        pub books: Vec<GetBooksBooks>
    }
}
impl alexandria::GraphQLQuery for GetBooks {
    type Variables = get_books::Variables;
    type ResponseData = get_books::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: get_books::QUERY,
                operation_name: get_books::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 2998413457,
                operation_type: alexandria::exchange::OperationType::Query,
                involved_types: vec!["Book", "Publisher", "Author"]
            }
        )
    }
}
