pub struct GetAuthors;
pub mod get_authors {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "GetAuthors";
    pub const QUERY: &'static str =
        "query GetAuthors {\n    authors {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct GetAuthorsAuthors {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        pub authors: Vec<GetAuthorsAuthors>
    }
}
impl alexandria::GraphQLQuery for GetAuthors {
    type Variables = get_authors::Variables;
    type ResponseData = get_authors::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: get_authors::QUERY,
                operation_name: get_authors::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 774250312,
                operation_type: alexandria::exchange::OperationType::Query,
                involved_types: vec!["Author"]
            }
        )
    }
}
