pub struct CreateAuthor;
pub mod create_author {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "CreateAuthor";
    pub const QUERY: &'static str = "mutation CreateAuthor($author: AuthorInput!) {\n    createAuthor(author: $author) {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct AuthorInput {
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct CreateAuthorCreateAuthor {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        pub author: AuthorInput
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "createAuthor")]
        pub create_author: CreateAuthorCreateAuthor
    }
}
impl alexandria::GraphQLQuery for CreateAuthor {
    type Variables = create_author::Variables;
    type ResponseData = create_author::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: create_author::QUERY,
                operation_name: create_author::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 3963392761,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Author"]
            }
        )
    }
}
