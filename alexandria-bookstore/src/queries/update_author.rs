pub struct UpdateAuthor;
pub mod update_author {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "UpdateAuthor";
    pub const QUERY: &'static str = "mutation UpdateAuthor($authorId: ID!, $author: AuthorInput!) {\n    updateAuthor(authorId: $authorId, author: $author) {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct AuthorInput {
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct UpdateAuthorUpdateAuthor {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        #[serde(rename = "authorId")]
        pub author_id: ID,
        pub author: AuthorInput
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "updateAuthor")]
        pub update_author: UpdateAuthorUpdateAuthor
    }
}
impl alexandria::GraphQLQuery for UpdateAuthor {
    type Variables = update_author::Variables;
    type ResponseData = update_author::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: update_author::QUERY,
                operation_name: update_author::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 1434067794,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Author"]
            }
        )
    }
}
