pub struct CreatePublisher;
pub mod create_publisher {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "CreatePublisher";
    pub const QUERY: &'static str = "mutation CreatePublisher($publisher: PublisherInput!) {\n    createPublisher(publisher: $publisher) {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct PublisherInput {
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct CreatePublisherCreatePublisher {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        pub publisher: PublisherInput
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "createPublisher")]
        pub create_publisher: CreatePublisherCreatePublisher
    }
}
impl alexandria::GraphQLQuery for CreatePublisher {
    type Variables = create_publisher::Variables;
    type ResponseData = create_publisher::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: create_publisher::QUERY,
                operation_name: create_publisher::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 2217821001,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Publisher"]
            }
        )
    }
}
