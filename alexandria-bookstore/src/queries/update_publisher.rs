pub struct UpdatePublisher;
pub mod update_publisher {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "UpdatePublisher";
    pub const QUERY: &'static str = "mutation UpdatePublisher($publisherId: ID!, $publisher: PublisherInput!) {\n    updatePublisher(publisherId: $publisherId, publisher: $publisher) {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct PublisherInput {
        pub name: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct UpdatePublisherUpdatePublisher {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        #[serde(rename = "publisherId")]
        pub publisher_id: ID,
        pub publisher: PublisherInput
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "updatePublisher")]
        pub update_publisher: UpdatePublisherUpdatePublisher
    }
}
impl alexandria::GraphQLQuery for UpdatePublisher {
    type Variables = update_publisher::Variables;
    type ResponseData = update_publisher::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: update_publisher::QUERY,
                operation_name: update_publisher::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 662911786,
                operation_type: alexandria::exchange::OperationType::Mutation,
                involved_types: vec!["Publisher"]
            }
        )
    }
}
