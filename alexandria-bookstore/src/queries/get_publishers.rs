pub struct GetPublishers;
pub mod get_publishers {
    #![allow(dead_code)]
    use serde::{Deserialize, Serialize};
    pub const OPERATION_NAME: &'static str = "GetPublishers";
    pub const QUERY: &'static str =
        "query GetPublishers {\n    publishers {\n        id\n        name\n    }\n}";
    type Boolean = bool;
    type Float = f64;
    type Int = i64;
    type ID = String;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct GetPublishersPublishers {
        pub id: ID,
        pub name: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        pub publishers: Vec<GetPublishersPublishers>
    }
}
impl alexandria::GraphQLQuery for GetPublishers {
    type Variables = get_publishers::Variables;
    type ResponseData = get_publishers::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        alexandria::QueryBody<Self::Variables>,
        alexandria::exchange::OperationMeta
    ) {
        (
            alexandria::QueryBody {
                variables,
                query: get_publishers::QUERY,
                operation_name: get_publishers::OPERATION_NAME
            },
            alexandria::exchange::OperationMeta {
                query_key: 1856289740,
                operation_type: alexandria::exchange::OperationType::Query,
                involved_types: vec!["Publisher"]
            }
        )
    }
}
