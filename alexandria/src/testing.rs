//! Fixture queries and fake exchanges shared by the exchange tests.

use crate::{
    types::{
        Client, Exchange, ExchangeResult, Operation, OperationMeta, OperationOptions,
        OperationResult, OperationType
    },
    utils::progressive_hash,
    DebugInfo, GraphQLQuery, QueryBody, RequestPolicy, Response, ResultSource
};
use parking_lot::Mutex;
use std::{any::Any, sync::Arc};

pub struct GetNotes;
pub mod get_notes {
    pub const OPERATION_NAME: &str = "GetNotes";
    pub const QUERY: &str = "query GetNotes {\n    notes {\n        id\n        text\n    }\n}";

    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct GetNotesNotes {
        pub id: String,
        pub text: String
    }
    #[derive(Clone, Debug, Serialize, PartialEq)]
    pub struct Variables;
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        pub notes: Vec<GetNotesNotes>
    }

    pub fn note(id: &str, text: &str) -> GetNotesNotes {
        GetNotesNotes {
            id: id.to_string(),
            text: text.to_string()
        }
    }
}

impl GraphQLQuery for GetNotes {
    type Variables = get_notes::Variables;
    type ResponseData = get_notes::ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        (
            QueryBody {
                variables,
                query: get_notes::QUERY,
                operation_name: get_notes::OPERATION_NAME
            },
            OperationMeta {
                query_key: 1101,
                operation_type: OperationType::Query,
                involved_types: vec!["Note"]
            }
        )
    }
}

pub struct AddNote;
pub mod add_note {
    pub const OPERATION_NAME: &str = "AddNote";
    pub const QUERY: &str =
        "mutation AddNote($text: String!) {\n    addNote(text: $text) {\n        id\n        text\n    }\n}";

    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct AddNoteAddNote {
        pub id: String,
        pub text: String
    }
    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct Variables {
        pub text: String
    }
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    pub struct ResponseData {
        #[serde(rename = "addNote")]
        pub add_note: AddNoteAddNote
    }
}

impl GraphQLQuery for AddNote {
    type Variables = add_note::Variables;
    type ResponseData = add_note::ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        (
            QueryBody {
                variables,
                query: add_note::QUERY,
                operation_name: add_note::OPERATION_NAME
            },
            OperationMeta {
                query_key: 1102,
                operation_type: OperationType::Mutation,
                involved_types: vec!["Note"]
            }
        )
    }
}

#[derive(Clone)]
pub struct NullClient;
impl Client for NullClient {
    fn rerun_query(&self, _query_key: u64) {}
}

pub fn make_operation<Q: GraphQLQuery>(
    _query: Q,
    variables: Q::Variables,
    request_policy: RequestPolicy
) -> Operation<Q::Variables> {
    let (query, meta) = Q::build_query(variables);
    Operation {
        key: progressive_hash(meta.query_key, &query.variables),
        meta,
        query,
        options: OperationOptions {
            url: "http://0.0.0.0".parse().unwrap(),
            extra_headers: None,
            request_policy,
            extensions: None
        }
    }
}

pub fn make_result<Q: GraphQLQuery>(
    operation: Operation<Q::Variables>,
    data: Box<dyn Any>
) -> ExchangeResult<Q::ResponseData> {
    let data = *data.downcast::<Q::ResponseData>().unwrap();
    Ok(OperationResult {
        key: operation.key,
        meta: operation.meta,
        response: Response {
            debug_info: Some(DebugInfo {
                source: ResultSource::Network,
                did_dedup: false
            }),
            errors: None,
            data: Some(data)
        }
    })
}

/// A stand-in for the fetch exchange holding an in-memory notes list.
pub struct FakeFetchExchange {
    notes: Arc<Mutex<Vec<get_notes::GetNotesNotes>>>
}

impl FakeFetchExchange {
    pub fn with_notes(notes: Vec<get_notes::GetNotesNotes>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(notes))
        }
    }
}

#[async_trait]
impl Exchange for FakeFetchExchange {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        _client: C
    ) -> ExchangeResult<Q::ResponseData> {
        match operation.meta.query_key {
            1101 => {
                let data = get_notes::ResponseData {
                    notes: self.notes.lock().clone()
                };
                make_result::<Q>(operation, Box::new(data))
            }
            1102 => {
                let variables: add_note::Variables =
                    serde_json::from_value(serde_json::to_value(&operation.query.variables).unwrap())
                        .unwrap();
                let note = {
                    let mut notes = self.notes.lock();
                    let note = get_notes::note(&format!("{}", notes.len() + 1), &variables.text);
                    notes.push(note.clone());
                    note
                };
                let data = add_note::ResponseData {
                    add_note: add_note::AddNoteAddNote {
                        id: note.id,
                        text: note.text
                    }
                };
                make_result::<Q>(operation, Box::new(data))
            }
            key => panic!("fake fetch got called with unexpected query {}", key)
        }
    }
}
