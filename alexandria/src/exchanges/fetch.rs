use crate::{
    types::{Client, Exchange, ExchangeFactory, ExchangeResult, Operation, OperationResult},
    DebugInfo, GraphQLQuery, HeaderPair, QueryBody, Response, ResultSource
};
use crate::types::OperationOptions;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum FetchError {
    NetworkError(Box<dyn Error + Send + Sync>),
    DecodeError(reqwest::Error)
}
impl Error for FetchError {}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NetworkError(e) => write!(f, "fetch error: {}", e),
            FetchError::DecodeError(e) => write!(f, "decoding error: {}", e)
        }
    }
}

/// The default fetch exchange, sending operations to the endpoint as JSON
/// `POST` bodies using `reqwest`. Terminal: it never forwards an operation.
pub struct FetchExchange;

impl<TNext: Exchange> ExchangeFactory<TNext> for FetchExchange {
    type Output = FetchExchange;

    fn build(self, _next: TNext) -> Self::Output {
        FetchExchange
    }
}

impl FetchExchange {
    async fn fetch<Q: GraphQLQuery>(
        extra_headers: Vec<HeaderPair>,
        options: OperationOptions,
        query: QueryBody<Q::Variables>
    ) -> Result<Response<Q::ResponseData>, FetchError> {
        let client = reqwest::Client::new();
        let mut request = client
            .post(options.url.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&query);

        for HeaderPair(key, value) in extra_headers {
            request = request.header(key, &value);
        }

        request
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(Box::new(e)))?
            .json()
            .await
            .map_err(FetchError::DecodeError)
    }
}

#[async_trait]
impl Exchange for FetchExchange {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        _client: C
    ) -> ExchangeResult<Q::ResponseData> {
        let extra_headers = if let Some(ref extra_headers) = operation.options.extra_headers {
            extra_headers()
        } else {
            Vec::new()
        };

        log::debug!(
            "fetching {} from {}",
            operation.query.operation_name,
            operation.options.url
        );

        let mut response =
            FetchExchange::fetch::<Q>(extra_headers, operation.options, operation.query).await?;

        response.debug_info = Some(DebugInfo {
            source: ResultSource::Network,
            did_dedup: false
        });

        Ok(OperationResult {
            key: operation.key,
            meta: operation.meta,
            response
        })
    }
}
