//! Fetch-and-process service
//!
//! Glues [`Fetcher`] to [`Processor`] and folds every outcome into a
//! [`Response`]. Nothing here returns an error: failures end up in
//! [`Response::error`], with the status code kept whenever the server answered.

use crate::config::{Config, ResponseConfig};
use crate::fetch::{FetchRequest, FetchResult, Fetcher};
use crate::pipeline::{PipelineObserver, Processor};
use crate::response::Response;
use std::sync::Arc;
use tracing::{info, warn};

pub struct GraphService {
    fetcher: Fetcher,
    processor: Processor,
    response: ResponseConfig,
}

impl GraphService {
    pub fn new(config: Config) -> FetchResult<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config.fetch)?,
            processor: Processor::new(config.processor),
            response: config.response,
        })
    }

    /// Replace the pipeline observer
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.processor = self.processor.with_observer(observer);
        self
    }

    /// Fetch `uri` and index the document
    pub async fn get_and_process(&self, uri: &str) -> Response {
        self.get_and_process_request(&FetchRequest::new(uri)).await
    }

    pub async fn get_and_process_request(&self, request: &FetchRequest) -> Response {
        info!(uri = %request.uri, "Requesting");

        let fetched = match self.fetcher.get(request).await {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(uri = %request.uri, "Error getting: {}", err);
                return self.finish(Response::failure(
                    request.uri.as_str(),
                    err.status_code().unwrap_or(0),
                    err.to_string(),
                ));
            }
        };

        let response = self.process_bytes(&fetched.uri, fetched.status_code, &fetched.body);
        if response.is_success() {
            info!(uri = %request.uri, "Done");
        }
        response
    }

    /// Index an already-fetched body
    pub fn process_bytes(&self, uri: &str, status_code: u16, body: &[u8]) -> Response {
        let outcome = self.processor.process(body);
        if let Err(err) = &outcome {
            warn!(uri, "Error processing: {}", err);
        }
        self.finish(Response::from_outcome(uri, status_code, outcome))
    }

    fn finish(&self, response: Response) -> Response {
        if self.response.status_class_prefix {
            response.with_status_class_prefix()
        } else {
            response
        }
    }
}

impl std::fmt::Debug for GraphService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphService")
            .field("fetcher", &self.fetcher)
            .field("processor", &self.processor)
            .field("response", &self.response)
            .finish()
    }
}
