//! Channel shared by the per-service gRPC clients.

use crate::convert::ConversionError;
use gateway_types::TransportError;
use std::time::Duration;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};

/// Connection settings for the gRPC gateway.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Endpoint URL, e.g. `http://localhost:9003`
    pub url: String,
    /// Per-call timeout, also used as the connect timeout
    pub timeout: Duration,
}

impl GrpcClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(100),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Lazily connected channel plus a generic unary call.
///
/// Must be created inside a Tokio runtime. Cloning shares the underlying
/// HTTP/2 connection.
#[derive(Debug, Clone)]
pub struct GrpcChannel {
    channel: Channel,
    url: String,
}

impl GrpcChannel {
    pub fn new(config: &GrpcClientConfig) -> Result<Self, TransportError> {
        let endpoint = Endpoint::from_shared(config.url.clone())
            .map_err(|e| TransportError::Connection {
                endpoint: config.url.clone(),
                message: format!("Invalid gRPC endpoint: {e}"),
            })?
            .timeout(config.timeout)
            .connect_timeout(config.timeout);

        Ok(Self {
            channel: endpoint.connect_lazy(),
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call the unary RPC at `method` (full `/package.Service/Method` path).
    pub async fn unary<Req, Resp>(
        &self,
        method: &'static str,
        request: Req,
    ) -> Result<Resp, TransportError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| TransportError::Connection {
                endpoint: method.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("gRPC {}", method);
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(method),
                codec,
            )
            .await
            .map_err(|status| status_error(method, status))?;

        Ok(response.into_inner())
    }
}

fn status_error(method: &str, status: tonic::Status) -> TransportError {
    TransportError::Rpc {
        endpoint: method.to_string(),
        code: format!("{:?}", status.code()),
        message: status.message().to_string(),
    }
}

/// Map a proto-to-domain conversion failure onto the transport error type.
pub(crate) fn decode_error(method: &str, e: ConversionError) -> TransportError {
    TransportError::Decode {
        endpoint: method.to_string(),
        message: e.to_string(),
    }
}
