//! Request extractors.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use domain::models::RequestContext;

use crate::middleware::RequestId;

/// Extracts the request metadata attached to every audit entry: the
/// request ID set by the tracing middleware, the client address as
/// reported by the reverse proxy, and the user agent.
///
/// Infallible; missing pieces are recorded as absent rather than
/// failing the request.
#[derive(Debug, Clone)]
pub struct AuditContext(pub RequestContext);

#[async_trait]
impl<S> FromRequestParts<S> for AuditContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts.extensions.get::<RequestId>().map(|id| id.0.clone());

        // First hop of X-Forwarded-For is the original client
        let client_ip = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        Ok(AuditContext(RequestContext {
            request_id,
            client_ip,
            user_agent,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>) -> RequestContext {
        let (mut parts, _) = req.into_parts();
        let AuditContext(ctx) = AuditContext::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        ctx
    }

    #[tokio::test]
    async fn test_full_context() {
        let mut req = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .header("user-agent", "Mozilla/5.0")
            .body(())
            .unwrap();
        req.extensions_mut()
            .insert(RequestId("req-42".to_string()));

        let ctx = extract(req).await;
        assert_eq!(ctx.request_id.as_deref(), Some("req-42"));
        assert_eq!(ctx.client_ip.as_deref(), Some("203.0.113.9"));
        assert_eq!(ctx.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_missing_pieces_are_absent() {
        let req = Request::builder().body(()).unwrap();
        let ctx = extract(req).await;
        assert!(ctx.request_id.is_none());
        assert!(ctx.client_ip.is_none());
        assert!(ctx.user_agent.is_none());
    }
}
