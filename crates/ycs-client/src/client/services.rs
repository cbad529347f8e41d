//! Service status operations.

use tracing::info;

use super::Client;
use crate::consts::Lang;
use crate::error::{ClientError, Operation};
use crate::types::Services;

impl Client {
    /// Get status of all services, with their incidents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the response cannot be decoded.
    pub fn get_services(&self, lang: Lang) -> Result<Services, ClientError> {
        let query = [("incidents", "all".to_owned()), ("lang", lang.to_string())];

        let services: Services = self
            .get_json("/services", &query)
            .map_err(|e| ClientError::new(Operation::GetServices, e))?;

        info!("Found {} services", services.len());
        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::Client;
    use crate::consts::{Lang, REGION_RU};
    use crate::test_server::{TestServer, failing_client};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_services() {
        let server = TestServer::start();
        let services = server.client().get_services(Lang::Ru).unwrap();

        assert_eq!(services.len(), 4);
        assert_eq!(services.in_region(REGION_RU).len(), 3);
        assert_eq!(services.ids().len(), 4);
        assert_eq!(services.names().len(), 4);

        let request = server.last_request();
        assert_eq!(request.path, "/services");
        assert_eq!(
            request.query,
            vec![
                ("incidents".to_owned(), "all".to_owned()),
                ("lang".to_owned(), "ru".to_owned())
            ]
        );
        assert_eq!(request.accept.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_get_services_http_error() {
        let server = TestServer::start();
        let err = failing_client(&server, "http-error")
            .get_services(Lang::Ru)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "can't get services status: API returned non-ok status code 503"
        );
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_user_agent_and_rate_limit() {
        let server = TestServer::start();
        let client = Client::builder()
            .api_url(server.url())
            .user_agent("Test", "1.2.3")
            .rate_limit(20.0)
            .build();

        let start = Instant::now();
        client.get_services(Lang::En).unwrap();
        client.get_services(Lang::En).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(45));

        assert_eq!(server.request_count(), 2);
        let request = server.last_request();
        assert!(
            request
                .user_agent
                .unwrap_or_default()
                .starts_with("Test/1.2.3 (ycs/")
        );
        assert!(request.query.contains(&("lang".to_owned(), "en".to_owned())));
    }
}
