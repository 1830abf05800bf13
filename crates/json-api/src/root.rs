//! Root Handler

use salvo::prelude::*;

/// Root handler
///
/// Plain-text greeting used as a liveness probe by the storefront.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Plain("Bikers Hub"));
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_root_greets() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .send(&Service::new(Router::new().get(handler)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "Bikers Hub");

        Ok(())
    }
}
