// GitHub API endpoint functions.
// Typed requests for the repository record and its readme.

use crate::error::Result;

use super::client::ApiTransport;
use super::types::{Readme, Repository};
use super::url::RepoId;

/// Path of the repository record.
pub fn repo_endpoint(id: &RepoId) -> String {
    format!("/repos/{}/{}", id.owner, id.name)
}

/// Path of the repository's readme.
pub fn readme_endpoint(id: &RepoId) -> String {
    format!("/repos/{}/{}/readme", id.owner, id.name)
}

/// Get a specific repository.
pub async fn get_repo<T: ApiTransport + ?Sized>(transport: &T, id: &RepoId) -> Result<Repository> {
    let endpoint = repo_endpoint(id);
    let response = transport.get(&endpoint).await?;
    response.check_status(&endpoint)?;
    response.json()
}

/// Get the readme of a repository.
pub async fn get_readme<T: ApiTransport + ?Sized>(transport: &T, id: &RepoId) -> Result<Readme> {
    let endpoint = readme_endpoint(id);
    let response = transport.get(&endpoint).await?;
    response.check_status(&endpoint)?;
    response.json()
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::error::CardError;
    use crate::github::client::{ApiResponse, MockApiTransport};

    #[test]
    fn test_endpoints() {
        let id = RepoId::new("acme", "widget");
        assert_eq!(repo_endpoint(&id), "/repos/acme/widget");
        assert_eq!(readme_endpoint(&id), "/repos/acme/widget/readme");
    }

    #[tokio::test]
    async fn test_get_repo_decodes_body() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_get()
            .withf(|endpoint| endpoint.ends_with("/repos/acme/widget"))
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::new(
                    StatusCode::OK,
                    r#"{"name": "widget", "stargazers_count": 3}"#,
                ))
            });

        let repo = get_repo(&transport, &RepoId::new("acme", "widget"))
            .await
            .unwrap();
        assert_eq!(repo.stargazers_count, Some(3));
    }

    #[tokio::test]
    async fn test_get_repo_bad_json() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_get()
            .returning(|_| Ok(ApiResponse::new(StatusCode::OK, "<html>")));

        let err = get_repo(&transport, &RepoId::new("acme", "widget"))
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::Json(_)));
    }

    #[tokio::test]
    async fn test_get_readme_not_found() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_get()
            .withf(|endpoint| endpoint.ends_with("/readme"))
            .returning(|_| Ok(ApiResponse::new(StatusCode::NOT_FOUND, "")));

        let err = get_readme(&transport, &RepoId::new("acme", "widget"))
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::NotFound(_)));
    }
}
