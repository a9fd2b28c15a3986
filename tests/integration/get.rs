//! Fetching SAML provider configurations.

use crate::common::fixtures::{
    INVALID_SAML_CONFIG_IDS, NOT_FOUND_RESPONSE, PATH_ESCAPING_IDS, SAML_CONFIG_RESPONSE,
    sample_config,
};
use crate::common::{EchoTransport, echo_client, unscoped_client};
use saml_provider_config::client::HttpMethod;
use saml_provider_config::{ProviderConfigError, RequestContext};

#[tokio::test]
async fn test_get_saml_provider_config() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));

    let config = client
        .saml_provider_config(&RequestContext::default(), "saml.provider")
        .await
        .unwrap();
    assert_eq!(config, sample_config());
    assert_eq!(config.x509_certificates, vec!["CERT1", "CERT2"]);
    assert_eq!(
        config.callback_url,
        "https://projectId.firebaseapp.com/__/auth/handler"
    );

    let request = client.transport().single_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert!(request.body.is_none());
    assert!(request.query.is_empty());
    assert_eq!(
        EchoTransport::request_url(&request).path(),
        "/projects/mock-project-id/inboundSamlConfigs/saml.provider"
    );
}

#[tokio::test]
async fn test_get_invalid_id_never_reaches_transport() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));

    for id in INVALID_SAML_CONFIG_IDS {
        let err = client
            .saml_provider_config(&RequestContext::default(), id)
            .await
            .unwrap_err();
        assert!(
            err.to_string().starts_with("invalid SAML provider id: "),
            "{id:?}: {err}"
        );
    }
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_get_invalid_id_checked_before_project() {
    let client = unscoped_client();
    let err = client
        .saml_provider_config(&RequestContext::default(), "oidc.config")
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn test_get_configuration_not_found() {
    let client = echo_client(EchoTransport::new(NOT_FOUND_RESPONSE).with_status(404));

    let err = client
        .saml_provider_config(&RequestContext::default(), "saml.provider")
        .await
        .unwrap_err();
    assert!(err.is_configuration_not_found(), "{err:?}");
}

#[tokio::test]
async fn test_get_not_found_status_without_code_is_unknown() {
    let client = echo_client(EchoTransport::new("{}").with_status(404));

    let err = client
        .saml_provider_config(&RequestContext::default(), "saml.provider")
        .await
        .unwrap_err();
    match err {
        ProviderConfigError::Unknown { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "{}");
        }
        other => panic!("expected unknown error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_malformed_success_body_is_unknown() {
    let client = echo_client(EchoTransport::new("<html>oops</html>"));

    let err = client
        .saml_provider_config(&RequestContext::default(), "saml.provider")
        .await
        .unwrap_err();
    assert!(err.is_unknown());
}

#[tokio::test]
async fn test_get_without_project_id() {
    let client = unscoped_client();

    let err = client
        .saml_provider_config(&RequestContext::default(), "saml.provider")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "project id not available");
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_get_id_with_path_segments_never_reaches_transport() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));

    for id in PATH_ESCAPING_IDS {
        let err = client
            .saml_provider_config(&RequestContext::default(), id)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("invalid SAML provider id: {id}"));
    }
    assert!(client.transport().requests().is_empty());
}
